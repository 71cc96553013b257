//! Chart assembly and PNG output

use std::iter;
use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::error::{Error, Result};
use crate::style::{BreakMarkerStyle, FigureSpec, SeriesSpec};

/// Description of one break-annotated chart.
///
/// Holds everything except the data arrays: titles, geometry, per-series
/// styling, an optional explicit x-range, and the break-marker heuristics.
#[derive(Debug, Clone, PartialEq)]
pub struct BreaksChart {
    pub title: String,
    /// Title font size in pixels
    pub title_px: u32,
    pub x_label: String,
    pub y_label: String,
    pub figure: FigureSpec,
    /// First plotted series (wage coefficient in the reports)
    pub primary: SeriesSpec,
    /// Second plotted series (inflation coefficient in the reports)
    pub secondary: SeriesSpec,
    /// Explicit x-limits; defaults to the data range
    pub x_range: Option<(f64, f64)>,
    pub marker: BreakMarkerStyle,
}

/// Render the chart to a PNG at `path`.
///
/// `primary` and `secondary` are drawn against `years`; each entry of
/// `breaks` gets a dashed vertical marker and a `Break: <year>` label.
/// Output depends only on the arguments.
pub fn render(
    chart: &BreaksChart,
    years: &[f64],
    primary: &[f64],
    secondary: &[f64],
    breaks: &[f64],
    path: &Path,
) -> Result<()> {
    if years.is_empty() {
        return Err(Error::InvalidInput("empty time axis".to_string()));
    }
    if years.len() != primary.len() || years.len() != secondary.len() {
        return Err(Error::InvalidInput(format!(
            "series length mismatch: time axis has {} points, series have {} and {}",
            years.len(),
            primary.len(),
            secondary.len()
        )));
    }

    let year_min = years.iter().copied().fold(f64::INFINITY, f64::min);
    let year_max = years.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (x_min, x_max) = chart.x_range.unwrap_or((year_min, year_max));
    let x_pad = if x_max > x_min { 0.0 } else { 0.5 };

    let y_min = primary
        .iter()
        .chain(secondary)
        .copied()
        .fold(f64::INFINITY, f64::min);
    let y_max = primary
        .iter()
        .chain(secondary)
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let y_span = y_max - y_min;
    let y_pad = if y_span > 0.0 { 0.05 * y_span } else { 1.0 };

    let root = BitMapBackend::new(path, (chart.figure.width, chart.figure.height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", chart.title_px))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_min - x_pad)..(x_max + x_pad),
            (y_min - y_pad)..(y_max + y_pad),
        )
        .map_err(render_error)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()
        .map_err(render_error)?;

    for (spec, data) in [(&chart.primary, primary), (&chart.secondary, secondary)] {
        let color = spec.color;
        ctx.draw_series(LineSeries::new(
            years.iter().copied().zip(data.iter().copied()),
            color.stroke_width(spec.stroke_width),
        ))
        .map_err(render_error)?
        .label(spec.label.as_str())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });
    }

    let marker_style = BLUE.stroke_width(chart.marker.line_width);
    let label_font = ("sans-serif", chart.marker.font_px)
        .into_font()
        .color(&BLUE);
    for (i, &year) in breaks.iter().enumerate() {
        ctx.draw_series(DashedLineSeries::new(
            [(year, y_min - y_pad), (year, y_max + y_pad)],
            8,
            6,
            marker_style,
        ))
        .map_err(render_error)?;

        let label_x = chart.marker.offsets.label_x(year, year_max);
        let label_y = chart.marker.vertical.label_y(i, y_max);
        ctx.draw_series(iter::once(Text::new(
            format!("Break: {}", year as i64),
            (label_x, label_y),
            label_font.clone(),
        )))
        .map_err(render_error)?;
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

fn render_error(e: impl std::fmt::Display) -> Error {
    Error::Render(e.to_string())
}
