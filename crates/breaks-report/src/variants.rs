//! The three report variants
//!
//! Parameter sets mirror the original analysis figures: replication
//! (1970–2007), manufacturing (1990–2022), and all industries. Font and
//! stroke sizes are given in points and scaled to pixels at each figure's
//! DPI.

use std::path::PathBuf;

use breaks_data::{ColumnSpec, TimeAxisSpec};
use breaks_plot::{
    points_to_pixels, BreakMarkerStyle, BreaksChart, FigureSpec, LabelOffsets, RGBColor,
    SeriesSpec, VerticalPlacement,
};

use crate::pipeline::BreakAnalysis;

const DARK_RED: RGBColor = RGBColor(139, 0, 0);
const SEA_GREEN: RGBColor = RGBColor(46, 139, 87);
const RED: RGBColor = RGBColor(255, 0, 0);
const GREEN: RGBColor = RGBColor(0, 128, 0);

/// Replication of the 1970–2007 wage/productivity/inflation analysis.
pub fn replication() -> BreakAnalysis {
    let dpi = 300;
    BreakAnalysis {
        name: "replication",
        data_path: PathBuf::from("data/replication_1970_2007_wage_productivity_inflation.csv"),
        output_path: PathBuf::from("plots/replication_rolling_breaks_plot.png"),
        columns: ColumnSpec::default(),
        time_axis: TimeAxisSpec::column("year"),
        penalty: 3.0,
        chart: BreaksChart {
            title: "Rolling Regression Coefficients and Bai-Perron Breaks Test for Extension"
                .to_string(),
            title_px: points_to_pixels(9.0, dpi),
            x_label: "Year".to_string(),
            y_label: "Coefficient Value".to_string(),
            figure: FigureSpec::from_inches(10.0, 5.0, dpi),
            primary: SeriesSpec::new("ln(Real Wage)", DARK_RED, points_to_pixels(1.8, dpi)),
            secondary: SeriesSpec::new("Inflation", SEA_GREEN, points_to_pixels(1.8, dpi)),
            x_range: None,
            marker: BreakMarkerStyle {
                line_width: points_to_pixels(1.0, dpi),
                font_px: points_to_pixels(6.0, dpi),
                offsets: LabelOffsets::forward_or_back(0.3, 1.0, 2.0),
                vertical: VerticalPlacement::Alternating {
                    upper: 0.82,
                    lower: 0.70,
                },
            },
        },
    }
}

/// Manufacturing sector, 1990–2022 rolling windows.
pub fn manufacture() -> BreakAnalysis {
    let dpi = 150;
    BreakAnalysis {
        name: "manufacture",
        data_path: PathBuf::from("data/1990_2022_manufacture_wage_productivity_inflation.csv"),
        output_path: PathBuf::from("plots/manufacture_rolling_breaks_plot.png"),
        columns: ColumnSpec::default(),
        time_axis: TimeAxisSpec::column_or_midpoint("year", "start", "end"),
        penalty: 3.0,
        chart: BreaksChart {
            title: "Structural Breaks in Manufacturing Sector (1990-2022)".to_string(),
            title_px: points_to_pixels(12.0, dpi),
            x_label: "Year".to_string(),
            y_label: "Coefficient Value".to_string(),
            figure: FigureSpec::from_inches(12.0, 6.0, dpi),
            primary: SeriesSpec::new("ln(Real Wage)", DARK_RED, points_to_pixels(2.0, dpi)),
            secondary: SeriesSpec::new("Inflation", SEA_GREEN, points_to_pixels(2.0, dpi)),
            x_range: Some((1990.0, 2022.0)),
            marker: BreakMarkerStyle {
                line_width: points_to_pixels(1.0, dpi),
                font_px: points_to_pixels(9.0, dpi),
                offsets: LabelOffsets::forward_or_back(0.2, 1.0, 0.8),
                vertical: VerticalPlacement::Alternating {
                    upper: 0.84,
                    lower: 0.70,
                },
            },
        },
    }
}

/// All industries, windowed coefficients keyed by window midpoint.
pub fn all_industries() -> BreakAnalysis {
    let dpi = 300;
    BreakAnalysis {
        name: "all_industries",
        data_path: PathBuf::from("data/all_industries_wage_productivity_inflation.csv"),
        output_path: PathBuf::from("plots/all_industries_rolling_breaks_plot.png"),
        columns: ColumnSpec::default(),
        time_axis: TimeAxisSpec::column_or_midpoint("window_mid", "start", "end"),
        penalty: 3.0,
        chart: BreaksChart {
            title: "Rolling Regression Coefficients and Bai-Perron Breaks of all industries"
                .to_string(),
            title_px: points_to_pixels(12.0, dpi),
            x_label: "Year".to_string(),
            y_label: "Coefficient Value".to_string(),
            figure: FigureSpec::from_inches(12.0, 6.0, dpi),
            primary: SeriesSpec::new("ln(Wage)", RED, points_to_pixels(1.5, dpi)),
            secondary: SeriesSpec::new("Inflation", GREEN, points_to_pixels(1.5, dpi)),
            x_range: None,
            marker: BreakMarkerStyle {
                line_width: points_to_pixels(1.0, dpi),
                font_px: points_to_pixels(8.0, dpi),
                offsets: LabelOffsets::forward(0.2),
                vertical: VerticalPlacement::Fixed(0.9),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_uses_the_same_penalty() {
        for analysis in [replication(), manufacture(), all_industries()] {
            assert_eq!(analysis.penalty, 3.0);
        }
    }

    #[test]
    fn figure_geometry_per_variant() {
        assert_eq!(replication().chart.figure, FigureSpec { width: 3000, height: 1500 });
        assert_eq!(manufacture().chart.figure, FigureSpec { width: 1800, height: 900 });
        assert_eq!(all_industries().chart.figure, FigureSpec { width: 3600, height: 1800 });
    }

    #[test]
    fn manufacture_is_clamped_to_its_window() {
        assert_eq!(manufacture().chart.x_range, Some((1990.0, 2022.0)));
        assert_eq!(replication().chart.x_range, None);
    }

    #[test]
    fn time_axis_policies_differ() {
        assert_eq!(replication().time_axis, TimeAxisSpec::column("year"));
        assert_eq!(
            manufacture().time_axis,
            TimeAxisSpec::column_or_midpoint("year", "start", "end")
        );
        assert_eq!(
            all_industries().time_axis,
            TimeAxisSpec::column_or_midpoint("window_mid", "start", "end")
        );
    }
}
