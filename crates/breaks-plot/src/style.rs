//! Chart styling: figure geometry, series styles, label heuristics

use plotters::style::RGBColor;

/// Convert a typographic point size to pixels at the given DPI.
pub fn points_to_pixels(points: f64, dpi: u32) -> u32 {
    (points * dpi as f64 / 72.0).round() as u32
}

/// Output raster geometry in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureSpec {
    pub width: u32,
    pub height: u32,
}

impl FigureSpec {
    /// Figure size given in inches at the target DPI.
    pub fn from_inches(width: f64, height: f64, dpi: u32) -> Self {
        Self {
            width: (width * dpi as f64).round() as u32,
            height: (height * dpi as f64).round() as u32,
        }
    }
}

/// Styling of one plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

impl SeriesSpec {
    pub fn new(label: impl Into<String>, color: RGBColor, stroke_width: u32) -> Self {
        Self {
            label: label.into(),
            color,
            stroke_width,
        }
    }
}

/// Horizontal placement of a break label relative to its marker.
///
/// The label is nudged `forward` past the marker, unless the break year
/// falls within `margin` of the right end of the time axis, in which case
/// it is pulled `back` to stay inside the plot bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOffsets {
    pub forward: f64,
    pub pull_back: Option<PullBack>,
}

/// Pull-back rule applied near the right edge of the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullBack {
    pub margin: f64,
    pub back: f64,
}

impl LabelOffsets {
    /// Always place the label `forward` of the marker.
    pub fn forward(forward: f64) -> Self {
        Self {
            forward,
            pull_back: None,
        }
    }

    /// Place forward, pulling back within `margin` of the axis end.
    pub fn forward_or_back(forward: f64, margin: f64, back: f64) -> Self {
        Self {
            forward,
            pull_back: Some(PullBack { margin, back }),
        }
    }

    /// Label x position for a break at `year` on an axis ending at `year_max`.
    pub fn label_x(&self, year: f64, year_max: f64) -> f64 {
        match self.pull_back {
            Some(PullBack { margin, back }) if year > year_max - margin => year - back,
            _ => year + self.forward,
        }
    }
}

/// Vertical placement of break labels, as a fraction of the y maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalPlacement {
    /// Same height for every label
    Fixed(f64),
    /// Alternate by break parity to reduce overlap
    Alternating { upper: f64, lower: f64 },
}

impl VerticalPlacement {
    /// Label y position for the `index`-th break given the series maximum.
    pub fn label_y(&self, index: usize, y_max: f64) -> f64 {
        match *self {
            VerticalPlacement::Fixed(fraction) => y_max * fraction,
            VerticalPlacement::Alternating { upper, lower } => {
                y_max * if index % 2 == 0 { upper } else { lower }
            }
        }
    }
}

/// Full styling of the break markers and their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakMarkerStyle {
    /// Marker line width in pixels
    pub line_width: u32,
    /// Label font size in pixels
    pub font_px: u32,
    pub offsets: LabelOffsets,
    pub vertical: VerticalPlacement,
}
