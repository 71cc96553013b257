//! Rendering of break-annotated coefficient charts
//!
//! Draws two coefficient series over a calendar time axis, overlays a
//! dashed vertical marker and a `Break: <year>` label for each detected
//! structural break, and writes the result to a PNG of fixed pixel
//! geometry.
//!
//! Label placement is a best-effort non-overlap heuristic: labels alternate
//! between two heights (or sit at a fixed height) and are pulled back from
//! the right edge of the axis when a break falls near the end of the range.
//! Output is a pure function of the inputs; rendering the same chart twice
//! produces byte-identical files.

mod error;
mod render;
mod style;

pub use error::{Error, Result};
pub use render::{render, BreaksChart};
pub use style::{
    points_to_pixels, BreakMarkerStyle, FigureSpec, LabelOffsets, SeriesSpec, VerticalPlacement,
};

// Color type used by SeriesSpec, re-exported for downstream crates.
pub use plotters::style::RGBColor;
