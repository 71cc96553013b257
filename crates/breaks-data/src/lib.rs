//! Data access for rolling-regression break analysis
//!
//! Loads a CSV of rolling regression coefficients into a Polars DataFrame
//! and extracts the predictor/target columns together with a calendar time
//! axis. The time axis is either an explicit column or the midpoint of
//! rolling-window bounds, `(start + end) / 2`.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use breaks_data::{select_features, ColumnSpec, TimeAxisSpec};
//!
//! let df = df![
//!     "year" => [1990.0, 1991.0, 1992.0],
//!     "b_wage" => [0.4, 0.5, 0.6],
//!     "b_infl" => [0.1, 0.1, 0.2],
//!     "b_cons" => [0.7, 0.7, 0.2],
//! ].unwrap();
//!
//! let features = select_features(&df, &ColumnSpec::default(), &TimeAxisSpec::column("year")).unwrap();
//! assert_eq!(features.years.len(), features.consumption.len());
//! ```

mod error;
mod loader;
mod select;

pub use error::{Error, Result};
pub use loader::load_table;
pub use select::{column_f64, select_features, ColumnSpec, FeatureSet, TimeAxisSpec};
