//! Change-point detection for economic time series
//!
//! This crate provides penalized least-squares segmentation (PELT) for
//! locating structural breaks in a one-dimensional series, such as rolling
//! regression coefficients.
//!
//! # Usage
//!
//! ```rust
//! use breaks_changepoint::{PeltDetector, PeltParameters, SimpleDetector};
//!
//! // Level shift halfway through the series
//! let data: Vec<f64> = (0..50).map(|i| if i < 25 { 0.0 } else { 5.0 }).collect();
//!
//! let detector = PeltDetector::new(PeltParameters::default().penalty(3.0));
//! let segmentation = detector.detect_simple(&data).unwrap();
//!
//! assert_eq!(segmentation.break_indices(), vec![25]);
//! ```
//!
//! Boundary convention: a segmentation over `n` points always carries the
//! terminal boundary `n` as its last element, so segment boundaries live in
//! `[1, n]` and interior boundaries (the actual breaks) are strictly less
//! than `n`.

pub mod cost;
pub mod error;
pub mod pelt;
pub mod traits;
pub mod types;

pub use cost::{segment_cost, CostFunction};
pub use error::{Error, Result};
pub use pelt::{PeltDetector, PeltParameters};
pub use traits::{ChangePointDetectorProperties, SimpleDetector};
pub use types::Segmentation;
