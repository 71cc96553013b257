//! Core traits for change-point detection

use crate::error::Result;
use crate::types::Segmentation;

/// Properties of a detector that do not depend on the data.
pub trait ChangePointDetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum sample size required for detection
    fn minimum_sample_size(&self) -> usize;
}

/// Detectors that operate on a plain slice without external estimators.
pub trait SimpleDetector: ChangePointDetectorProperties {
    /// Segment the sample, returning ordered boundaries in `[1, len]`.
    fn detect_simple(&self, sample: &[f64]) -> Result<Segmentation>;
}
