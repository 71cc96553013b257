//! Types produced by change-point detection

use std::fmt;

/// Result of segmenting a series into contiguous regimes.
///
/// Boundaries are ordered segment-end indices in `[1, n]`. The terminal
/// boundary `n` is always present; interior boundaries are the structural
/// breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    boundaries: Vec<usize>,
    sample_size: usize,
    algorithm: &'static str,
    cost: f64,
}

impl Segmentation {
    /// Create a new segmentation result.
    pub fn new(
        boundaries: Vec<usize>,
        sample_size: usize,
        algorithm: &'static str,
        cost: f64,
    ) -> Self {
        debug_assert!(boundaries.windows(2).all(|w| w[0] < w[1]));
        debug_assert_eq!(boundaries.last().copied(), Some(sample_size));
        Self {
            boundaries,
            sample_size,
            algorithm,
            cost,
        }
    }

    /// Ordered segment boundaries, terminal sentinel included.
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Interior break indices, strictly less than the sample size.
    pub fn break_indices(&self) -> Vec<usize> {
        self.boundaries
            .iter()
            .copied()
            .filter(|&b| b < self.sample_size)
            .collect()
    }

    /// Number of interior breaks.
    pub fn count(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    /// Check whether any interior break was detected.
    pub fn has_breaks(&self) -> bool {
        self.count() > 0
    }

    /// `(start, end)` half-open index ranges of each segment.
    pub fn segments(&self) -> Vec<(usize, usize)> {
        let mut segments = Vec::with_capacity(self.boundaries.len());
        let mut start = 0;
        for &end in &self.boundaries {
            segments.push((start, end));
            start = end;
        }
        segments
    }

    /// Mean of each segment of `series`.
    ///
    /// `series` must be the sample the segmentation was computed from.
    pub fn segment_means(&self, series: &[f64]) -> Vec<f64> {
        self.segments()
            .iter()
            .map(|&(start, end)| {
                let segment = &series[start..end];
                if segment.is_empty() {
                    f64::NAN
                } else {
                    segment.iter().sum::<f64>() / segment.len() as f64
                }
            })
            .collect()
    }

    /// Number of data points analyzed.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Name of the detection algorithm.
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Total segment cost, penalty excluded.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Segmentation:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Breaks detected: {}", self.count())?;
        if self.has_breaks() {
            writeln!(f, "  Break indices: {:?}", self.break_indices())?;
        }
        Ok(())
    }
}
