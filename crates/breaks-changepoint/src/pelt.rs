//! PELT (Pruned Exact Linear Time) change-point detection
//!
//! Exact penalized segmentation with candidate pruning, O(n) on average.
//! This is the penalized least-squares method behind Bai–Perron style break
//! tests on rolling regression coefficients.

use crate::cost::{segment_cost, CostFunction, SegmentCostEvaluator};
use crate::error::{Error, Result};
use crate::traits::{ChangePointDetectorProperties, SimpleDetector};
use crate::types::Segmentation;

const ALGORITHM_NAME: &str = "PELT";

/// PELT configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PeltParameters {
    /// Cost function scoring each segment
    pub cost: CostFunction,
    /// Penalty per additional segment; higher means fewer breaks
    pub penalty: f64,
    /// Minimum number of points per segment
    pub min_segment_length: usize,
}

impl Default for PeltParameters {
    fn default() -> Self {
        Self {
            cost: CostFunction::L2,
            penalty: 3.0,
            min_segment_length: 2,
        }
    }
}

impl PeltParameters {
    /// BIC-style penalty, `ln(n)` for a series of length `n`.
    pub fn bic(n: usize) -> Self {
        Self {
            penalty: (n as f64).ln(),
            ..Default::default()
        }
    }

    /// AIC-style penalty of 2.
    pub fn aic() -> Self {
        Self {
            penalty: 2.0,
            ..Default::default()
        }
    }

    /// Set the cost function.
    pub fn cost_function(mut self, cost: CostFunction) -> Self {
        self.cost = cost;
        self
    }

    /// Set the penalty.
    pub fn penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Set the minimum segment length.
    pub fn min_segment_length(mut self, min_len: usize) -> Self {
        self.min_segment_length = min_len.max(1);
        self
    }
}

/// PELT change-point detector.
#[derive(Debug, Clone, Default)]
pub struct PeltDetector {
    params: PeltParameters,
}

impl PeltDetector {
    /// Create a detector with the given parameters.
    pub fn new(params: PeltParameters) -> Self {
        Self { params }
    }

    /// Create an L2 detector with the given penalty.
    pub fn with_penalty(penalty: f64) -> Self {
        Self::new(PeltParameters::default().penalty(penalty))
    }

    /// Current parameters.
    pub fn parameters(&self) -> &PeltParameters {
        &self.params
    }
}

impl ChangePointDetectorProperties for PeltDetector {
    fn algorithm_name(&self) -> &'static str {
        ALGORITHM_NAME
    }

    fn minimum_sample_size(&self) -> usize {
        1
    }
}

impl SimpleDetector for PeltDetector {
    fn detect_simple(&self, sample: &[f64]) -> Result<Segmentation> {
        if !self.params.penalty.is_finite() || self.params.penalty < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "penalty must be finite and non-negative, got {}",
                self.params.penalty
            )));
        }
        if sample.is_empty() {
            return Err(Error::InsufficientData {
                expected: self.minimum_sample_size(),
                actual: 0,
            });
        }

        let n = sample.len();
        let min_len = self.params.min_segment_length;
        if n < 2 * min_len {
            let cost = segment_cost(sample, self.params.cost);
            return Ok(Segmentation::new(vec![n], n, ALGORITHM_NAME, cost));
        }

        let eval = SegmentCostEvaluator::new(sample, self.params.cost);
        let penalty = self.params.penalty;

        // f[t] = minimum penalized cost of segmenting sample[0..t]
        let mut f = vec![f64::INFINITY; n + 1];
        // First segment must not pay the per-segment penalty twice
        f[0] = -penalty;

        // last_break[t] = optimal last boundary before t
        let mut last_break = vec![0usize; n + 1];

        // Candidate set, pruned as the scan advances
        let mut candidates: Vec<usize> = vec![0];

        for t in min_len..=n {
            let mut best_cost = f64::INFINITY;
            let mut best_prev = 0;

            for &s in &candidates {
                if t - s < min_len {
                    continue;
                }
                let total = f[s] + eval.evaluate(s, t) + penalty;
                if total < best_cost {
                    best_cost = total;
                    best_prev = s;
                }
            }

            f[t] = best_cost;
            last_break[t] = best_prev;

            // Prune candidates that can no longer become optimal
            candidates.retain(|&s| t - s < min_len || f[s] + eval.evaluate(s, t) <= f[t]);
            candidates.push(t);
        }

        // Backtrack interior boundaries
        let mut boundaries = Vec::new();
        let mut t = n;
        while t > 0 {
            let prev = last_break[t];
            if prev > 0 {
                boundaries.push(prev);
            }
            t = prev;
        }
        boundaries.reverse();
        boundaries.push(n);

        let mut total_cost = 0.0;
        let mut start = 0;
        for &end in &boundaries {
            total_cost += eval.evaluate(start, end);
            start = end;
        }

        Ok(Segmentation::new(boundaries, n, ALGORITHM_NAME, total_cost))
    }
}
