//! Segment cost functions for penalized segmentation
//!
//! A cost function measures how badly a single model fits a contiguous
//! segment of the series. The segmentation search trades total cost against
//! a per-break penalty.

/// Cost function used to score a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostFunction {
    /// Sum of absolute deviations from the segment median
    L1,
    /// Sum of squared deviations from the segment mean
    #[default]
    L2,
    /// Gaussian likelihood cost, `n * ln(variance)`
    Normal,
}

/// Compute the cost of a segment under the given cost function.
pub fn segment_cost(segment: &[f64], cost: CostFunction) -> f64 {
    match cost {
        CostFunction::L1 => l1_cost(segment),
        CostFunction::L2 => l2_cost(segment),
        CostFunction::Normal => normal_cost(segment),
    }
}

fn l1_cost(segment: &[f64]) -> f64 {
    if segment.is_empty() {
        return 0.0;
    }
    let median = median(segment);
    segment.iter().map(|x| (x - median).abs()).sum()
}

fn l2_cost(segment: &[f64]) -> f64 {
    if segment.is_empty() {
        return 0.0;
    }
    let mean = segment.iter().sum::<f64>() / segment.len() as f64;
    segment.iter().map(|x| (x - mean).powi(2)).sum()
}

fn normal_cost(segment: &[f64]) -> f64 {
    let n = segment.len();
    if n < 2 {
        return 0.0;
    }
    let mean = segment.iter().sum::<f64>() / n as f64;
    let variance = segment.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    if variance < 1e-10 {
        return 0.0;
    }
    n as f64 * variance.ln()
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Cost evaluator over half-open index ranges of one series.
///
/// L2 and Normal costs are answered in O(1) from cumulative sums; L1 falls
/// back to a direct pass over the segment.
pub(crate) struct SegmentCostEvaluator<'a> {
    series: &'a [f64],
    cost: CostFunction,
    cum_sum: Vec<f64>,
    cum_sum_sq: Vec<f64>,
}

impl<'a> SegmentCostEvaluator<'a> {
    pub fn new(series: &'a [f64], cost: CostFunction) -> Self {
        let mut cum_sum = Vec::with_capacity(series.len() + 1);
        let mut cum_sum_sq = Vec::with_capacity(series.len() + 1);
        cum_sum.push(0.0);
        cum_sum_sq.push(0.0);
        let (mut acc, mut acc_sq) = (0.0, 0.0);
        for &x in series {
            acc += x;
            acc_sq += x * x;
            cum_sum.push(acc);
            cum_sum_sq.push(acc_sq);
        }
        Self {
            series,
            cost,
            cum_sum,
            cum_sum_sq,
        }
    }

    /// Cost of `series[start..end]`.
    pub fn evaluate(&self, start: usize, end: usize) -> f64 {
        let n = end - start;
        if n == 0 {
            return 0.0;
        }
        match self.cost {
            CostFunction::L1 => l1_cost(&self.series[start..end]),
            CostFunction::L2 => {
                let sum = self.cum_sum[end] - self.cum_sum[start];
                let sum_sq = self.cum_sum_sq[end] - self.cum_sum_sq[start];
                let mean = sum / n as f64;
                (sum_sq - n as f64 * mean * mean).max(0.0)
            }
            CostFunction::Normal => {
                if n < 2 {
                    return 0.0;
                }
                let sum = self.cum_sum[end] - self.cum_sum[start];
                let sum_sq = self.cum_sum_sq[end] - self.cum_sum_sq[start];
                let mean = sum / n as f64;
                let variance = (sum_sq - n as f64 * mean * mean).max(0.0) / n as f64;
                if variance < 1e-10 {
                    0.0
                } else {
                    n as f64 * variance.ln()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn l1_cost_known() {
        // [1, 2, 3, 4, 5] -> median = 3, total absolute deviation = 6
        let segment = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(segment_cost(&segment, CostFunction::L1), 6.0, epsilon = 1e-10);
    }

    #[test]
    fn l2_cost_known() {
        // [1, 2, 3, 4, 5] -> mean = 3, sum of squares = 10
        let segment = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(segment_cost(&segment, CostFunction::L2), 10.0, epsilon = 1e-10);
    }

    #[test]
    fn normal_cost_known() {
        // variance = 2, cost = 5 * ln(2)
        let segment = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let expected = 5.0 * 2.0_f64.ln();
        assert_relative_eq!(segment_cost(&segment, CostFunction::Normal), expected, epsilon = 1e-10);
    }

    #[test]
    fn constant_segment_costs_nothing() {
        let segment = vec![5.0; 10];
        for cost in [CostFunction::L1, CostFunction::L2, CostFunction::Normal] {
            assert_relative_eq!(segment_cost(&segment, cost), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn empty_segment_costs_nothing() {
        for cost in [CostFunction::L1, CostFunction::L2, CostFunction::Normal] {
            assert_relative_eq!(segment_cost(&[], cost), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn evaluator_matches_direct_computation() {
        let series = vec![1.0, 4.0, 2.0, 8.0, 5.0, 7.0, 1.0, 3.0];
        for cost in [CostFunction::L1, CostFunction::L2, CostFunction::Normal] {
            let eval = SegmentCostEvaluator::new(&series, cost);
            for start in 0..series.len() {
                for end in start..=series.len() {
                    assert_relative_eq!(
                        eval.evaluate(start, end),
                        segment_cost(&series[start..end], cost),
                        epsilon = 1e-8
                    );
                }
            }
        }
    }

    #[test]
    fn default_cost_is_l2() {
        assert_eq!(CostFunction::default(), CostFunction::L2);
    }
}
