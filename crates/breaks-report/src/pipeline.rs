//! The four-step report pipeline

use std::fs;
use std::path::PathBuf;

use breaks_changepoint::{PeltDetector, SimpleDetector};
use breaks_data::{load_table, select_features, ColumnSpec, TimeAxisSpec};
use breaks_plot::{render, BreaksChart};

use crate::error::Result;

/// Full parameter set of one report variant.
#[derive(Debug, Clone)]
pub struct BreakAnalysis {
    pub name: &'static str,
    pub data_path: PathBuf,
    pub output_path: PathBuf,
    pub columns: ColumnSpec,
    pub time_axis: TimeAxisSpec,
    /// PELT penalty; higher means fewer breaks
    pub penalty: f64,
    pub chart: BreaksChart,
}

/// What a completed report produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub break_years: Vec<f64>,
    pub output_path: PathBuf,
}

/// Run one report variant end to end.
pub fn run(analysis: &BreakAnalysis) -> Result<ReportOutcome> {
    let table = load_table(&analysis.data_path)?;
    let features = select_features(&table, &analysis.columns, &analysis.time_axis)?;

    let detector = PeltDetector::with_penalty(analysis.penalty);
    let segmentation = detector.detect_simple(&features.consumption)?;
    let break_years = map_break_years(&features.years, segmentation.boundaries());

    if let Some(dir) = analysis.output_path.parent() {
        fs::create_dir_all(dir)?;
    }
    render(
        &analysis.chart,
        &features.years,
        &features.wage,
        &features.inflation,
        &break_years,
        &analysis.output_path,
    )?;

    Ok(ReportOutcome {
        break_years,
        output_path: analysis.output_path.clone(),
    })
}

/// Translate segment boundaries to calendar years.
///
/// A boundary `i` labels the last observation of the segment ending at `i`,
/// so it maps to `years[i - 1]`. The bounds check drops the detector's
/// terminal sentinel (a boundary equal to the series length).
pub fn map_break_years(years: &[f64], boundaries: &[usize]) -> Vec<f64> {
    boundaries
        .iter()
        .filter(|&&i| i >= 1 && i < years.len())
        .map(|&i| years[i - 1])
        .collect()
}
