//! Column extraction and time-axis resolution

use polars::prelude::*;

use crate::error::{Error, Result};

/// Names of the coefficient columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Wage coefficient (predictor)
    pub wage: String,
    /// Inflation coefficient (predictor)
    pub inflation: String,
    /// Consumption coefficient (break-detection target)
    pub consumption: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            wage: "b_wage".to_string(),
            inflation: "b_infl".to_string(),
            consumption: "b_cons".to_string(),
        }
    }
}

/// How to derive the calendar time axis from the table.
///
/// The preferred column wins when present; otherwise the midpoint of the
/// window bounds, `(start + end) / 2`, is computed. With neither available
/// the resolution fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAxisSpec {
    preferred: String,
    bounds: Option<(String, String)>,
}

impl TimeAxisSpec {
    /// Require an explicit time column.
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            preferred: name.into(),
            bounds: None,
        }
    }

    /// Prefer an explicit column, falling back to window midpoints.
    pub fn column_or_midpoint(
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            preferred: name.into(),
            bounds: Some((start.into(), end.into())),
        }
    }

    /// Resolve the time axis against a table.
    pub fn resolve(&self, df: &DataFrame) -> Result<Vec<f64>> {
        if has_column(df, &self.preferred) {
            return column_f64(df, &self.preferred);
        }
        match &self.bounds {
            Some((start, end)) => {
                let start = column_f64(df, start)?;
                let end = column_f64(df, end)?;
                Ok(start
                    .iter()
                    .zip(&end)
                    .map(|(s, e)| (s + e) / 2.0)
                    .collect())
            }
            None => Err(Error::MissingColumn(self.preferred.clone())),
        }
    }
}

/// Predictor and target arrays aligned with the time axis.
///
/// All vectors have the same length by construction, one entry per table
/// row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    /// Calendar years (or window midpoints)
    pub years: Vec<f64>,
    /// Wage coefficient series
    pub wage: Vec<f64>,
    /// Inflation coefficient series
    pub inflation: Vec<f64>,
    /// Consumption coefficient series, the break-detection target
    pub consumption: Vec<f64>,
}

impl FeatureSet {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Check for an empty table.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Extract the coefficient columns and time axis as numeric arrays.
pub fn select_features(
    df: &DataFrame,
    columns: &ColumnSpec,
    time_axis: &TimeAxisSpec,
) -> Result<FeatureSet> {
    Ok(FeatureSet {
        years: time_axis.resolve(df)?,
        wage: column_f64(df, &columns.wage)?,
        inflation: column_f64(df, &columns.inflation)?,
        consumption: column_f64(df, &columns.consumption)?,
    })
}

/// Extract a column as `Vec<f64>`, casting integers as needed.
pub fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)
        .map_err(|_| Error::MissingColumn(name.to_string()))?;
    let casted = column.cast(&DataType::Float64)?;
    let ca = casted.f64()?;
    ca.into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| Error::InvalidColumn(format!("{name}: null value at row {row}")))
        })
        .collect()
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}
