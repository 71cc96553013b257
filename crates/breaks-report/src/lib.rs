//! Structural-break reports
//!
//! One pipeline, three parameterizations. Each report loads a CSV of
//! rolling regression coefficients, detects structural breaks in the
//! consumption coefficient with PELT, and renders a labeled chart with
//! vertical break markers:
//!
//! load → select columns → detect breaks → plot → save
//!
//! The three variants (replication 1970–2007, manufacturing 1990–2022, all
//! industries) differ only in data/output paths, time-axis policy, figure
//! geometry, and label-placement heuristics; see [`variants`].

pub mod error;
pub mod pipeline;
pub mod variants;

pub use error::{Error, Result};
pub use pipeline::{map_break_years, run, BreakAnalysis, ReportOutcome};
