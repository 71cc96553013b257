//! Error types for breaks-report
//!
//! Every pipeline failure is fatal: nothing is retried and no partial
//! result is recovered.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Data error: {0}")]
    Data(#[from] breaks_data::Error),

    #[error("Detection error: {0}")]
    Detection(#[from] breaks_changepoint::Error),

    #[error("Plot error: {0}")]
    Plot(#[from] breaks_plot::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
