//! Error types for breaks-data

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),
}

pub type Result<T> = std::result::Result<T, Error>;
