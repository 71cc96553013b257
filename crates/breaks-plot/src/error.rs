//! Error types for breaks-plot

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Series/axis inputs that cannot be charted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backend drawing or file-write failure
    #[error("Rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
