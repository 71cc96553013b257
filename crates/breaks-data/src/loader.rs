//! CSV loading

use std::path::Path;

use polars::prelude::*;

use crate::error::Result;

/// Read a headered CSV into a DataFrame.
///
/// A missing or malformed file is an error; nothing is retried or
/// recovered.
pub fn load_table(path: impl AsRef<Path>) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    Ok(df)
}
