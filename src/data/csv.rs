//! CSV file handling for interaction data

use anyhow::Result;
use polars::prelude::*;

use crate::data::{interactions_from_frame, InteractionSet};

/// Read an interaction CSV, using its first two columns whatever their names
pub fn load_interactions(path: &str, has_header: bool) -> Result<InteractionSet> {
    log::info!("Reading CSV file: {}", path);

    // Read every column as text, handles may look numeric
    let df = CsvReadOptions::default()
        .with_has_header(has_header)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()?;

    log::info!("Loaded {} rows with {} columns", df.height(), df.width());

    interactions_from_frame(&df)
}
