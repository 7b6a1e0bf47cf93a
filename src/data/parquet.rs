//! Parquet file handling for interaction data

use anyhow::Result;
use polars::prelude::*;

use crate::data::{interactions_from_frame, InteractionSet};

/// Read interactions from a Parquet file, using its first two columns
pub fn load_interactions(path: &str) -> Result<InteractionSet> {
    log::info!("Reading parquet file: {}", path);

    let df = LazyFrame::scan_parquet(path, Default::default())?.collect()?;

    log::info!("File schema: {:?}", df.schema());
    log::info!("Loaded {} rows", df.height());

    interactions_from_frame(&df)
}
