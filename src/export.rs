//! Writes the committed filters to disk as the JSON request body.

use crate::filter::SearchRequestFilter;
use anyhow::{Context, Result};
use std::path::Path;

pub fn export_filters(path: &Path, filters: &SearchRequestFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export directory {}", parent.display()))?;
    }
    let contents = filters
        .to_pretty_json()
        .with_context(|| "Failed to serialize filters")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write filters to {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = filters.len(), "filters exported");
    Ok(())
}
