//! Filter catalog providers.
//!
//! A provider hands over the full list of filter categories in one snapshot.
//! Fetching happens on a blocking task and the outcome comes back to the UI
//! loop as an `AppEvent`.

mod builtin;
mod file;

pub use builtin::BuiltinCatalog;
pub use file::FileCatalog;

use crate::app::event::AppEvent;
use crate::config::model::CatalogConfig;
use crate::filter::FilterItem;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read filter catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse filter catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid filter catalog: {0}")]
    Invalid(String),
}

pub trait CatalogProvider: Send + Sync {
    fn fetch(&self) -> Result<Vec<FilterItem>, CatalogError>;
}

/// Pick the provider for the configured catalog source.
pub fn provider_from_config(config: &CatalogConfig) -> Arc<dyn CatalogProvider> {
    match &config.path {
        Some(path) => Arc::new(FileCatalog::new(path.clone())),
        None => Arc::new(BuiltinCatalog),
    }
}

/// Reject catalogs with duplicate category ids or duplicate option ids
/// inside one category.
pub fn validate(items: Vec<FilterItem>) -> Result<Vec<FilterItem>, CatalogError> {
    let mut categories = HashSet::new();
    for item in &items {
        if !categories.insert(item.id.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "duplicate category id \"{}\"",
                item.id
            )));
        }
        let mut options = HashSet::new();
        for option in &item.options {
            if !options.insert(option.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate option id \"{}\" in category \"{}\"",
                    option.id, item.id
                )));
            }
        }
    }
    Ok(items)
}

/// Fetch on a blocking task and report the result on `tx`.
pub fn spawn_fetch(provider: Arc<dyn CatalogProvider>, tx: UnboundedSender<AppEvent>) {
    tokio::task::spawn_blocking(move || {
        let event = match provider.fetch().and_then(validate) {
            Ok(items) => {
                tracing::info!(categories = items.len(), "filter catalog loaded");
                AppEvent::CatalogLoaded(items)
            }
            Err(e) => {
                tracing::error!(error = %e, "filter catalog unavailable");
                AppEvent::CatalogFailed(e.to_string())
            }
        };
        let _ = tx.send(event);
    });
}
