//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works without a config file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub export: ExportConfig,
    /// Localized overrides keyed by message key.
    #[serde(default)]
    pub strings: HashMap<String, String>,
}

/// Where the filter catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The bundled sample catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Page and modal behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Ask for confirmation before staged filters are committed.
    #[serde(default = "default_true")]
    pub confirm_before_apply: bool,
    #[serde(default = "default_true")]
    pub show_debug: bool,
    #[serde(default = "default_true")]
    pub show_descriptions: bool,
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_before_apply: true,
            show_debug: true,
            show_descriptions: true,
            status_timeout_secs: default_status_timeout(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `EnvFilter` directive, e.g. `"info"` or `"tripfilter=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Destination for exported filters; defaults under the data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ExportConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tripfilter")
                .join("filters.json")
        })
    }
}

fn default_true() -> bool {
    true
}

fn default_status_timeout() -> u64 {
    4
}

fn default_log_dir() -> String {
    "~/.local/share/tripfilter/logs".into()
}

fn default_log_level() -> String {
    "info".into()
}
