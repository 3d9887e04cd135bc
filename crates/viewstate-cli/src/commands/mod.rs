pub mod assign;
pub mod config;
pub mod replay;
pub mod resolve;

use std::path::Path;

use anyhow::{Context, Result};
use viewstate_core::config::ViewerConfig;

/// Load the config file if given, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    match path {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display())),
        None => Ok(ViewerConfig::default()),
    }
}
