//! # Configuration
//!
//! Snipz configuration is loaded with [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `SNIPZ_DEFAULT_ICON`, `SNIPZ_DATA_FILE`.
//! 2. **Config file**: `snipz.toml` in the data directory.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_icon` | `pencil` | Icon given to snippets created without one, and to old snippets that have none |
//! | `data_file` | `snippets.json` | Name of the state file inside the data directory |

use crate::error::{Result, SnipzError};
use crate::model::DEFAULT_ICON;
use crate::store::fs_backend::DEFAULT_DATA_FILE;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "snipz.toml";

/// Configuration for snipz, stored in `snipz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Icon for snippets created without one
    #[config(default = "pencil", env = "SNIPZ_DEFAULT_ICON")]
    pub default_icon: String,

    /// State file name inside the data directory
    #[config(default = "snippets.json", env = "SNIPZ_DATA_FILE")]
    pub data_file: String,
}

impl Default for SnipzConfig {
    fn default() -> Self {
        Self {
            default_icon: DEFAULT_ICON.to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl SnipzConfig {
    /// Load from the environment and `<dir>/snipz.toml`. A missing file is fine.
    pub fn load(dir: &Path) -> Result<Self> {
        let config = SnipzConfig::builder()
            .env()
            .file(dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| SnipzError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Blank values fall back to the defaults.
    pub fn normalized(mut self) -> Self {
        if self.default_icon.trim().is_empty() {
            self.default_icon = DEFAULT_ICON.to_string();
        }
        if self.data_file.trim().is_empty() {
            self.data_file = DEFAULT_DATA_FILE.to_string();
        }
        self
    }

    /// `(key, value)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("default_icon", self.default_icon.clone()),
            ("data_file", self.data_file.clone()),
        ]
    }
}
