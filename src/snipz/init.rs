//! # Initialization
//!
//! Builds a ready-to-use [`SnipzApi`] over the file backend.
//!
//! ## Data Directory
//!
//! Resolved in priority order:
//! 1. An explicit override (the CLI's `--data` flag)
//! 2. The `SNIPZ_DATA` environment variable
//! 3. The OS data directory (via the `directories` crate), e.g.
//!    `~/.local/share/snipz` on Linux
//!
//! The configuration file `snipz.toml` is read from the same directory.

use crate::api::SnipzApi;
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};
use crate::store::fs_backend::FsBackend;
use crate::store::SnippetRepository;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_ENV: &str = "SNIPZ_DATA";

pub struct SnipzContext {
    pub api: SnipzApi<FsBackend>,
    pub config: SnipzConfig,
    pub data_dir: PathBuf,
}

/// Pick the data directory; see the module docs for the order.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "snipz", "snipz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SnipzError::Config("Could not determine data directory".to_string()))
}

/// Load configuration, open the repository, and wire the API.
pub fn initialize(data_override: Option<PathBuf>) -> Result<SnipzContext> {
    let data_dir = resolve_data_dir(data_override)?;
    open_in(&data_dir)
}

/// [`initialize`] with an already resolved data directory.
pub fn open_in(data_dir: &Path) -> Result<SnipzContext> {
    let config = SnipzConfig::load(data_dir)?;
    let backend = FsBackend::new(data_dir.to_path_buf()).with_file_name(&config.data_file);
    tracing::debug!(data_dir = %data_dir.display(), "opening snippet store");

    let repo = SnippetRepository::open(backend, config.default_icon.clone())?;
    Ok(SnipzContext {
        api: SnipzApi::new(repo),
        config,
        data_dir: data_dir.to_path_buf(),
    })
}
