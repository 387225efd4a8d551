use super::backend::StorageBackend;
use crate::error::{Result, SnipzError};
use crate::model::StoredState;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "snippets.json";

/// JSON file storage inside a data directory.
pub struct FsBackend {
    root: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        if !name.is_empty() {
            self.file_name = name.to_string();
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(SnipzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Option<StoredState>> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&data_file).map_err(SnipzError::Io)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let state: StoredState =
            serde_json::from_str(&content).map_err(SnipzError::Serialization)?;
        Ok(Some(state))
    }

    fn save(&self, state: &StoredState) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let data_file = self.data_path();
        let content = serde_json::to_string_pretty(state).map_err(SnipzError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".snippets-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(SnipzError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(SnipzError::Io(e));
        }

        tracing::debug!(path = %data_file.display(), snippets = state.snippets.len(), "wrote snippet state");
        Ok(())
    }

    fn location(&self) -> String {
        self.data_path().display().to_string()
    }
}
