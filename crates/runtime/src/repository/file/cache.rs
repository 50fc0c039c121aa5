//! File-based cache slot.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::error::Result;
use crate::repository::{CacheSlot, RepositoryError};

/// Stores the cache slot as `{key}.json` inside a directory.
///
/// Writes go through a temporary file followed by a rename so a crash never
/// leaves a half-written slot behind.
pub struct FileCacheSlot {
    path: PathBuf,
}

impl FileCacheSlot {
    pub fn new(base_dir: impl AsRef<Path>, key: &str) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(format!("{}.json", key)),
        })
    }

    /// Platform data directory for scoreboard files, if the platform has one.
    pub fn default_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "scoreboard")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CacheSlot for FileCacheSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        tracing::debug!("Loaded cache slot from {}", self.path.display());
        Ok(Some(contents))
    }

    fn write(&self, contents: &str) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, contents).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved cache slot to {}", self.path.display());
        Ok(())
    }
}
