use std::sync::RwLock;

use crate::repository::error::Result;
use crate::repository::{CacheSlot, RepositoryError};

/// Cache slot kept in process memory.
#[derive(Default)]
pub struct InMemoryCacheSlot {
    contents: RwLock<Option<String>>,
}

impl InMemoryCacheSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(contents.into())),
        }
    }

    /// Current raw contents, for inspection in tests.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|guard| guard.clone())
    }
}

impl CacheSlot for InMemoryCacheSlot {
    fn read(&self) -> Result<Option<String>> {
        let contents = self
            .contents
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(contents.clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        let mut slot = self
            .contents
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(contents.to_string());
        Ok(())
    }
}
