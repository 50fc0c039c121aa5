use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::repository::error::Result;
use crate::repository::{RemoteStore, RepositoryError};

/// Remote store stand-in that keeps the document in memory.
///
/// It can be switched unreachable to exercise the local-cache fallback.
pub struct InMemoryRemoteStore {
    document: RwLock<Option<Value>>,
    reachable: AtomicBool,
    puts: AtomicUsize,
}

impl InMemoryRemoteStore {
    pub fn new() -> Self {
        Self {
            document: RwLock::new(None),
            reachable: AtomicBool::new(true),
            puts: AtomicUsize::new(0),
        }
    }

    pub fn with_document(document: Value) -> Self {
        let store = Self::new();
        if let Ok(mut slot) = store.document.write() {
            *slot = Some(document);
        }
        store
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    /// Last document accepted by `put` (or seeded at construction).
    pub fn document(&self) -> Option<Value> {
        self.document.read().ok().and_then(|guard| guard.clone())
    }

    /// Number of successful `put` calls.
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    fn ensure_reachable(&self) -> Result<()> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::Unreachable(
                "in-memory remote store is switched off".to_string(),
            ))
        }
    }
}

impl Default for InMemoryRemoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteStore for InMemoryRemoteStore {
    async fn health(&self) -> Result<()> {
        self.ensure_reachable()
    }

    async fn fetch(&self) -> Result<Option<Value>> {
        self.ensure_reachable()?;
        let document = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(document.clone())
    }

    async fn put(&self, state: &Value) -> Result<()> {
        self.ensure_reachable()?;
        let mut document = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *document = Some(state.clone());
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
