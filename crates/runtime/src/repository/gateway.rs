//! Fault-tolerant front for the remote store.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use super::traits::RemoteStore;

/// Wraps a [`RemoteStore`] so that no remote failure ever reaches the caller.
///
/// Health probes are bounded by a timeout, loads collapse every failure into
/// `None` and saves are logged and forgotten. Cloning is cheap; clones share
/// the underlying store.
#[derive(Clone)]
pub struct PersistenceGateway {
    store: Arc<dyn RemoteStore>,
    health_timeout: Duration,
}

impl PersistenceGateway {
    pub fn new(store: Arc<dyn RemoteStore>, health_timeout: Duration) -> Self {
        Self {
            store,
            health_timeout,
        }
    }

    /// Returns `true` only if the store answered healthy within the timeout.
    pub async fn probe_health(&self) -> bool {
        match tokio::time::timeout(self.health_timeout, self.store.health()).await {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                tracing::warn!("Remote store health check failed: {}", err);
                false
            }
            Err(_) => {
                tracing::warn!(
                    "Remote store health check timed out after {:?}",
                    self.health_timeout
                );
                false
            }
        }
    }

    /// Fetches the remote document; any failure or missing state yields `None`.
    pub async fn load(&self) -> Option<Value> {
        match self.store.fetch().await {
            Ok(Some(Value::Null)) | Ok(None) => {
                tracing::debug!("Remote store holds no state");
                None
            }
            Ok(Some(document)) => Some(document),
            Err(err) => {
                tracing::warn!("Failed to load state from remote store: {}", err);
                None
            }
        }
    }

    /// Sends the document to the remote store. Failures are logged and swallowed.
    pub async fn save(&self, state: &Value) {
        match self.store.put(state).await {
            Ok(()) => tracing::debug!("Saved state to remote store"),
            Err(err) => tracing::warn!("Failed to save state to remote store: {}", err),
        }
    }
}
