//! Local cache of the last known state.

use std::sync::Arc;

use game_core::GameState;
use serde_json::Value;

use super::traits::CacheSlot;

/// Serializes the state into a single [`CacheSlot`] and reads it back as a raw
/// document. Neither direction ever fails the caller.
#[derive(Clone)]
pub struct LocalCache {
    slot: Arc<dyn CacheSlot>,
}

impl LocalCache {
    pub fn new(slot: Arc<dyn CacheSlot>) -> Self {
        Self { slot }
    }

    /// Parsed slot contents; a missing, unreadable or corrupt slot yields `None`.
    pub fn read(&self) -> Option<Value> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!("Failed to read local cache: {}", err);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(document) => Some(document),
            Err(err) => {
                tracing::warn!("Local cache holds corrupt data: {}", err);
                None
            }
        }
    }

    pub fn write(&self, state: &GameState) {
        let encoded = match serde_json::to_string(state) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::warn!("Failed to encode state for local cache: {}", err);
                return;
            }
        };

        if let Err(err) = self.slot.write(&encoded) {
            tracing::warn!("Failed to write local cache: {}", err);
        }
    }
}
