//! Storage contracts behind the persistence chain.
//!
//! Both contracts move raw documents rather than [`game_core::GameState`]:
//! whatever comes back is deep-merged onto the default template before it is
//! decoded, so older or partial documents still load.

use async_trait::async_trait;
use serde_json::Value;

use super::error::Result;

/// Durable store shared by every session of one game, reached over the network.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Succeeds when the store reports itself healthy.
    async fn health(&self) -> Result<()>;

    /// Fetches the persisted document, `None` when nothing usable is stored.
    async fn fetch(&self) -> Result<Option<Value>>;

    /// Replaces the persisted document.
    async fn put(&self, state: &Value) -> Result<()>;
}

/// Single fixed slot of local storage holding the last serialized state.
pub trait CacheSlot: Send + Sync {
    /// Raw slot contents, `None` when the slot was never written.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrites the slot.
    fn write(&self, contents: &str) -> Result<()>;
}
