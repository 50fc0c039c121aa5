//! Repository layer for the persistence chain.
//!
//! A session reads its state from, in order of precedence:
//! - the remote store, through the fault-tolerant [`PersistenceGateway`]
//! - the [`LocalCache`] slot
//! - the default template
//!
//! Every document is deep-merged onto the default template before decoding.
//! Writes to the remote store go through a single [`RemoteWriter`] so they
//! land in the order they were made.

mod cache;
mod error;
mod file;
mod gateway;
mod http;
mod memory;
mod merge;
mod traits;
mod writer;

pub use cache::LocalCache;
pub use error::{RepositoryError, Result};
pub use file::FileCacheSlot;
pub use gateway::PersistenceGateway;
pub use http::HttpRemoteStore;
pub use memory::{InMemoryCacheSlot, InMemoryRemoteStore};
pub use merge::{decode_onto_default, deep_merge};
pub use traits::{CacheSlot, RemoteStore};
pub use writer::RemoteWriter;
