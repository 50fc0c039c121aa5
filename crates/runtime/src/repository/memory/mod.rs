//! In-memory repositories for tests and offline runs.

mod cache;
mod remote;

pub use cache::InMemoryCacheSlot;
pub use remote::InMemoryRemoteStore;
