//! Session runtime for the live scoreboard.
//!
//! This crate wires the pure `game-core` engine to everything that moves the
//! state out of process: the remote durable store, the local cache slot and
//! the replication channel that feeds display surfaces. Consumers build a
//! [`Session`] for either the writer (operator) or subscriber (display) role.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and its load/save precedence chain
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides the named replication bus and its message envelope
//! - [`repository`] provides the remote gateway, local cache and merge logic
//! - [`providers`] holds adapters for external read-only services
pub mod api;
pub mod config;
pub mod events;
pub mod providers;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use config::{Role, RuntimeConfig};
pub use events::{ReplicationChannel, ReplicationHub, ReplicationMessage, Subscription};
pub use providers::{
    BattingLine, HttpSeasonStatsProvider, PitchingLine, SeasonStatsCache, SeasonStatsProvider,
};
pub use repository::{
    CacheSlot, FileCacheSlot, HttpRemoteStore, InMemoryCacheSlot, InMemoryRemoteStore,
    LocalCache, PersistenceGateway, RemoteStore, RemoteWriter, RepositoryError,
    decode_onto_default, deep_merge,
};
pub use session::Session;
