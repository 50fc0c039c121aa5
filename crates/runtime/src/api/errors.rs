//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine, the repositories and external providers so
//! operator front-ends can bubble them up with consistent context.
use game_core::{EngineError, ErrorSeverity, GameError};
use thiserror::Error;

use crate::config::Role;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{role} sessions cannot mutate the game state")]
    ReadOnlySession { role: Role },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("season stats request for '{name}' failed: {message}")]
    SeasonStats { name: String, message: String },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ReadOnlySession { .. } => ErrorSeverity::Validation,
            Self::Engine(err) => err.severity(),
            Self::Repository(_) | Self::SeasonStats { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ReadOnlySession { .. } => "READ_ONLY_SESSION",
            Self::Engine(err) => err.error_code(),
            Self::Repository(_) => "REPOSITORY_FAILURE",
            Self::SeasonStats { .. } => "SEASON_STATS_UNAVAILABLE",
        }
    }
}
