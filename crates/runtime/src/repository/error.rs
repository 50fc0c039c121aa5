//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by remote stores and cache slots.
///
/// The persistence chain treats every one of these as "absent": callers log
/// them and fall through to the next source rather than failing the session.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("remote store unreachable: {0}")]
    Unreachable(String),

    #[error("remote store returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
