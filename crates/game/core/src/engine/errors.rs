//! Error types for rejected engine operations.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Team;

/// Errors surfaced when an operation cannot be applied to the state.
///
/// Undo on an empty history is not an error; it is reported as `false`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("lineup slot {slot} is outside the {team} batting order")]
    InvalidLineupSlot { team: Team, slot: usize },

    #[error("inning {inning} has no cell in the {team} line score")]
    InningOffBoard { team: Team, inning: u32 },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidLineupSlot { .. } => ErrorSeverity::Validation,
            Self::InningOffBoard { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLineupSlot { .. } => "INVALID_LINEUP_SLOT",
            Self::InningOffBoard { .. } => "INNING_OFF_BOARD",
        }
    }
}
