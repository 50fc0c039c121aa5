//! Common error infrastructure for game-core.
//!
//! Domain errors (currently only [`crate::engine::EngineError`]) implement
//! [`GameError`] so callers can decide how to surface a rejected operation
//! without matching on every variant.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid operator input, reject without retry
/// - **Internal**: the stored document does not have the expected shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input such as a lineup slot outside the batting order.
    Validation,

    /// Unexpected state shape, e.g. a legacy document with a short line score.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error points at the stored data rather than the input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to act, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
