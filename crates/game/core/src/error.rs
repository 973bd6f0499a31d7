//! Common error infrastructure for heist-core.
//!
//! Domain-specific errors (`MoveError`, `ToolError`, `LevelLoadError`,
//! `TurnError`) live next to the operations that produce them. This module
//! holds the classification shared by all of them so front ends can decide
//! how to surface a rejection without matching on every variant.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The action was rejected but the game continues; another action may succeed.
    ///
    /// Examples: blocked destination, tool on cooldown
    Recoverable,

    /// The request itself is invalid in the current state and should not be retried.
    ///
    /// Examples: action submitted after the level ended
    Validation,

    /// Unexpected state inconsistency inside the core.
    Internal,

    /// The level cannot be played at all.
    ///
    /// Examples: malformed level descriptor
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all heist-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant, suitable for
    /// mapping to user-facing text or metrics.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
