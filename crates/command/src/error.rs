//! Command error types.

use event_log::EventLogError;
use projection::InvariantViolation;
use thiserror::Error;

/// Errors that can occur while handling a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// An error occurred in the event log.
    #[error("Event log error: {0}")]
    Log(#[from] EventLogError),

    /// Playback of the validating projection failed.
    #[error("Invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    /// The command was refused by a business rule.
    #[error("Command rejected: {0}")]
    Rejected(String),
}

impl CommandError {
    /// Creates a business-rule rejection.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, CommandError>;
