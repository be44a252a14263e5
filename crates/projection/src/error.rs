//! Projection error types.

use thiserror::Error;

/// A domain-rule breach raised while folding a projection.
///
/// Construction and composition of projections are total; the only failures
/// that can surface out of a fold are the two [`single`](crate::single)
/// violations and breaches signalled by caller-supplied step or extract
/// functions. The engine neither catches nor retries them — they abort the
/// fold and surface unchanged to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A fold finished without ever seeing a qualifying event.
    #[error("no qualifying event")]
    NoQualifyingEvent,

    /// A second qualifying event arrived where exactly one was required.
    #[error("more than one qualifying event")]
    MoreThanOneQualifyingEvent,

    /// A caller-supplied step or extract signalled a domain-rule breach.
    #[error("invariant violation: {0}")]
    Violation(String),
}

impl InvariantViolation {
    /// Creates a violation carrying a caller-supplied message.
    pub fn violation(message: impl Into<String>) -> Self {
        Self::Violation(message.into())
    }
}

/// Result type for fold operations.
pub type Result<T> = std::result::Result<T, InvariantViolation>;
