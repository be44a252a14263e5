use thiserror::Error;

use common::EntityId;

use crate::event::Version;

/// Errors that can occur when interacting with the event log.
#[derive(Debug, Error)]
pub enum EventLogError {
    /// An append required the entity to already exist.
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    /// An append required the entity to not exist yet.
    #[error("Entity already exists: {0}")]
    EntityAlreadyExists(EntityId),

    /// A concurrency conflict occurred when appending events.
    /// The expected version did not match the actual version.
    #[error("Concurrency conflict for entity {entity_id}: expected version {expected}, found {actual}")]
    ConcurrencyConflict {
        entity_id: EntityId,
        expected: Version,
        actual: Version,
    },

    /// An append carried no events.
    #[error("Cannot append an empty batch of events")]
    EmptyAppend,
}

/// Result type for event log operations.
pub type Result<T> = std::result::Result<T, EventLogError>;
