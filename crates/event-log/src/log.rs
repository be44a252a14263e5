use async_trait::async_trait;

use common::EntityId;

use crate::event::{RecordedEvent, Version};
use crate::error::Result;

/// Precondition checked atomically by [`EventLog::append`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppendCondition {
    /// No precondition; append unconditionally.
    #[default]
    None,

    /// The entity must already have at least one event.
    MustExist,

    /// The entity must not have any events yet.
    MustNotExist,

    /// The entity must be at exactly this version (optimistic concurrency).
    ExpectedVersion(Version),
}

/// Core trait for append-only per-entity event storage.
///
/// Events for one entity form a totally ordered, append-only sequence. The
/// log owns entity identity and ordering; deriving views from the stored
/// sequences is entirely the projection engine's business.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait EventLog<E>: Send + Sync
where
    E: Send + Sync,
{
    /// Returns whether any events exist for the entity.
    async fn exists(&self, id: EntityId) -> Result<bool>;

    /// Appends events to the entity's sequence.
    ///
    /// The batch is appended atomically — either all events land or none do.
    /// Fails without writing when `condition` is unmet or the batch is
    /// empty. Returns the entity's version after the append.
    async fn append(&self, id: EntityId, events: Vec<E>, condition: AppendCondition)
    -> Result<Version>;

    /// Returns the entity's full event history in append order.
    ///
    /// An unknown entity has an empty history.
    async fn events_for(&self, id: EntityId) -> Result<Vec<E>>;

    /// Returns the entity's history with versions and timestamps.
    async fn history(&self, id: EntityId) -> Result<Vec<RecordedEvent<E>>>;

    /// Returns the entity's current version, [`Version::initial`] for an
    /// unknown entity.
    async fn version_of(&self, id: EntityId) -> Result<Version>;
}
