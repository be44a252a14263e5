use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::EntityId;

use crate::error::{EventLogError, Result};
use crate::event::{RecordedEvent, Version};
use crate::log::{AppendCondition, EventLog};

/// In-memory event log.
///
/// Keeps one append-ordered sequence per entity behind an `RwLock`; clones
/// share the same storage, so the log handle can be handed to a command
/// layer and to tests cheaply.
#[derive(Clone)]
pub struct InMemoryEventLog<E> {
    entities: Arc<RwLock<HashMap<EntityId, Vec<RecordedEvent<E>>>>>,
}

impl<E> Default for InMemoryEventLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryEventLog<E> {
    /// Creates a new empty in-memory event log.
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the total number of events across all entities.
    pub async fn event_count(&self) -> usize {
        self.entities.read().await.values().map(Vec::len).sum()
    }

    /// Clears all entities and their events.
    pub async fn clear(&self) {
        self.entities.write().await.clear();
    }
}

fn check_condition(
    id: EntityId,
    current: Version,
    condition: AppendCondition,
) -> Result<()> {
    let exists = current > Version::initial();
    match condition {
        AppendCondition::None => Ok(()),
        AppendCondition::MustExist if exists => Ok(()),
        AppendCondition::MustExist => Err(EventLogError::EntityNotFound(id)),
        AppendCondition::MustNotExist if !exists => Ok(()),
        AppendCondition::MustNotExist => Err(EventLogError::EntityAlreadyExists(id)),
        AppendCondition::ExpectedVersion(expected) if expected == current => Ok(()),
        AppendCondition::ExpectedVersion(expected) => Err(EventLogError::ConcurrencyConflict {
            entity_id: id,
            expected,
            actual: current,
        }),
    }
}

#[async_trait]
impl<E> EventLog<E> for InMemoryEventLog<E>
where
    E: Clone + Send + Sync,
{
    async fn exists(&self, id: EntityId) -> Result<bool> {
        let entities = self.entities.read().await;
        Ok(entities.get(&id).is_some_and(|events| !events.is_empty()))
    }

    async fn append(
        &self,
        id: EntityId,
        events: Vec<E>,
        condition: AppendCondition,
    ) -> Result<Version> {
        if events.is_empty() {
            return Err(EventLogError::EmptyAppend);
        }

        let mut entities = self.entities.write().await;
        let current = entities
            .get(&id)
            .and_then(|sequence| sequence.last())
            .map(|recorded| recorded.version)
            .unwrap_or(Version::initial());

        check_condition(id, current, condition)?;

        let sequence = entities.entry(id).or_default();
        let appended = events.len();
        let mut version = current;
        for event in events {
            version = version.next();
            sequence.push(RecordedEvent::new(event, version));
        }

        tracing::debug!(entity_id = %id, appended, new_version = %version, "events appended");
        metrics::counter!("event_log_events_appended").increment(appended as u64);

        Ok(version)
    }

    async fn events_for(&self, id: EntityId) -> Result<Vec<E>> {
        let entities = self.entities.read().await;
        Ok(entities
            .get(&id)
            .map(|events| events.iter().map(|recorded| recorded.event.clone()).collect())
            .unwrap_or_default())
    }

    async fn history(&self, id: EntityId) -> Result<Vec<RecordedEvent<E>>> {
        let entities = self.entities.read().await;
        Ok(entities.get(&id).cloned().unwrap_or_default())
    }

    async fn version_of(&self, id: EntityId) -> Result<Version> {
        let entities = self.entities.read().await;
        Ok(entities
            .get(&id)
            .and_then(|events| events.last())
            .map(|recorded| recorded.version)
            .unwrap_or(Version::initial()))
    }
}
