//! Command handling over the event log.
//!
//! A command handler realizes the single-writer, read-validate-append
//! protocol: it plays a projection back over the entity's history to obtain
//! the current derived state, hands that state to the caller's decision
//! function, and appends the resulting events expecting the version it read.
//! A concurrent writer in between surfaces as a
//! [`ConcurrencyConflict`](event_log::EventLogError::ConcurrencyConflict);
//! whether to re-read and retry is the caller's choice, never the handler's.

use common::EntityId;
use event_log::{AppendCondition, EventLog, Version};
use projection::Projection;

use crate::error::{CommandError, Result};

/// Result of a successfully executed command.
#[derive(Debug)]
pub struct CommandResult<E> {
    /// The events that were appended. Empty when the decision produced none.
    pub events: Vec<E>,

    /// The entity's version after the command.
    pub new_version: Version,
}

/// Executes commands against entities stored in an event log.
#[derive(Debug, Clone)]
pub struct CommandHandler<L> {
    log: L,
}

impl<L> CommandHandler<L> {
    /// Creates a new command handler over the given event log.
    pub fn new(log: L) -> Self {
        Self { log }
    }

    /// Returns a reference to the underlying event log.
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Folds `projection` over the entity's full event history.
    ///
    /// This is the primitive the whole protocol relies on: the current
    /// derived view of an entity is nothing but a playback of its history.
    #[tracing::instrument(skip(self, projection), fields(entity_id = %id))]
    pub async fn playback<E, P>(&self, projection: P, id: EntityId) -> Result<P::Output>
    where
        L: EventLog<E>,
        E: Send + Sync,
        P: Projection<E>,
    {
        let events = self.log.events_for(id).await?;
        metrics::counter!("command_playbacks").increment(1);
        Ok(projection.fold(events)?)
    }

    /// Executes a command: read, validate, append.
    ///
    /// Reads the entity's history and current version, folds `projection`
    /// over it, and passes the derived value to `decide`. The events the
    /// decision produces are appended expecting the version read at the
    /// start; an empty decision appends nothing and leaves the version
    /// untouched.
    #[tracing::instrument(skip(self, projection, decide), fields(entity_id = %id))]
    pub async fn execute<E, P, D, R>(
        &self,
        id: EntityId,
        projection: P,
        decide: D,
    ) -> Result<CommandResult<E>>
    where
        L: EventLog<E>,
        E: Clone + Send + Sync,
        P: Projection<E>,
        D: FnOnce(P::Output) -> std::result::Result<Vec<E>, R>,
        CommandError: From<R>,
    {
        let history = self.log.history(id).await?;
        let current = history
            .last()
            .map(|recorded| recorded.version)
            .unwrap_or(Version::initial());

        let view = projection.fold(history.iter().map(|recorded| &recorded.event))?;
        let events = decide(view).map_err(CommandError::from)?;

        if events.is_empty() {
            return Ok(CommandResult {
                events,
                new_version: current,
            });
        }

        let new_version = self
            .log
            .append(
                id,
                events.clone(),
                AppendCondition::ExpectedVersion(current),
            )
            .await?;

        Ok(CommandResult {
            events,
            new_version,
        })
    }

    /// Brings a new entity into existence with its first events.
    ///
    /// Fails with [`EntityAlreadyExists`](event_log::EventLogError::EntityAlreadyExists)
    /// when the entity already has history.
    #[tracing::instrument(skip(self, events), fields(entity_id = %id))]
    pub async fn create<E>(&self, id: EntityId, events: Vec<E>) -> Result<Version>
    where
        L: EventLog<E>,
        E: Send + Sync,
    {
        Ok(self
            .log
            .append(id, events, AppendCondition::MustNotExist)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_log::{EventLogError, InMemoryEventLog};
    use projection::sum_by;

    #[derive(Debug, Clone, PartialEq)]
    enum Counter {
        Started,
        Incremented(i64),
    }

    fn total() -> impl Projection<Counter, Output = i64> {
        sum_by(|event: &Counter| match event {
            Counter::Incremented(by) => Some(*by),
            Counter::Started => None,
        })
    }

    fn handler() -> CommandHandler<InMemoryEventLog<Counter>> {
        CommandHandler::new(InMemoryEventLog::new())
    }

    #[tokio::test]
    async fn playback_folds_the_full_history() {
        let handler = handler();
        let id = EntityId::new();

        handler
            .create(
                id,
                vec![
                    Counter::Started,
                    Counter::Incremented(2),
                    Counter::Incremented(3),
                ],
            )
            .await
            .unwrap();

        assert_eq!(handler.playback(total(), id).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn playback_of_unknown_entity_folds_nothing() {
        let handler = handler();
        assert_eq!(handler.playback(total(), EntityId::new()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn execute_appends_decided_events() {
        let handler = handler();
        let id = EntityId::new();
        handler.create(id, vec![Counter::Started]).await.unwrap();

        let result = handler
            .execute(id, total(), |current| {
                if current < 10 {
                    Ok(vec![Counter::Incremented(4)])
                } else {
                    Err(CommandError::rejected("counter is full"))
                }
            })
            .await
            .unwrap();

        assert_eq!(result.events, vec![Counter::Incremented(4)]);
        assert_eq!(result.new_version, Version::new(2));
        assert_eq!(handler.playback(total(), id).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn execute_surfaces_rejections_without_appending() {
        let handler = handler();
        let id = EntityId::new();
        handler
            .create(id, vec![Counter::Started, Counter::Incremented(12)])
            .await
            .unwrap();

        let result = handler
            .execute(id, total(), |current| {
                if current < 10 {
                    Ok(vec![Counter::Incremented(1)])
                } else {
                    Err(CommandError::rejected("counter is full"))
                }
            })
            .await;

        assert!(matches!(result, Err(CommandError::Rejected(_))));
        assert_eq!(handler.log().event_count().await, 2);
    }

    #[tokio::test]
    async fn execute_with_empty_decision_appends_nothing() {
        let handler = handler();
        let id = EntityId::new();
        handler.create(id, vec![Counter::Started]).await.unwrap();

        let result = handler
            .execute(id, total(), |_| Ok::<_, CommandError>(vec![]))
            .await
            .unwrap();

        assert!(result.events.is_empty());
        assert_eq!(result.new_version, Version::first());
        assert_eq!(handler.log().event_count().await, 1);
    }

    #[tokio::test]
    async fn create_refuses_an_existing_entity() {
        let handler = handler();
        let id = EntityId::new();
        handler.create(id, vec![Counter::Started]).await.unwrap();

        let result = handler.create(id, vec![Counter::Started]).await;
        assert!(matches!(
            result,
            Err(CommandError::Log(EventLogError::EntityAlreadyExists(_)))
        ));
    }
}
