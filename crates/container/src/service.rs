//! Container service: the command side of the sample domain.
//!
//! Every mutating operation follows the read-validate-append protocol: play
//! back a view of the container's history, check the business rule against
//! the derived value, and only then append the new event. The projection
//! core never rejects an event after the fact; all domain checks happen
//! here, before anything is written.

use command::{CommandError, CommandHandler, CommandResult};
use common::EntityId;
use event_log::{EventLog, Version};
use projection::{Projection, any, pair};
use thiserror::Error;

use crate::events::{ContainerEvent, Goods, Port};
use crate::views::goods_on_board;
use crate::weight::Weight;

/// Business-rule violations of the container domain.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The container has no `Created` event yet.
    #[error("container does not exist")]
    NotCreated,

    /// An unload asked for more of a goods kind than is on board.
    #[error("cannot unload {requested} of {goods}: only {on_board} on board")]
    InsufficientGoods {
        goods: Goods,
        requested: Weight,
        on_board: Weight,
    },
}

impl From<ContainerError> for CommandError {
    fn from(error: ContainerError) -> Self {
        CommandError::rejected(error.to_string())
    }
}

fn created() -> impl Projection<ContainerEvent, Output = bool> {
    any(|event: &ContainerEvent| matches!(event, ContainerEvent::Created))
}

/// Service for managing cargo containers.
pub struct ContainerService<L> {
    handler: CommandHandler<L>,
}

impl<L> ContainerService<L>
where
    L: EventLog<ContainerEvent>,
{
    /// Creates a new container service over the given event log.
    pub fn new(log: L) -> Self {
        Self {
            handler: CommandHandler::new(log),
        }
    }

    /// Returns a reference to the underlying command handler.
    pub fn handler(&self) -> &CommandHandler<L> {
        &self.handler
    }

    /// Brings a new container into service.
    #[tracing::instrument(skip(self))]
    pub async fn create_container(&self, id: EntityId) -> Result<Version, CommandError> {
        self.handler.create(id, vec![ContainerEvent::Created]).await
    }

    /// Moves a container to a port.
    #[tracing::instrument(skip(self))]
    pub async fn move_to(
        &self,
        id: EntityId,
        port: Port,
    ) -> Result<CommandResult<ContainerEvent>, CommandError> {
        self.handler
            .execute(id, created(), |exists| {
                if exists {
                    Ok(vec![ContainerEvent::MovedTo { port }])
                } else {
                    Err(ContainerError::NotCreated)
                }
            })
            .await
    }

    /// Loads goods into a container.
    ///
    /// Loading beyond the maximum gross weight is not refused; the
    /// overloaded view exists precisely to surface that condition.
    #[tracing::instrument(skip(self))]
    pub async fn load(
        &self,
        id: EntityId,
        goods: Goods,
        weight: Weight,
    ) -> Result<CommandResult<ContainerEvent>, CommandError> {
        self.handler
            .execute(id, created(), |exists| {
                if exists {
                    Ok(vec![ContainerEvent::Loaded { goods, weight }])
                } else {
                    Err(ContainerError::NotCreated)
                }
            })
            .await
    }

    /// Unloads goods from a container.
    ///
    /// Rejects unloading more of a goods kind than its current net weight on
    /// board.
    #[tracing::instrument(skip(self))]
    pub async fn unload(
        &self,
        id: EntityId,
        goods: Goods,
        weight: Weight,
    ) -> Result<CommandResult<ContainerEvent>, CommandError> {
        self.handler
            .execute(
                id,
                pair(created(), goods_on_board()),
                |(exists, on_board)| {
                    if !exists {
                        return Err(ContainerError::NotCreated);
                    }
                    let available = on_board
                        .iter()
                        .find(|(kind, _)| kind == &goods)
                        .map(|(_, current)| *current)
                        .unwrap_or(Weight::zero());
                    if weight > available {
                        return Err(ContainerError::InsufficientGoods {
                            goods,
                            requested: weight,
                            on_board: available,
                        });
                    }
                    Ok(vec![ContainerEvent::Unloaded { goods, weight }])
                },
            )
            .await
    }
}
