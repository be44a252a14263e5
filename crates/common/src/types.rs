use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle naming one event sequence in the log.
///
/// A newtype over a random UUID so sequence ids cannot be confused with
/// other identifiers floating around a caller. Projections never see this
/// type; they receive events already selected by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Draws a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
