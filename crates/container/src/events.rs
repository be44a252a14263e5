//! Container domain events and their value objects.

use serde::{Deserialize, Serialize};

use crate::weight::Weight;

/// A port a container can be moved to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(String);

impl Port {
    /// Creates a port from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the port name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Port {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// A kind of goods carried in a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goods(String);

impl Goods {
    /// Creates a goods kind from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the goods name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Goods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Goods {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Facts that can happen to one cargo container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ContainerEvent {
    /// The container was brought into service.
    Created,

    /// The container was moved to a port.
    MovedTo { port: Port },

    /// Goods were loaded into the container.
    Loaded { goods: Goods, weight: Weight },

    /// Goods were unloaded from the container.
    Unloaded { goods: Goods, weight: Weight },
}

impl ContainerEvent {
    /// Returns the event type name, used for logging.
    pub fn event_type(&self) -> &'static str {
        match self {
            ContainerEvent::Created => "Created",
            ContainerEvent::MovedTo { .. } => "MovedTo",
            ContainerEvent::Loaded { .. } => "Loaded",
            ContainerEvent::Unloaded { .. } => "Unloaded",
        }
    }
}
