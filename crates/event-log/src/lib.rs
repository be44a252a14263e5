//! Append-only per-entity event storage.
//!
//! An event log owns entity identity and the total order of each entity's
//! events; it never interprets them. Reads hand back already-ordered
//! sequences for the projection engine to fold, and appends enforce the
//! caller's [`AppendCondition`] atomically, which is all the command layer
//! needs for its single-writer optimistic protocol.

pub mod error;
pub mod event;
pub mod log;
pub mod memory;

pub use common::EntityId;
pub use error::{EventLogError, Result};
pub use event::{RecordedEvent, Version};
pub use log::{AppendCondition, EventLog};
pub use memory::InMemoryEventLog;
