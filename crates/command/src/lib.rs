//! Command layer: the write side of the engine.
//!
//! For each command the handler computes `playback(projection, id)` — a fold
//! of the projection over the entity's stored history — validates the
//! proposed change against the derived value, and only then appends new
//! events, expecting the version it read. The projection core supplies
//! exactly the fold primitive this protocol relies on; everything about
//! conflicts and retries stays out here.

pub mod error;
pub mod handler;

pub use error::{CommandError, Result};
pub use handler::{CommandHandler, CommandResult};
