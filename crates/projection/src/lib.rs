//! Projection combinator engine.
//!
//! Derives read-model views from an ordered, append-only sequence of domain
//! events through a single, composable, incremental fold:
//! - [`Projection`] — the abstraction: hidden state + step + extract
//! - [`from_fn`] / [`from_parts`] — construction from closures
//! - [`map`](Projection::map), [`sequence`], [`constant`], [`pair`] —
//!   functor/applicative composition with single-pass semantics
//! - [`events`], [`choose`], [`filter`], [`sum_by`], [`latest`], [`single`],
//!   [`any`], [`all`] — built-in combinators
//! - [`BoxedProjection`] — type-erased projections for heterogeneous use
//!
//! The engine is pure and synchronous: it never loads, persists, or indexes
//! events, it only folds a sequence it is handed. Feeding it from an event
//! log and appending new events belong to the `event-log` and `command`
//! crates.
//!
//! # Example
//!
//! ```
//! use projection::{Projection, pair, sum_by};
//!
//! #[derive(Clone)]
//! enum Transfer {
//!     Deposited(i64),
//!     Withdrawn(i64),
//! }
//!
//! let balance = sum_by(|t: &Transfer| match t {
//!     Transfer::Deposited(amount) => Some(*amount),
//!     Transfer::Withdrawn(amount) => Some(-amount),
//! });
//! let deposits = sum_by(|t: &Transfer| match t {
//!     Transfer::Deposited(amount) => Some(*amount),
//!     Transfer::Withdrawn(_) => None,
//! });
//!
//! // One pass over the events computes both views.
//! let history = vec![Transfer::Deposited(100), Transfer::Withdrawn(30)];
//! let (balance, deposits) = pair(balance, deposits).fold(&history).unwrap();
//! assert_eq!((balance, deposits), (70, 100));
//! ```

pub mod boxed;
pub mod combinators;
pub mod combine;
pub mod error;
pub mod projection;

pub use boxed::BoxedProjection;
pub use combinators::{Additive, all, any, choose, events, filter, latest, single, sum_by};
pub use combine::{Constant, Map, Pair, Sequence, constant, pair, sequence};
pub use error::{InvariantViolation, Result};
pub use projection::{FnProjection, Projection, from_fn, from_parts};
