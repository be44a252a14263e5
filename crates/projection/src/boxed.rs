//! Type-erased projections.
//!
//! [`BoxedProjection`] hides a projection's state and concrete type behind a
//! trait object, so projections of the same event and output types can live
//! side by side in one registry, or cross an API boundary without exposing
//! their bookkeeping. It still folds incrementally, so it composes into
//! single-pass composites like any other projection.

use std::sync::Arc;

use crate::error::{InvariantViolation, Result};
use crate::projection::Projection;

/// A projection over `E` producing `A`, with its state type fully erased.
///
/// Cheap to clone; clones share the underlying projection.
pub struct BoxedProjection<E, A> {
    inner: Arc<dyn ErasedProjection<E, A> + Send + Sync>,
}

impl<E, A> BoxedProjection<E, A> {
    /// Erases `projection`'s state type.
    ///
    /// Usually reached through [`Projection::boxed`].
    pub fn new<P>(projection: P) -> Self
    where
        P: Projection<E, Output = A> + Send + Sync + 'static,
        P::State: Send + 'static,
        E: 'static,
        A: 'static,
    {
        Self {
            inner: Arc::new(Erased {
                projection: Arc::new(projection),
            }),
        }
    }
}

impl<E, A> Clone for BoxedProjection<E, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E, A> std::fmt::Debug for BoxedProjection<E, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedProjection").finish_non_exhaustive()
    }
}

impl<E, A> Projection<E> for BoxedProjection<E, A> {
    type State = BoxedState<E, A>;
    type Output = A;

    fn init(&self) -> Self::State {
        self.inner.begin()
    }

    fn step(&self, mut state: Self::State, event: &E) -> Result<Self::State> {
        state.cell.advance(event)?;
        Ok(state)
    }

    fn extract(&self, state: Self::State) -> Result<A> {
        state.cell.finish()
    }
}

/// The erased fold state of a [`BoxedProjection`].
pub struct BoxedState<E, A> {
    cell: Box<dyn DynState<E, A> + Send>,
}

trait ErasedProjection<E, A> {
    fn begin(&self) -> BoxedState<E, A>;
}

trait DynState<E, A> {
    fn advance(&mut self, event: &E) -> Result<()>;
    fn finish(self: Box<Self>) -> Result<A>;
}

struct Erased<P> {
    projection: Arc<P>,
}

impl<E, P> ErasedProjection<E, P::Output> for Erased<P>
where
    P: Projection<E> + Send + Sync + 'static,
    P::State: Send + 'static,
    E: 'static,
    P::Output: 'static,
{
    fn begin(&self) -> BoxedState<E, P::Output> {
        BoxedState {
            cell: Box::new(Cell {
                state: Some(self.projection.init()),
                projection: Arc::clone(&self.projection),
            }),
        }
    }
}

struct Cell<P, S> {
    projection: Arc<P>,
    state: Option<S>,
}

impl<E, P> DynState<E, P::Output> for Cell<P, P::State>
where
    P: Projection<E>,
{
    fn advance(&mut self, event: &E) -> Result<()> {
        // The state is only None after a step failed, and that failure has
        // already aborted the enclosing fold.
        let state = self.state.take().ok_or_else(spent_state)?;
        self.state = Some(self.projection.step(state, event)?);
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<P::Output> {
        let state = self.state.ok_or_else(spent_state)?;
        self.projection.extract(state)
    }
}

fn spent_state() -> InvariantViolation {
    InvariantViolation::violation("fold state reused after a failed step")
}
