//! The projection abstraction and its fold execution.
//!
//! A projection derives a read-model value from an ordered event sequence in
//! a single incremental pass. It is described by three parts: a hidden fold
//! state created by [`init`](Projection::init), advanced once per event by
//! [`step`](Projection::step), and turned into the output by
//! [`extract`](Projection::extract).
//!
//! A projection value is a stateless, reusable template: construction
//! processes no events, and every [`fold`](Projection::fold) call owns an
//! isolated, transient state chain. The same value may be folded repeatedly
//! or concurrently over different sequences.

use std::borrow::Borrow;

use crate::boxed::BoxedProjection;
use crate::combine::Map;
use crate::error::Result;

/// A composable function from an event sequence to a derived value.
///
/// `step` and `extract` must be pure: no I/O, no shared mutation. This is
/// what makes a projection safe to reuse, replay, and invoke concurrently.
/// Both return [`Result`] so that caller-supplied logic can signal a
/// domain-rule breach; a failure aborts the enclosing fold and discards any
/// partial state.
pub trait Projection<E> {
    /// Hidden bookkeeping carried between steps of one fold call.
    type State;

    /// The derived value this projection produces.
    type Output;

    /// Creates the starting state for a fresh fold.
    fn init(&self) -> Self::State;

    /// Advances the state by one event.
    fn step(&self, state: Self::State, event: &E) -> Result<Self::State>;

    /// Turns the final state into the projected output.
    fn extract(&self, state: Self::State) -> Result<Self::Output>;

    /// Folds an event sequence into the projected value.
    ///
    /// Applies [`init`](Self::init), then [`step`](Self::step) once per
    /// event in original order, then [`extract`](Self::extract) on the final
    /// state. Every event is visited exactly once; none are skipped or
    /// reordered. Accepts owned sequences and borrowed slices alike.
    fn fold<I>(&self, events: I) -> Result<Self::Output>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        self.fold_from(self.init(), events)
    }

    /// Folds an event sequence starting from a caller-supplied state.
    ///
    /// No compatibility check is performed on `state`; resuming with a state
    /// that was not produced by this projection over a prefix of the same
    /// sequence is the caller's responsibility.
    fn fold_from<I>(&self, state: Self::State, events: I) -> Result<Self::Output>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let mut state = state;
        for event in events {
            state = self.step(state, event.borrow())?;
        }
        self.extract(state)
    }

    /// Maps the projected output through `f`, leaving state and step
    /// untouched.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
    {
        Map::new(self, f)
    }

    /// Erases this projection's state type behind [`BoxedProjection`].
    fn boxed(self) -> BoxedProjection<E, Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
        Self::State: Send + 'static,
        Self::Output: 'static,
        E: 'static,
    {
        BoxedProjection::new(self)
    }
}

/// Projections compose by value; borrowing keeps the original reusable.
impl<E, P> Projection<E> for &P
where
    P: Projection<E> + ?Sized,
{
    type State = P::State;
    type Output = P::Output;

    fn init(&self) -> Self::State {
        (**self).init()
    }

    fn step(&self, state: Self::State, event: &E) -> Result<Self::State> {
        (**self).step(state, event)
    }

    fn extract(&self, state: Self::State) -> Result<Self::Output> {
        (**self).extract(state)
    }
}

/// A projection assembled from an initial state and closures.
///
/// Built by [`from_fn`], [`from_parts`], or [`FnProjection::new`]; every
/// built-in combinator bottoms out in this type.
#[derive(Debug, Clone)]
pub struct FnProjection<Init, Step, Ex> {
    init: Init,
    step: Step,
    extract: Ex,
}

impl<Init, Step, Ex> FnProjection<Init, Step, Ex> {
    /// Assembles a projection from an init closure, a step, and an extract.
    ///
    /// Taking init as a closure rather than a value avoids `Clone` bounds on
    /// states that are cheap to construct from scratch (`Vec::new`,
    /// `N::zero`, ...).
    pub fn new(init: Init, step: Step, extract: Ex) -> Self {
        Self {
            init,
            step,
            extract,
        }
    }
}

impl<E, S, A, Init, Step, Ex> Projection<E> for FnProjection<Init, Step, Ex>
where
    Init: Fn() -> S,
    Step: Fn(S, &E) -> Result<S>,
    Ex: Fn(S) -> Result<A>,
{
    type State = S;
    type Output = A;

    fn init(&self) -> S {
        (self.init)()
    }

    fn step(&self, state: S, event: &E) -> Result<S> {
        (self.step)(state, event)
    }

    fn extract(&self, state: S) -> Result<A> {
        (self.extract)(state)
    }
}

pub(crate) fn identity_extract<S>(state: S) -> Result<S> {
    Ok(state)
}

/// Creates a projection whose extract is the identity: the final fold state
/// is the output.
pub fn from_fn<E, S, Step>(
    init: S,
    step: Step,
) -> FnProjection<impl Fn() -> S, Step, fn(S) -> Result<S>>
where
    S: Clone,
    Step: Fn(S, &E) -> Result<S>,
{
    let extract: fn(S) -> Result<S> = identity_extract;
    FnProjection::new(move || init.clone(), step, extract)
}

/// Creates a projection from all three parts: initial state, step, and
/// extract.
pub fn from_parts<E, S, A, Step, Ex>(
    init: S,
    step: Step,
    extract: Ex,
) -> FnProjection<impl Fn() -> S, Step, Ex>
where
    S: Clone,
    Step: Fn(S, &E) -> Result<S>,
    Ex: Fn(S) -> Result<A>,
{
    FnProjection::new(move || init.clone(), step, extract)
}
