//! Functor and applicative composition of projections.
//!
//! Composition pairs the hidden states of the constituents and advances each
//! of them independently on every event, so an arbitrarily nested composite
//! still folds the event sequence in one pass: N composed projections over M
//! events perform exactly N×M step invocations.
//!
//! The adapters are concrete types in the style of `Iterator` adapters, so a
//! composed projection never leaks its constituents' bookkeeping types.

use crate::error::Result;
use crate::projection::Projection;

/// Projects the output of `P` through a mapping function.
///
/// Returned by [`Projection::map`]. Satisfies the functor laws:
/// `p.map(id)` behaves as `p`, and `p.map(f).map(g)` behaves as
/// `p.map(g ∘ f)`.
#[derive(Debug, Clone)]
pub struct Map<P, F> {
    projection: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub(crate) fn new(projection: P, f: F) -> Self {
        Self { projection, f }
    }
}

impl<E, P, F, B> Projection<E> for Map<P, F>
where
    P: Projection<E>,
    F: Fn(P::Output) -> B,
{
    type State = P::State;
    type Output = B;

    fn init(&self) -> Self::State {
        self.projection.init()
    }

    fn step(&self, state: Self::State, event: &E) -> Result<Self::State> {
        self.projection.step(state, event)
    }

    fn extract(&self, state: Self::State) -> Result<B> {
        Ok((self.f)(self.projection.extract(state)?))
    }
}

/// Applies a projected function to a projected argument.
///
/// See [`sequence`].
#[derive(Debug, Clone)]
pub struct Sequence<PF, PA> {
    pf: PF,
    pa: PA,
}

/// Combines a projection of a function with a projection of its argument.
///
/// The composite state is the pair of both states; each is stepped
/// independently on every event, and extraction applies `pf`'s function to
/// `pa`'s value. Together with [`constant`] as pure, this satisfies the
/// applicative laws (identity, homomorphism, interchange, composition).
pub fn sequence<PF, PA>(pf: PF, pa: PA) -> Sequence<PF, PA> {
    Sequence { pf, pa }
}

impl<E, PF, PA, B> Projection<E> for Sequence<PF, PA>
where
    PF: Projection<E>,
    PA: Projection<E>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    type State = (PF::State, PA::State);
    type Output = B;

    fn init(&self) -> Self::State {
        (self.pf.init(), self.pa.init())
    }

    fn step(&self, (sf, sa): Self::State, event: &E) -> Result<Self::State> {
        Ok((self.pf.step(sf, event)?, self.pa.step(sa, event)?))
    }

    fn extract(&self, (sf, sa): Self::State) -> Result<B> {
        let f = self.pf.extract(sf)?;
        let a = self.pa.extract(sa)?;
        Ok(f(a))
    }
}

/// Ignores all events and always extracts the same value.
///
/// See [`constant`].
#[derive(Debug, Clone)]
pub struct Constant<A> {
    value: A,
}

/// The applicative "pure": a projection with unit state whose output is
/// always `value`, regardless of the event sequence.
pub fn constant<A: Clone>(value: A) -> Constant<A> {
    Constant { value }
}

impl<E, A: Clone> Projection<E> for Constant<A> {
    type State = ();
    type Output = A;

    fn init(&self) -> Self::State {}

    fn step(&self, state: Self::State, _event: &E) -> Result<Self::State> {
        Ok(state)
    }

    fn extract(&self, _state: Self::State) -> Result<A> {
        Ok(self.value.clone())
    }
}

/// Folds two projections side by side into a tuple.
///
/// See [`pair`].
#[derive(Debug, Clone)]
pub struct Pair<PA, PB> {
    pa: PA,
    pb: PB,
}

/// Combines two projections into a projection of the tuple of their outputs.
///
/// Semantically equal to `sequence(pa.map(|a| move |b| (a, b)), pb)`,
/// implemented directly so the composite has a nameable type.
pub fn pair<PA, PB>(pa: PA, pb: PB) -> Pair<PA, PB> {
    Pair { pa, pb }
}

impl<E, PA, PB> Projection<E> for Pair<PA, PB>
where
    PA: Projection<E>,
    PB: Projection<E>,
{
    type State = (PA::State, PB::State);
    type Output = (PA::Output, PB::Output);

    fn init(&self) -> Self::State {
        (self.pa.init(), self.pb.init())
    }

    fn step(&self, (sa, sb): Self::State, event: &E) -> Result<Self::State> {
        Ok((self.pa.step(sa, event)?, self.pb.step(sb, event)?))
    }

    fn extract(&self, (sa, sb): Self::State) -> Result<Self::Output> {
        Ok((self.pa.extract(sa)?, self.pb.extract(sb)?))
    }
}
