//! Built-in combinators, derived purely from the core primitives.
//!
//! Each combinator is parameterized by a caller-supplied classifier
//! `Fn(&E) -> Option<V>` or predicate `Fn(&E) -> bool` and bottoms out in
//! [`FnProjection`]. None of them touch the event sequence directly; they
//! only describe state, step, and extract, and therefore compose with
//! [`pair`](crate::pair)/[`sequence`](crate::sequence) into single-pass
//! composites like any other projection.

use crate::error::InvariantViolation;
use crate::projection::{FnProjection, Projection, identity_extract};

/// Additive capability required by [`sum_by`]: a zero element plus an
/// associative, commutative addition. No other numeric assumption is made.
pub trait Additive {
    /// The additive identity.
    fn zero() -> Self;

    /// Adds `rhs` to `self`.
    fn add(self, rhs: Self) -> Self;
}

macro_rules! impl_additive {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(impl Additive for $t {
            fn zero() -> Self {
                $zero
            }

            fn add(self, rhs: Self) -> Self {
                self + rhs
            }
        })*
    };
}

impl_additive!(
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    f32 => 0.0, f64 => 0.0,
);

/// Collects every event in arrival order.
pub fn events<E: Clone>() -> impl Projection<E, Output = Vec<E>> {
    FnProjection::new(
        Vec::new,
        |mut seen: Vec<E>, event: &E| {
            seen.push(event.clone());
            Ok(seen)
        },
        identity_extract,
    )
}

/// Collects the classified values of qualifying events, in arrival order.
pub fn choose<E, V, C>(classify: C) -> impl Projection<E, Output = Vec<V>>
where
    C: Fn(&E) -> Option<V>,
{
    FnProjection::new(
        Vec::new,
        move |mut chosen: Vec<V>, event: &E| {
            if let Some(value) = classify(event) {
                chosen.push(value);
            }
            Ok(chosen)
        },
        identity_extract,
    )
}

/// Collects the events matching a predicate; [`choose`] specialized to
/// identity-on-match.
pub fn filter<E, P>(predicate: P) -> impl Projection<E, Output = Vec<E>>
where
    E: Clone,
    P: Fn(&E) -> bool,
{
    choose(move |event: &E| {
        if predicate(event) {
            Some(event.clone())
        } else {
            None
        }
    })
}

/// Sums the classified values of qualifying events.
///
/// Starts from the additive zero; events the classifier rejects contribute
/// nothing.
pub fn sum_by<E, N, C>(classify: C) -> impl Projection<E, State = N, Output = N>
where
    N: Additive,
    C: Fn(&E) -> Option<N>,
{
    FnProjection::new(
        N::zero,
        move |sum: N, event: &E| {
            Ok(match classify(event) {
                Some(amount) => sum.add(amount),
                None => sum,
            })
        },
        identity_extract,
    )
}

/// Keeps the most recently classified value.
///
/// With zero qualifying events the fold yields the type's default sentinel.
pub fn latest<E, V, C>(classify: C) -> impl Projection<E, Output = V>
where
    V: Default,
    C: Fn(&E) -> Option<V>,
{
    FnProjection::new(
        V::default,
        move |current: V, event: &E| Ok(classify(event).unwrap_or(current)),
        identity_extract,
    )
}

/// Requires exactly one qualifying event and yields its classified value.
///
/// The only built-in whose step or extract can fail: a second qualifying
/// event fails the fold with
/// [`InvariantViolation::MoreThanOneQualifyingEvent`] at the moment it is
/// stepped, and a fold that never saw a qualifying event fails at extraction
/// with [`InvariantViolation::NoQualifyingEvent`].
pub fn single<E, V, C>(classify: C) -> impl Projection<E, State = Option<V>, Output = V>
where
    C: Fn(&E) -> Option<V>,
{
    FnProjection::new(
        || None,
        move |seen: Option<V>, event: &E| match (seen, classify(event)) {
            (Some(_), Some(_)) => Err(InvariantViolation::MoreThanOneQualifyingEvent),
            (None, Some(value)) => Ok(Some(value)),
            (seen, None) => Ok(seen),
        },
        |seen: Option<V>| seen.ok_or(InvariantViolation::NoQualifyingEvent),
    )
}

/// True once any event matches the predicate.
///
/// The running boolean may skip evaluating the predicate once it is true,
/// but the step itself still runs on every event, so siblings in a composite
/// fold never miss a step.
pub fn any<E, P>(predicate: P) -> impl Projection<E, Output = bool>
where
    P: Fn(&E) -> bool,
{
    FnProjection::new(
        || false,
        move |hit, event: &E| Ok(hit || predicate(event)),
        identity_extract,
    )
}

/// True while every event matches the predicate.
///
/// Like [`any`], short-circuits only its own predicate evaluation, never the
/// surrounding fold.
pub fn all<E, P>(predicate: P) -> impl Projection<E, Output = bool>
where
    P: Fn(&E) -> bool,
{
    FnProjection::new(
        || true,
        move |holds, event: &E| Ok(holds && predicate(event)),
        identity_extract,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvariantViolation;

    #[derive(Debug, Clone, PartialEq)]
    enum Reading {
        Adjusted(f64),
        Labelled(String),
        Noise,
    }

    fn adjustment(event: &Reading) -> Option<f64> {
        match event {
            Reading::Adjusted(delta) => Some(*delta),
            _ => None,
        }
    }

    fn label(event: &Reading) -> Option<String> {
        match event {
            Reading::Labelled(name) => Some(name.clone()),
            _ => None,
        }
    }

    #[test]
    fn events_keeps_arrival_order() {
        let p = events::<Reading>();
        let sequence = vec![Reading::Noise, Reading::Adjusted(1.0)];
        assert_eq!(p.fold(&sequence).unwrap(), sequence);
    }

    #[test]
    fn choose_collects_classified_values_in_order() {
        let p = choose(adjustment);
        let folded = p
            .fold(vec![
                Reading::Adjusted(3.0),
                Reading::Noise,
                Reading::Adjusted(-1.0),
            ])
            .unwrap();
        assert_eq!(folded, vec![3.0, -1.0]);
    }

    #[test]
    fn filter_keeps_matching_events() {
        let p = filter(|event: &Reading| matches!(event, Reading::Noise));
        let folded = p
            .fold(vec![Reading::Noise, Reading::Adjusted(1.0), Reading::Noise])
            .unwrap();
        assert_eq!(folded, vec![Reading::Noise, Reading::Noise]);
    }

    #[test]
    fn sum_by_adds_classified_values() {
        let p = sum_by(adjustment);
        let folded = p
            .fold(vec![
                Reading::Adjusted(3.0),
                Reading::Adjusted(-1.0),
                Reading::Labelled("ignored".into()),
                Reading::Adjusted(2.5),
            ])
            .unwrap();
        assert_eq!(folded, 4.5);
    }

    #[test]
    fn sum_by_of_empty_sequence_is_zero() {
        let p = sum_by(adjustment);
        assert_eq!(p.fold(Vec::<Reading>::new()).unwrap(), 0.0);
    }

    #[test]
    fn latest_keeps_the_most_recent_value() {
        let p = latest(label);
        let folded = p
            .fold(vec![
                Reading::Labelled("Bremen".into()),
                Reading::Noise,
                Reading::Labelled("Hamburg".into()),
            ])
            .unwrap();
        assert_eq!(folded, "Hamburg");
    }

    #[test]
    fn latest_without_qualifying_events_is_the_default_sentinel() {
        let p = latest(label);
        assert_eq!(p.fold(vec![Reading::Noise]).unwrap(), String::new());
    }

    #[test]
    fn single_yields_the_one_qualifying_value() {
        let p = single(label);
        let folded = p
            .fold(vec![Reading::Noise, Reading::Labelled("only".into())])
            .unwrap();
        assert_eq!(folded, "only");
    }

    #[test]
    fn single_fails_without_a_qualifying_event() {
        let p = single(label);
        assert_eq!(
            p.fold(vec![Reading::Noise]).unwrap_err(),
            InvariantViolation::NoQualifyingEvent
        );
    }

    #[test]
    fn single_fails_at_the_second_qualifying_event() {
        let stepped = std::sync::atomic::AtomicUsize::new(0);
        let p = single(|event: &Reading| {
            stepped.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            label(event)
        });
        let err = p
            .fold(vec![
                Reading::Labelled("first".into()),
                Reading::Labelled("second".into()),
                Reading::Labelled("never reached".into()),
            ])
            .unwrap_err();
        assert_eq!(err, InvariantViolation::MoreThanOneQualifyingEvent);
        assert_eq!(stepped.load(std::sync::atomic::Ordering::SeqCst), 2);
    }

    #[test]
    fn any_flips_once_and_stays() {
        let p = any(|event: &Reading| matches!(event, Reading::Noise));
        assert!(p.fold(vec![Reading::Adjusted(1.0), Reading::Noise]).unwrap());
        assert!(!p.fold(vec![Reading::Adjusted(1.0)]).unwrap());
        assert!(!p.fold(Vec::<Reading>::new()).unwrap());
    }

    #[test]
    fn all_holds_only_when_every_event_matches() {
        let p = all(|event: &Reading| matches!(event, Reading::Adjusted(_)));
        assert!(p.fold(vec![Reading::Adjusted(1.0)]).unwrap());
        assert!(!p.fold(vec![Reading::Adjusted(1.0), Reading::Noise]).unwrap());
        assert!(p.fold(Vec::<Reading>::new()).unwrap());
    }
}
