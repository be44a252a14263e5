//! Algebraic laws of projection composition, plus the single-pass guarantee.

use std::sync::atomic::{AtomicUsize, Ordering};

use projection::{Projection, all, any, constant, from_fn, pair, sequence, sum_by};

fn sample_events() -> Vec<i64> {
    vec![3, -1, 4, 1, -5]
}

fn running_sum() -> impl Projection<i64, Output = i64> {
    from_fn(0, |sum, event: &i64| Ok(sum + event))
}

fn counting(slot: &AtomicUsize) -> impl Projection<i64, Output = usize> {
    from_fn(0_usize, move |count, _event: &i64| {
        slot.fetch_add(1, Ordering::SeqCst);
        Ok(count + 1)
    })
}

#[test]
fn functor_identity_law() {
    let plain = running_sum();
    let mapped = running_sum().map(|a| a);

    for events in [vec![], vec![7], sample_events()] {
        assert_eq!(mapped.fold(&events).unwrap(), plain.fold(&events).unwrap());
    }
}

#[test]
fn functor_composition_law() {
    let f = |a: i64| a + 1;
    let g = |a: i64| a * 3;

    let composed_outside = running_sum().map(move |a| g(f(a)));
    let composed_stepwise = running_sum().map(f).map(g);

    for events in [vec![], vec![7], sample_events()] {
        assert_eq!(
            composed_outside.fold(&events).unwrap(),
            composed_stepwise.fold(&events).unwrap()
        );
    }
}

#[test]
fn applicative_identity_law() {
    let identity: fn(i64) -> i64 = |a| a;
    let p = sequence(constant(identity), running_sum());

    for events in [vec![], sample_events()] {
        assert_eq!(
            p.fold(&events).unwrap(),
            running_sum().fold(&events).unwrap()
        );
    }
}

#[test]
fn applicative_homomorphism_law() {
    let double: fn(i64) -> i64 = |a| a * 2;
    let p = sequence(constant(double), constant(21));

    // Independent of event content.
    for events in [vec![], vec![999], sample_events()] {
        assert_eq!(Projection::<i64>::fold(&p, &events).unwrap(), 42);
    }
}

#[test]
fn applicative_interchange_law() {
    let negate: fn(i64) -> i64 = |a| -a;
    let value = 13;

    let left = sequence(constant(negate), constant(value));
    let right = sequence(
        constant(move |f: fn(i64) -> i64| f(value)),
        constant(negate),
    );

    for events in [vec![], sample_events()] {
        assert_eq!(
            Projection::<i64>::fold(&left, &events).unwrap(),
            Projection::<i64>::fold(&right, &events).unwrap()
        );
    }
}

#[test]
fn applicative_composition_law() {
    type Lift = Box<dyn Fn(i64) -> i64>;

    let scale = || running_sum().map(|s| Box::new(move |b| b * s) as Lift);
    let shift = || running_sum().map(|s| Box::new(move |a| a + s) as Lift);
    let compose = |f: Lift| move |g: Lift| Box::new(move |a| f(g(a))) as Lift;

    let left = sequence(
        sequence(sequence(constant(compose), scale()), shift()),
        running_sum(),
    );
    let right = sequence(scale(), sequence(shift(), running_sum()));

    for events in [vec![], vec![7], sample_events()] {
        assert_eq!(left.fold(&events).unwrap(), right.fold(&events).unwrap());
    }
}

/// For N composed projections folded over M events, total step invocations
/// are exactly N×M: one pass, never one traversal per constituent.
#[test]
fn composite_fold_is_single_pass() {
    let steps = [AtomicUsize::new(0), AtomicUsize::new(0), AtomicUsize::new(0)];

    let composite = pair(
        pair(counting(&steps[0]), counting(&steps[1])),
        counting(&steps[2]),
    );

    let events = sample_events();
    let ((c0, c1), c2) = composite.fold(&events).unwrap();
    assert_eq!((c0, c1, c2), (5, 5, 5));

    for slot in &steps {
        assert_eq!(slot.load(Ordering::SeqCst), events.len());
    }
    let total: usize = steps.iter().map(|slot| slot.load(Ordering::SeqCst)).sum();
    assert_eq!(total, 3 * events.len());
}

/// `any`/`all` may short-circuit their own boolean, but never the pass:
/// siblings composed next to them still step on every event.
#[test]
fn any_and_all_never_starve_their_siblings() {
    let stepped = AtomicUsize::new(0);
    let witness = from_fn(0_usize, |count, _event: &i64| {
        stepped.fetch_add(1, Ordering::SeqCst);
        Ok(count + 1)
    });

    let composite = pair(
        pair(any(|event: &i64| *event > 0), all(|event: &i64| *event > 0)),
        witness,
    );

    let events = sample_events();
    let ((saw_positive, all_positive), count) = composite.fold(&events).unwrap();
    assert!(saw_positive);
    assert!(!all_positive);
    assert_eq!(count, events.len());
    assert_eq!(stepped.load(Ordering::SeqCst), events.len());
}

#[test]
fn composite_with_sum_by_matches_separate_folds() {
    let events = sample_events();

    let positives = sum_by(|event: &i64| (*event > 0).then_some(*event));
    let negatives = sum_by(|event: &i64| (*event < 0).then_some(*event));

    let (pos, neg) = pair(&positives, &negatives).fold(&events).unwrap();
    assert_eq!(pos, positives.fold(&events).unwrap());
    assert_eq!(neg, negatives.fold(&events).unwrap());
    assert_eq!(pos + neg, running_sum().fold(&events).unwrap());
}
