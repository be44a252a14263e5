//! Derived container views, built from the projection combinators.
//!
//! Every view is a pure projection over `ContainerEvent`; nothing here reads
//! the event log. The composite [`container_info`] combines all views into
//! one projection that still folds a container's history in a single pass.

use projection::{Projection, from_fn, latest, pair, sum_by};

use crate::events::{ContainerEvent, Goods, Port};
use crate::weight::Weight;

/// The empty container's own weight, contributed by `Created`.
pub const TARA_WEIGHT: Weight = Weight::from_centitonnes(233);

/// Maximum gross weight; above this a container counts as overloaded.
pub const MAX_GROSS_WEIGHT: Weight = Weight::from_centitonnes(2800);

/// The port the container was most recently moved to.
///
/// A container that never moved reports the empty port.
pub fn current_port() -> impl Projection<ContainerEvent, Output = Port> {
    latest(|event: &ContainerEvent| match event {
        ContainerEvent::MovedTo { port } => Some(port.clone()),
        _ => None,
    })
}

/// Total weight of the container: tara plus loads minus unloads.
pub fn net_weight() -> impl Projection<ContainerEvent, Output = Weight> {
    sum_by(|event: &ContainerEvent| match event {
        ContainerEvent::Created => Some(TARA_WEIGHT),
        ContainerEvent::Loaded { weight, .. } => Some(*weight),
        ContainerEvent::Unloaded { weight, .. } => Some(-*weight),
        ContainerEvent::MovedTo { .. } => None,
    })
}

/// Whether the container weighs strictly more than [`MAX_GROSS_WEIGHT`].
pub fn overloaded() -> impl Projection<ContainerEvent, Output = bool> {
    net_weight().map(|weight| weight > MAX_GROSS_WEIGHT)
}

/// Per-goods net weights, in first-loaded order.
///
/// A goods kind whose weight reaches zero is no longer on board and drops
/// out of the list.
pub fn goods_on_board() -> impl Projection<ContainerEvent, Output = Vec<(Goods, Weight)>> {
    from_fn(
        Vec::new(),
        |mut on_board: Vec<(Goods, Weight)>, event: &ContainerEvent| {
            match event {
                ContainerEvent::Loaded { goods, weight } => {
                    match on_board.iter_mut().find(|(kind, _)| kind == goods) {
                        Some((_, current)) => *current = *current + *weight,
                        None => on_board.push((goods.clone(), *weight)),
                    }
                }
                ContainerEvent::Unloaded { goods, weight } => {
                    if let Some((_, current)) =
                        on_board.iter_mut().find(|(kind, _)| kind == goods)
                    {
                        *current = *current - *weight;
                    }
                }
                ContainerEvent::Created | ContainerEvent::MovedTo { .. } => {}
            }
            on_board.retain(|(_, weight)| !weight.is_zero());
            Ok(on_board)
        },
    )
}

/// The complete derived view of one container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerInfo {
    /// The port the container currently sits in.
    pub location: Port,

    /// Total weight including tara.
    pub net_weight: Weight,

    /// Whether the container exceeds its maximum gross weight.
    pub overloaded: bool,

    /// What is on board, per goods kind.
    pub goods: Vec<(Goods, Weight)>,
}

/// The composite container view: location, weight, overload flag, and cargo
/// in one single-pass projection.
pub fn container_info() -> impl Projection<ContainerEvent, Output = ContainerInfo> {
    pair(
        pair(current_port(), net_weight()),
        pair(overloaded(), goods_on_board()),
    )
    .map(|((location, net_weight), (overloaded, goods))| ContainerInfo {
        location,
        net_weight,
        overloaded,
        goods,
    })
}
