//! Sample cargo-container domain.
//!
//! Demonstrates the projection engine end to end: container events are
//! appended through [`ContainerService`] (read-validate-append over the
//! event log), and every read model — current port, net weight, overload
//! flag, goods on board — is a pure projection folded over the container's
//! history, composable into the single-pass [`container_info`] view.

pub mod events;
pub mod service;
pub mod views;
pub mod weight;

pub use events::{ContainerEvent, Goods, Port};
pub use service::{ContainerError, ContainerService};
pub use views::{
    ContainerInfo, MAX_GROSS_WEIGHT, TARA_WEIGHT, container_info, current_port, goods_on_board,
    net_weight, overloaded,
};
pub use weight::Weight;
