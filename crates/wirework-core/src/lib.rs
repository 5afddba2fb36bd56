//! Wirework Core - Scene primitives for the Wirework framework
//!
//! This crate provides the foundational types used throughout the framework:
//! - Node and Transform, the minimal scene-object abstraction
//! - A discrete, test-stepped Clock
//! - The Behaviour capability trait and its update scheduler
//! - Named layer registry

pub mod behaviour;
pub mod clock;
pub mod layers;
pub mod node;
pub mod scheduler;
pub mod transform;

pub use behaviour::{Behaviour, Collision, Handle};
pub use clock::{Clock, ClockConfig};
pub use layers::LayerMask;
pub use node::{Node, NodeId};
pub use scheduler::UpdateScheduler;
pub use transform::{Pose, Transform};
