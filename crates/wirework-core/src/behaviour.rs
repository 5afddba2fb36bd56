//! Behaviour capability trait
//!
//! A behaviour is anything attached to a node that wants per-step updates
//! and/or event-driven collision callbacks. The scheduler only ever sees this
//! trait; concrete behaviours live in calling code.

use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;

use crate::clock::Clock;
use crate::node::NodeId;

/// Shared handle to an injected value or behaviour
pub type Handle<T> = Arc<Mutex<T>>;

/// Collision event payload delivered through [`Node::on_collision_enter`].
///
/// [`Node::on_collision_enter`]: crate::node::Node::on_collision_enter
#[derive(Debug, Clone, Default)]
pub struct Collision {
    /// The node collided with, if known
    pub other: Option<NodeId>,
    /// World-space contact point
    pub point: Vec3,
}

/// Per-step update and collision capability.
///
/// `update` is polled by the scheduler once per step while the owning node is
/// alive. `on_collision_enter` is event-driven: it is invoked synchronously
/// by external stimulus through the owning node and never by the scheduler.
pub trait Behaviour: Send {
    fn update(&mut self, clock: &Clock);

    fn on_collision_enter(&mut self, _collision: &Collision) {}
}
