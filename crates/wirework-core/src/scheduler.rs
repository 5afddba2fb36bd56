//! Update scheduler
//!
//! Tracks live behaviours and advances them in discrete, test-controlled
//! steps. Update order is registration order; destroyed nodes are skipped
//! from the next step boundary and their entries dropped at end of step.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::behaviour::Behaviour;
use crate::clock::Clock;
use crate::node::Node;

struct ScheduledBehaviour {
    node: Arc<Node>,
    hook: Arc<Mutex<dyn Behaviour>>,
}

/// Ordered registry of live behaviours, stepped explicitly.
///
/// A step snapshots the entry list at its start: behaviours registered while
/// a step is in flight are first visited on the following step. (Rust's
/// borrow rules already make mid-step registration impossible here, since
/// both `register` and `step` take `&mut self`.) A node destroyed mid-step
/// is not visited again within that step - the destroyed flag is checked
/// immediately before each dispatch.
pub struct UpdateScheduler {
    entries: Vec<ScheduledBehaviour>,
}

impl UpdateScheduler {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a behaviour against its owning node.
    ///
    /// Registration order is update order.
    pub fn register(&mut self, node: Arc<Node>, hook: Arc<Mutex<dyn Behaviour>>) {
        self.entries.push(ScheduledBehaviour { node, hook });
    }

    /// Number of registered behaviours whose owning node is not destroyed.
    ///
    /// Reflects destruction immediately, independent of step timing.
    pub fn count(&self) -> usize {
        self.entries.iter().filter(|e| !e.node.is_destroyed()).count()
    }

    /// Advance the clock by one tick and update every live behaviour once,
    /// in registration order.
    pub fn step(&mut self, clock: &mut Clock) {
        clock.tick();
        for entry in &self.entries {
            if entry.node.is_destroyed() {
                continue;
            }
            entry.hook.lock().update(clock);
        }
        // Destruction is terminal; drop dead entries at the step boundary.
        self.entries.retain(|e| !e.node.is_destroyed());
    }
}

impl Default for UpdateScheduler {
    fn default() -> Self {
        Self::new()
    }
}
