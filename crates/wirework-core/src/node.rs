//! Node - the minimal scene-object abstraction
//!
//! A node owns a transform and a monotonic destroyed flag. Behaviours attach
//! to it for collision dispatch; update dispatch goes through the
//! [`UpdateScheduler`](crate::scheduler::UpdateScheduler) instead.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::behaviour::{Behaviour, Collision};
use crate::transform::{Pose, Transform};

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scene object: identity, transform, destroyed flag.
///
/// Nodes are always shared via `Arc`; identity comparison is `Arc::ptr_eq`
/// or [`NodeId`] equality. The destroyed flag is monotonic - once set it
/// never reverts, and the node's behaviours stop receiving scheduled updates
/// from the next step boundary.
pub struct Node {
    id: NodeId,
    name: Option<String>,
    transform: Arc<Transform>,
    destroyed: AtomicBool,
    behaviours: Mutex<Vec<Weak<Mutex<dyn Behaviour>>>>,
}

impl Node {
    /// Create an anonymous node with a detached identity transform
    pub fn new() -> Arc<Self> {
        Self::with_pose(None, Pose::default())
    }

    /// Create a named node, e.g. for prefab instances
    pub fn named(name: impl Into<String>) -> Arc<Self> {
        Self::with_pose(Some(name.into()), Pose::default())
    }

    /// Create a node with the given name and local pose
    pub fn with_pose(name: Option<String>, pose: Pose) -> Arc<Self> {
        Arc::new(Self {
            id: NodeId::new(),
            name,
            transform: Transform::new(pose),
            destroyed: AtomicBool::new(false),
            behaviours: Mutex::new(Vec::new()),
        })
    }

    /// This node's unique identity
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Optional display name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The transform owned by this node
    pub fn transform(&self) -> &Arc<Transform> {
        &self.transform
    }

    /// Mark this node destroyed. Irreversible.
    pub fn destroy(&self) {
        self.destroyed.store(true, Ordering::Release);
    }

    /// Whether this node has been destroyed
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::Acquire)
    }

    /// Attach a behaviour for collision dispatch.
    ///
    /// The node keeps only a weak reference; a dropped behaviour silently
    /// stops receiving callbacks.
    pub fn attach(&self, behaviour: &Arc<Mutex<dyn Behaviour>>) {
        self.behaviours.lock().push(Arc::downgrade(behaviour));
    }

    /// Synchronously deliver a collision event to all attached behaviours.
    ///
    /// This is the event-driven path, deliberately separate from the polled
    /// update loop. Calling it on a destroyed node is the caller's
    /// responsibility; the core does not guard it.
    pub fn on_collision_enter(&self, collision: &Collision) {
        let mut behaviours = self.behaviours.lock();
        behaviours.retain(|weak| {
            let Some(behaviour) = weak.upgrade() else {
                return false;
            };
            behaviour.lock().on_collision_enter(collision);
            true
        });
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("destroyed", &self.is_destroyed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;

    struct CollisionCounter {
        collisions: u32,
    }

    impl Behaviour for CollisionCounter {
        fn update(&mut self, _clock: &Clock) {}

        fn on_collision_enter(&mut self, _collision: &Collision) {
            self.collisions += 1;
        }
    }

    #[test]
    fn destroy_is_monotonic() {
        let node = Node::new();
        assert!(!node.is_destroyed());
        node.destroy();
        assert!(node.is_destroyed());
        node.destroy();
        assert!(node.is_destroyed());
    }

    #[test]
    fn distinct_nodes_have_distinct_ids() {
        let a = Node::new();
        let b = Node::new();
        assert_ne!(a.id(), b.id());
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn collision_reaches_attached_behaviour() {
        let node = Node::new();
        let counter = Arc::new(Mutex::new(CollisionCounter { collisions: 0 }));
        let hook: Arc<Mutex<dyn Behaviour>> = counter.clone();
        node.attach(&hook);

        node.on_collision_enter(&Collision::default());
        assert_eq!(counter.lock().collisions, 1);
    }

    #[test]
    fn dropped_behaviour_is_pruned() {
        let node = Node::new();
        {
            let counter = Arc::new(Mutex::new(CollisionCounter { collisions: 0 }));
            let hook: Arc<Mutex<dyn Behaviour>> = counter;
            node.attach(&hook);
        }
        // Upgrade fails, entry is dropped, no panic.
        node.on_collision_enter(&Collision::default());
    }
}
