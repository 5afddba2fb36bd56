//! Prefab templates
//!
//! A template describes a node and the behaviours attached to it. Each
//! instantiation deep-copies the template: a brand-new node with a detached,
//! parentless transform, and fresh behaviour instances built by the
//! template's factories.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use wirework_core::{Behaviour, Node, Pose};

type BehaviourFactory = Box<dyn Fn(&Arc<Node>) -> Arc<Mutex<dyn Behaviour>> + Send + Sync>;

/// Template for instantiating nodes by path
pub struct PrefabTemplate {
    name: String,
    pose: Pose,
    factories: Vec<BehaviourFactory>,
}

impl PrefabTemplate {
    /// Create a template whose instances carry the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pose: Pose::default(),
            factories: Vec::new(),
        }
    }

    /// Set the local pose instances start with
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    /// Add a behaviour to the template. The factory runs once per
    /// instantiation, receiving the freshly created owning node.
    pub fn with_behaviour<B, F>(mut self, factory: F) -> Self
    where
        B: Behaviour + 'static,
        F: Fn(&Arc<Node>) -> B + Send + Sync + 'static,
    {
        self.factories.push(Box::new(move |node| {
            Arc::new(Mutex::new(factory(node))) as Arc<Mutex<dyn Behaviour>>
        }));
        self
    }

    /// Deep-copy this template into a new node with fresh behaviours.
    ///
    /// The new node's transform has no parent; re-parenting is up to the
    /// caller. Behaviours are attached to the node for collision dispatch
    /// but NOT yet registered for updates - the embedding kernel does that.
    pub fn spawn(&self) -> SpawnedPrefab {
        let node = Node::with_pose(Some(self.name.clone()), self.pose);
        let behaviours: Vec<Arc<Mutex<dyn Behaviour>>> =
            self.factories.iter().map(|f| f(&node)).collect();
        for behaviour in &behaviours {
            node.attach(behaviour);
        }
        debug!(prefab = %self.name, node = %node.id(), "prefab instantiated");
        SpawnedPrefab { node, behaviours }
    }
}

/// Result of instantiating a [`PrefabTemplate`]: an independent node plus
/// the behaviours that still need scheduler registration.
pub struct SpawnedPrefab {
    pub node: Arc<Node>,
    pub behaviours: Vec<Arc<Mutex<dyn Behaviour>>>,
}
