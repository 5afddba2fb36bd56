//! Transform with optional parent link
//!
//! A `Transform` belongs to exactly one [`Node`](crate::node::Node) and holds
//! local position/rotation/scale plus a weak back-link to a parent transform.
//! Re-parenting is the only mutation path for the link; parent chains are
//! expected to be acyclic.

use std::sync::{Arc, Weak};

use glam::{Mat4, Quat, Vec3};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Plain position/rotation/scale value, used for prefab templates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Pose {
    /// Create a pose at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Compute the model matrix for this pose
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Shared transform attached to a node.
///
/// Identity matters more than value here: tests and scope rules compare
/// transforms with [`Arc::ptr_eq`], never by component values.
pub struct Transform {
    local: RwLock<Pose>,
    parent: RwLock<Weak<Transform>>,
}

impl Transform {
    /// Create a detached transform with the given local pose
    pub fn new(pose: Pose) -> Arc<Self> {
        Arc::new(Self {
            local: RwLock::new(pose),
            parent: RwLock::new(Weak::new()),
        })
    }

    /// Local pose relative to the parent (or the world if detached)
    pub fn local(&self) -> Pose {
        *self.local.read()
    }

    /// Replace the local pose
    pub fn set_local(&self, pose: Pose) {
        *self.local.write() = pose;
    }

    /// Local position
    pub fn position(&self) -> Vec3 {
        self.local.read().position
    }

    /// Set the local position
    pub fn set_position(&self, position: Vec3) {
        self.local.write().position = position;
    }

    /// Translate the local position by the given offset
    pub fn translate(&self, offset: Vec3) {
        self.local.write().position += offset;
    }

    /// The parent transform, if one is set and still alive
    pub fn parent(&self) -> Option<Arc<Transform>> {
        self.parent.read().upgrade()
    }

    /// Re-parent this transform. `None` detaches it.
    ///
    /// The link is a weak back-link, not an ownership edge: dropping the
    /// parent leaves this transform detached.
    pub fn set_parent(&self, parent: Option<&Arc<Transform>>) {
        *self.parent.write() = match parent {
            Some(p) => Arc::downgrade(p),
            None => Weak::new(),
        };
    }

    /// World-space model matrix, composed up the parent chain
    pub fn world_matrix(&self) -> Mat4 {
        let local = self.local.read().matrix();
        match self.parent() {
            Some(parent) => parent.world_matrix() * local,
            None => local,
        }
    }

    /// World-space position
    pub fn world_position(&self) -> Vec3 {
        self.world_matrix().col(3).truncate()
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("local", &*self.local.read())
            .field("has_parent", &self.parent().is_some())
            .finish()
    }
}
