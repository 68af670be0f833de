//! Scene node collaborator
//!
//! The gizmo only ever reads a node's world transform. It holds a
//! [`SceneNodeRef`], a weak handle that is upgraded on every read, so the host
//! keeps full ownership of node lifetimes.

use std::fmt;
use std::sync::{Arc, Weak};

use glam::{Quat, Vec3};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of a node's world transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeTransform {
    /// World position
    pub position: Vec3,
    /// World orientation
    pub rotation: Quat,
    /// Scale per axis
    pub scale: Vec3,
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl NodeTransform {
    /// Transform at `position` with identity rotation and unit scale.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Read access to a host scene node
pub trait SceneNode: Send + Sync {
    /// Stable identity, used to detect rebinding of the same node.
    fn id(&self) -> Uuid;

    /// Current world transform.
    fn world_transform(&self) -> NodeTransform;
}

/// Non-owning handle to a [`SceneNode`]
#[derive(Clone)]
pub struct SceneNodeRef {
    id: Uuid,
    node: Weak<dyn SceneNode>,
}

impl SceneNodeRef {
    /// Create a handle without taking ownership of `node`.
    pub fn new<N: SceneNode + 'static>(node: &Arc<N>) -> Self {
        let erased: Arc<dyn SceneNode> = node.clone();
        Self {
            id: erased.id(),
            node: Arc::downgrade(&erased),
        }
    }

    /// Identity of the referenced node, available even after it is dropped.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether the referenced node is still alive.
    pub fn is_alive(&self) -> bool {
        self.node.strong_count() > 0
    }

    /// Fresh read of the node's world transform; `None` once the node is gone.
    pub fn transform(&self) -> Option<NodeTransform> {
        self.node.upgrade().map(|node| node.world_transform())
    }
}

impl PartialEq for SceneNodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SceneNodeRef {}

impl fmt::Debug for SceneNodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneNodeRef")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Simple thread-safe scene node holding a mutable transform.
///
/// Hosts without their own scene graph (tests, the demo) use this as the
/// target; controllers write to it through the setters.
#[derive(Debug)]
pub struct TransformNode {
    id: Uuid,
    name: String,
    transform: RwLock<NodeTransform>,
}

impl TransformNode {
    /// Create a node with a fresh id.
    pub fn new(name: impl Into<String>, transform: NodeTransform) -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transform: RwLock::new(transform),
        })
    }

    /// Node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current transform
    pub fn transform(&self) -> NodeTransform {
        *self.transform.read()
    }

    /// Replace the whole transform
    pub fn set_transform(&self, transform: NodeTransform) {
        *self.transform.write() = transform;
    }

    /// Set world position
    pub fn set_position(&self, position: Vec3) {
        self.transform.write().position = position;
    }

    /// Set world orientation
    pub fn set_rotation(&self, rotation: Quat) {
        self.transform.write().rotation = rotation;
    }

    /// Set scale
    pub fn set_scale(&self, scale: Vec3) {
        self.transform.write().scale = scale;
    }
}

impl SceneNode for TransformNode {
    fn id(&self) -> Uuid {
        self.id
    }

    fn world_transform(&self) -> NodeTransform {
        self.transform()
    }
}
