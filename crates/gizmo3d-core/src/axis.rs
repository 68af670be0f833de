//! Axis, transform mode and gizmo kind enums
//!
//! Also hosts the transform-mode resolver that turns an axis id into a
//! world-space direction.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Which gizmo a handle set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GizmoKind {
    /// Move along an axis
    #[default]
    Translation,
    /// Rotate about an axis
    Rotation,
    /// Scale along an axis or uniformly
    Scale,
}

impl GizmoKind {
    /// Axes this kind offers for picking, in tie-break priority order.
    pub fn axes(&self) -> &'static [Axis] {
        match self {
            GizmoKind::Translation | GizmoKind::Rotation => &[Axis::X, Axis::Y, Axis::Z],
            GizmoKind::Scale => &Axis::PRIORITY,
        }
    }

    /// Whether `axis` may be active on this kind. `None` is always allowed.
    pub fn supports(&self, axis: Axis) -> bool {
        axis == Axis::None || self.axes().contains(&axis)
    }

    /// Lower-camel prefix used for event names (`rotation`, `scale`, ...).
    pub fn signal_prefix(&self) -> &'static str {
        match self {
            GizmoKind::Translation => "translation",
            GizmoKind::Rotation => "rotation",
            GizmoKind::Scale => "scale",
        }
    }
}

/// Which axis is being manipulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Axis {
    /// No axis
    #[default]
    None,
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
    /// All three axes together. Scale gizmo only.
    Uniform,
}

impl Axis {
    /// Pickable axes in tie-break priority order.
    pub const PRIORITY: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::Uniform];

    /// Stable integer id: 0=None, 1=X, 2=Y, 3=Z, 4=Uniform.
    pub fn id(&self) -> i32 {
        match self {
            Axis::None => 0,
            Axis::X => 1,
            Axis::Y => 2,
            Axis::Z => 3,
            Axis::Uniform => 4,
        }
    }

    /// Inverse of [`Axis::id`].
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Axis::None),
            1 => Some(Axis::X),
            2 => Some(Axis::Y),
            3 => Some(Axis::Z),
            4 => Some(Axis::Uniform),
            _ => None,
        }
    }

    /// World basis vector for X/Y/Z.
    pub fn basis(&self) -> Option<Vec3> {
        match self {
            Axis::X => Some(Vec3::X),
            Axis::Y => Some(Vec3::Y),
            Axis::Z => Some(Vec3::Z),
            Axis::None | Axis::Uniform => None,
        }
    }
}

/// Gizmo coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransformMode {
    /// Fixed world axes
    #[default]
    World,
    /// Axes rotated by the node orientation
    Local,
}

impl TransformMode {
    /// Stable integer id: 0=World, 1=Local.
    pub fn id(&self) -> i32 {
        match self {
            TransformMode::World => 0,
            TransformMode::Local => 1,
        }
    }

    /// Inverse of [`TransformMode::id`].
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(TransformMode::World),
            1 => Some(TransformMode::Local),
            _ => None,
        }
    }
}

/// Resolve an axis into a world-space unit direction.
///
/// World mode yields the fixed basis vector; local mode rotates that basis
/// vector by the node `orientation`. `Uniform` and `None` have no single
/// direction and yield `None`.
pub fn resolve_direction(axis: Axis, mode: TransformMode, orientation: Quat) -> Option<Vec3> {
    let basis = axis.basis()?;
    match mode {
        TransformMode::World => Some(basis),
        TransformMode::Local => Some((orientation.normalize() * basis).normalize()),
    }
}
