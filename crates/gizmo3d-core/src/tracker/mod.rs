//! Drag trackers
//!
//! A tracker turns pointer samples into the raw total delta of one drag:
//! a distance for translation, an angle in degrees for rotation, and a
//! factor for scale. Trackers capture everything they need at drag start by
//! value; later samples only read the node's current transform.

mod rotate;
mod scale;
mod translate;

pub use rotate::RotateTracker;
pub use scale::ScaleTracker;
pub use translate::TranslateTracker;

use glam::Vec2;

use crate::axis::{Axis, GizmoKind, TransformMode};
use crate::node::NodeTransform;
use crate::projection::Viewport;

/// Everything captured when a drag starts
#[derive(Debug, Clone, Copy)]
pub struct DragStart<'a> {
    /// Axis being dragged
    pub axis: Axis,
    /// Transform mode for the whole drag
    pub mode: TransformMode,
    /// Pointer position at pointer-down
    pub pointer: Vec2,
    /// Node transform at pointer-down
    pub baseline: &'a NodeTransform,
    /// Gizmo size at pointer-down (pixels)
    pub gizmo_size: f32,
    /// Camera and viewport at pointer-down
    pub viewport: &'a Viewport,
}

/// Per-kind drag tracker
#[derive(Debug, Clone, PartialEq)]
pub enum DragTracker {
    /// Translation along an axis
    Translate(TranslateTracker),
    /// Rotation about an axis
    Rotate(RotateTracker),
    /// Per-axis or uniform scale
    Scale(ScaleTracker),
}

impl DragTracker {
    /// Start tracking a drag. `None` if the axis has no usable projection.
    pub fn begin(kind: GizmoKind, start: &DragStart<'_>) -> Option<Self> {
        match kind {
            GizmoKind::Translation => TranslateTracker::begin(start).map(DragTracker::Translate),
            GizmoKind::Rotation => RotateTracker::begin(start).map(DragTracker::Rotate),
            GizmoKind::Scale => ScaleTracker::begin(start).map(DragTracker::Scale),
        }
    }

    /// Raw total delta since drag start for a new pointer sample.
    pub fn update(&mut self, pointer: Vec2, viewport: &Viewport, target: &NodeTransform) -> f32 {
        match self {
            DragTracker::Translate(tracker) => tracker.update(pointer, viewport, target),
            DragTracker::Rotate(tracker) => tracker.update(pointer, viewport, target),
            DragTracker::Scale(tracker) => tracker.update(pointer),
        }
    }

    /// Value meaning "no change": 1 for scale, 0 otherwise.
    pub fn identity(&self) -> f32 {
        match self {
            DragTracker::Scale(_) => 1.0,
            DragTracker::Translate(_) | DragTracker::Rotate(_) => 0.0,
        }
    }

    /// Clamp a (possibly snapped) value into the kind's legal range.
    pub fn clamp(&self, value: f32) -> f32 {
        match self {
            DragTracker::Scale(_) => ScaleTracker::clamp_factor(value),
            DragTracker::Translate(_) | DragTracker::Rotate(_) => value,
        }
    }
}
