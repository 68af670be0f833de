//! Translate drag tracker
//!
//! Projects pointer movement onto the screen-space axis and converts pixels
//! to world units. The axis is re-projected at the node's current position on
//! every sample because the controller moves the node while dragging.

use glam::{Vec2, Vec3};

use super::DragStart;
use crate::axis::resolve_direction;
use crate::node::NodeTransform;
use crate::projection::{ScreenAxis, Viewport, project_axis};

/// Tracks a translation drag
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateTracker {
    /// Pointer position at drag start
    pub start_pointer: Vec2,
    /// World-space axis direction, fixed for the drag
    pub direction: Vec3,
    last_axis: ScreenAxis,
}

impl TranslateTracker {
    /// Capture the axis at drag start.
    pub fn begin(start: &DragStart<'_>) -> Option<Self> {
        let direction = resolve_direction(start.axis, start.mode, start.baseline.rotation)?;
        let last_axis = project_axis(start.viewport, start.baseline.position, direction).visible()?;
        Some(Self {
            start_pointer: start.pointer,
            direction,
            last_axis,
        })
    }

    /// Distance travelled along the axis since drag start, in world units.
    pub fn update(&mut self, pointer: Vec2, viewport: &Viewport, target: &NodeTransform) -> f32 {
        // Keep the last good projection if the axis turns view-parallel mid-drag
        if let Some(axis) = project_axis(viewport, target.position, self.direction).visible() {
            self.last_axis = axis;
        }
        let along = (pointer - self.start_pointer).dot(self.last_axis.direction);
        self.last_axis.pixels_to_units(along)
    }
}
