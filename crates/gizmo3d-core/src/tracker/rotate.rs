//! Rotate drag tracker
//!
//! Measures the angle swept by the pointer around the projected node origin.
//! Each sample adds the minimal signed step between consecutive pointer
//! vectors, so the total unwraps past +-180 degrees instead of jumping.
//! The screen sweep is mapped to a rotation about the axis by the sign of
//! the ring winding: for an axis facing the viewer a counter-clockwise sweep
//! is a positive rotation.

use glam::{Vec2, Vec3};

use super::DragStart;
use crate::axis::resolve_direction;
use crate::constants::drag as constants;
use crate::node::NodeTransform;
use crate::projection::{Viewport, project_ring};

/// Tracks a rotation drag
#[derive(Debug, Clone, PartialEq)]
pub struct RotateTracker {
    /// World-space rotation axis, fixed for the drag
    pub direction: Vec3,
    winding_sign: f32,
    origin: Vec2,
    start_vector: Option<Vec2>,
    previous: Option<Vec2>,
    sweep: f32,
}

impl RotateTracker {
    /// Capture the axis, ring orientation and pointer vector at drag start.
    pub fn begin(start: &DragStart<'_>) -> Option<Self> {
        let direction = resolve_direction(start.axis, start.mode, start.baseline.rotation)?;
        let origin = start.viewport.world_to_screen(start.baseline.position)?;
        let winding = project_ring(
            start.viewport,
            start.baseline.position,
            direction,
            start.gizmo_size,
        )
        .map(|ring| ring.winding)
        .unwrap_or(-1.0);
        let winding_sign = if winding.abs() < constants::MIN_WINDING || winding < 0.0 {
            -1.0
        } else {
            1.0
        };

        let start_vector = pointer_vector(start.pointer, origin);
        Some(Self {
            direction,
            winding_sign,
            origin,
            start_vector,
            previous: start_vector,
            sweep: 0.0,
        })
    }

    /// Rotation in degrees since drag start.
    pub fn update(&mut self, pointer: Vec2, viewport: &Viewport, target: &NodeTransform) -> f32 {
        if let Some(origin) = viewport.world_to_screen(target.position) {
            self.origin = origin;
        }

        // Pointer on top of the origin has no defined angle
        let Some(current) = pointer_vector(pointer, self.origin) else {
            return self.value();
        };

        match self.previous {
            Some(previous) => self.sweep += previous.perp_dot(current).atan2(previous.dot(current)),
            None => self.start_vector = Some(current),
        }
        self.previous = Some(current);
        self.value()
    }

    /// Rotation in degrees since drag start, signed by the axis orientation.
    pub fn value(&self) -> f32 {
        self.sweep.to_degrees() * self.winding_sign
    }

    /// Screen angle of the first pointer vector, in radians (y down).
    pub fn start_angle(&self) -> Option<f32> {
        self.start_vector.map(|v| v.y.atan2(v.x))
    }

    /// Accumulated screen sweep in radians (positive is clockwise on screen).
    pub fn screen_sweep(&self) -> f32 {
        self.sweep
    }

    /// Projected node origin used by the last sample.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
}

fn pointer_vector(pointer: Vec2, origin: Vec2) -> Option<Vec2> {
    let v = pointer - origin;
    (v.length() > constants::MIN_ROTATION_RADIUS_PX).then_some(v)
}
