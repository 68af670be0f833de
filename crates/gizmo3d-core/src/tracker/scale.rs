//! Scale drag tracker
//!
//! Converts pointer travel along a handle into a multiplicative factor. One
//! gizmo length of travel away from the node doubles the factor; moving back
//! past the node shrinks it towards (but never reaching) zero. The uniform
//! handle uses the screen diagonal pointing up and to the right.

use glam::Vec2;

use super::DragStart;
use crate::axis::{Axis, resolve_direction};
use crate::constants::drag as constants;
use crate::projection::project_axis;

/// Tracks a scale drag
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTracker {
    /// Pointer position at drag start
    pub start_pointer: Vec2,
    /// Screen direction of growth
    pub direction: Vec2,
    /// Pixels of travel for a factor change of one
    pub span: f32,
}

impl ScaleTracker {
    /// Capture the handle direction and gizmo size at drag start.
    pub fn begin(start: &DragStart<'_>) -> Option<Self> {
        if !start.gizmo_size.is_finite() || start.gizmo_size <= 0.0 {
            return None;
        }

        let direction = match start.axis {
            Axis::Uniform => Vec2::new(1.0, -1.0).normalize(),
            axis => {
                let world = resolve_direction(axis, start.mode, start.baseline.rotation)?;
                project_axis(start.viewport, start.baseline.position, world)
                    .visible()?
                    .direction
            }
        };

        Some(Self {
            start_pointer: start.pointer,
            direction,
            span: start.gizmo_size,
        })
    }

    /// Scale factor since drag start.
    pub fn update(&mut self, pointer: Vec2) -> f32 {
        let travel = (pointer - self.start_pointer).dot(self.direction);
        Self::clamp_factor(1.0 + travel / self.span)
    }

    /// Keep a factor strictly positive.
    pub fn clamp_factor(factor: f32) -> f32 {
        factor.max(constants::MIN_SCALE_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::TransformMode;
    use crate::camera::Camera;
    use crate::node::NodeTransform;
    use crate::projection::Viewport;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn front_viewport() -> Viewport {
        Camera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 800.0 / 600.0)
            .viewport(800.0, 600.0)
    }

    fn begin(axis: Axis, pointer: Vec2, gizmo_size: f32) -> Option<ScaleTracker> {
        let viewport = front_viewport();
        let baseline = NodeTransform::default();
        ScaleTracker::begin(&DragStart {
            axis,
            mode: TransformMode::World,
            pointer,
            baseline: &baseline,
            gizmo_size,
            viewport: &viewport,
        })
    }

    #[test]
    fn test_one_gizmo_length_doubles() {
        let mut tracker = begin(Axis::X, Vec2::new(470.0, 300.0), 100.0).unwrap();
        assert_relative_eq!(tracker.update(Vec2::new(570.0, 300.0)), 2.0, epsilon = 1e-4);
        assert_relative_eq!(tracker.update(Vec2::new(470.0, 300.0)), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_y_handle_grows_upwards() {
        let mut tracker = begin(Axis::Y, Vec2::new(400.0, 250.0), 100.0).unwrap();
        assert_relative_eq!(tracker.update(Vec2::new(400.0, 200.0)), 1.5, epsilon = 1e-4);
    }

    #[test]
    fn test_uniform_uses_screen_diagonal() {
        let mut tracker = begin(Axis::Uniform, Vec2::new(400.0, 300.0), 100.0).unwrap();
        let down_left = Vec2::new(1.0, -1.0).normalize() * -50.0;
        assert_relative_eq!(
            tracker.update(Vec2::new(400.0, 300.0) + down_left),
            0.5,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_factor_never_reaches_zero() {
        let mut tracker = begin(Axis::X, Vec2::new(470.0, 300.0), 100.0).unwrap();
        let factor = tracker.update(Vec2::new(200.0, 300.0));
        assert!(factor > 0.0);
        assert_eq!(factor, constants::MIN_SCALE_FACTOR);
    }

    #[test]
    fn test_zero_size_cannot_start() {
        assert!(begin(Axis::X, Vec2::new(470.0, 300.0), 0.0).is_none());
        assert!(begin(Axis::Z, Vec2::new(400.0, 300.0), 100.0).is_none());
    }
}
