//! Trivial transform controller
//!
//! Applies gizmo deltas to a [`TransformNode`] relative to the transform
//! captured when the drag started:
//!
//! - translation: `baseline.position + axis * distance`
//! - rotation: `axis_angle(axis, angle) * baseline.rotation`
//! - scale: `baseline.scale * factor` on the dragged axis (all axes for uniform)

use std::sync::Arc;

use gizmo3d_core::{
    Axis, GizmoEvent, GizmoKind, GizmoListener, NodeTransform, TransformNode, resolve_direction,
};
use glam::{Quat, Vec3};

pub struct TrivialController {
    node: Arc<TransformNode>,
    kind: GizmoKind,
    baseline: NodeTransform,
}

impl TrivialController {
    pub fn new(node: Arc<TransformNode>, kind: GizmoKind) -> Self {
        let baseline = node.transform();
        Self {
            node,
            kind,
            baseline,
        }
    }

    fn apply(&self, axis: Axis, value: f32, direction: Option<Vec3>) -> NodeTransform {
        let mut next = self.baseline;
        match self.kind {
            GizmoKind::Translation => {
                if let Some(dir) = direction {
                    next.position = self.baseline.position + dir * value;
                }
            }
            GizmoKind::Rotation => {
                if let Some(dir) = direction {
                    next.rotation =
                        (Quat::from_axis_angle(dir, value.to_radians()) * self.baseline.rotation).normalize();
                }
            }
            GizmoKind::Scale => {
                let factor = match axis {
                    Axis::X => Vec3::new(value, 1.0, 1.0),
                    Axis::Y => Vec3::new(1.0, value, 1.0),
                    Axis::Z => Vec3::new(1.0, 1.0, value),
                    Axis::Uniform => Vec3::splat(value),
                    Axis::None => Vec3::ONE,
                };
                next.scale = self.baseline.scale * factor;
            }
        }
        next
    }
}

impl GizmoListener for TrivialController {
    fn on_event(&mut self, event: &GizmoEvent) {
        match event {
            GizmoEvent::Started { .. } => self.baseline = self.node.transform(),
            GizmoEvent::Delta(delta) => {
                let direction = resolve_direction(delta.axis, delta.mode, self.baseline.rotation);
                self.node.set_transform(self.apply(delta.axis, delta.value, direction));
            }
            GizmoEvent::Ended { axis } => {
                tracing::debug!("{} committed {:?} on {:?}", self.node.name(), self.kind, axis);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gizmo3d_core::{DragDelta, TransformMode};

    fn drag(controller: &mut TrivialController, axis: Axis, mode: TransformMode, value: f32) {
        controller.on_event(&GizmoEvent::Started { axis });
        controller.on_event(&GizmoEvent::Delta(DragDelta {
            axis,
            mode,
            value,
            snap_active: false,
        }));
        controller.on_event(&GizmoEvent::Ended { axis });
    }

    #[test]
    fn test_scale_composes_from_baseline() {
        let node = TransformNode::new("box", NodeTransform::default());
        let mut controller = TrivialController::new(node.clone(), GizmoKind::Scale);
        drag(&mut controller, Axis::X, TransformMode::World, 2.0);
        drag(&mut controller, Axis::Uniform, TransformMode::World, 0.5);
        assert_eq!(node.transform().scale, Vec3::new(1.0, 0.5, 0.5));
    }

    #[test]
    fn test_deltas_are_totals_not_increments() {
        let node = TransformNode::new("box", NodeTransform::default());
        let mut controller = TrivialController::new(node.clone(), GizmoKind::Translation);
        controller.on_event(&GizmoEvent::Started { axis: Axis::Y });
        for value in [1.0, 2.0, 3.0] {
            controller.on_event(&GizmoEvent::Delta(DragDelta {
                axis: Axis::Y,
                mode: TransformMode::World,
                value,
                snap_active: false,
            }));
        }
        assert_eq!(node.transform().position, Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_local_rotation_uses_node_axis() {
        let node = TransformNode::new(
            "box",
            NodeTransform {
                rotation: Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
                ..Default::default()
            },
        );
        let mut controller = TrivialController::new(node.clone(), GizmoKind::Rotation);
        drag(&mut controller, Axis::Z, TransformMode::Local, 90.0);

        // Local Z is world -Y after the initial rotation
        let expected = Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2)
            * Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
        assert!(node.transform().rotation.abs_diff_eq(expected, 1e-5));
    }
}
