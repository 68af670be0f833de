//! Gizmo painter
//!
//! Paints a gizmo's current handle layout onto a [`Canvas`]. Translation
//! handles are arrows, scale handles are square-capped shafts plus the
//! uniform square, and rotation handles are rings. While a rotation drag is
//! active the swept wedge is filled underneath the rings.

use gizmo3d_core::{Axis, AxisColors, Gizmo, GizmoKind, HandleShape, Viewport};

use crate::canvas::{Canvas, Color};
use crate::primitives::{ArrowPrimitive, CirclePrimitive, SquareHandlePrimitive};

/// Renders gizmos with per-axis colors
#[derive(Debug, Clone, PartialEq)]
pub struct GizmoPainter {
    pub colors: AxisColors,
    pub line_width: f32,
    /// Line width of the highlighted axis
    pub active_line_width: f32,
    pub arrow: ArrowPrimitive,
    pub circle: CirclePrimitive,
    pub square: SquareHandlePrimitive,
}

impl Default for GizmoPainter {
    fn default() -> Self {
        Self::new(AxisColors::default())
    }
}

impl GizmoPainter {
    /// Painter with the given colors and default primitives.
    pub fn new(colors: AxisColors) -> Self {
        Self {
            colors,
            line_width: 2.0,
            active_line_width: 3.0,
            arrow: ArrowPrimitive::default(),
            circle: CirclePrimitive::default(),
            square: SquareHandlePrimitive::default(),
        }
    }

    fn color(&self, axis: Axis, active: Axis) -> Color {
        if axis == active {
            self.colors.active
        } else {
            self.colors.for_axis(axis)
        }
    }

    fn width(&self, axis: Axis, active: Axis) -> f32 {
        if axis == active {
            self.active_line_width
        } else {
            self.line_width
        }
    }

    /// Paint `gizmo` as seen through `viewport`. Returns the number of
    /// handles painted.
    pub fn paint(&self, ctx: Option<&mut dyn Canvas>, gizmo: &Gizmo, viewport: &Viewport) -> usize {
        let Some(ctx) = ctx else { return 0 };
        let Some(layout) = gizmo.handle_layout(viewport) else {
            tracing::trace!("{:?} gizmo has no layout to paint", gizmo.kind());
            return 0;
        };
        let active = gizmo.highlighted_axis();

        if let Some(snapshot) = gizmo.drag_snapshot()
            && let Some(wedge) = snapshot.wedge
        {
            self.circle.draw_filled_wedge(
                Some(&mut *ctx),
                wedge.center,
                gizmo.gizmo_size(),
                wedge.start_angle,
                wedge.start_angle + wedge.sweep,
                self.colors.for_axis(snapshot.axis),
            );
        }

        for handle in &layout.handles {
            let color = self.color(handle.axis, active);
            let width = self.width(handle.axis, active);
            match &handle.shape {
                HandleShape::Segment { start, end } => match gizmo.kind() {
                    GizmoKind::Scale => self.arrow.draw_with_square(
                        Some(&mut *ctx),
                        *start,
                        *end,
                        color,
                        width,
                        self.square.default_size * 0.75,
                    ),
                    GizmoKind::Translation | GizmoKind::Rotation => {
                        self.arrow.draw(Some(&mut *ctx), *start, *end, color, width)
                    }
                },
                HandleShape::Ring(ring) => {
                    self.circle.draw_circle(Some(&mut *ctx), &ring.points, color, width)
                }
                HandleShape::Square {
                    center,
                    half_extent,
                } => self
                    .square
                    .draw(Some(&mut *ctx), *center, color, Some(half_extent * 2.0)),
            }
        }

        layout.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};
    use gizmo3d_core::{Camera, NodeTransform, SceneNodeRef, TransformNode};
    use glam::{Vec2, Vec3};

    fn front_viewport() -> Viewport {
        Camera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 800.0 / 600.0)
            .viewport(800.0, 600.0)
    }

    fn stroke_colors(list: &DisplayList) -> Vec<Color> {
        list.commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Stroke { style, .. } => Some(style.color),
                DrawCommand::Fill { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_translation_paints_visible_arrows() {
        let node = TransformNode::new("box", NodeTransform::default());
        let mut gizmo = Gizmo::translation();
        gizmo.set_target_node(Some(SceneNodeRef::new(&node)));

        let mut list = DisplayList::new();
        let painted = GizmoPainter::default().paint(Some(&mut list), &gizmo, &front_viewport());
        // Z points at the camera and is skipped
        assert_eq!(painted, 2);
        assert_eq!(list.stroke_count(), 4);
        assert_eq!(list.fill_count(), 0);
    }

    #[test]
    fn test_active_axis_is_highlighted() {
        let node = TransformNode::new("box", NodeTransform::default());
        let mut gizmo = Gizmo::translation();
        gizmo.set_target_node(Some(SceneNodeRef::new(&node)));
        gizmo.set_active_axis(Axis::Y).unwrap();

        let painter = GizmoPainter::default();
        let mut list = DisplayList::new();
        painter.paint(Some(&mut list), &gizmo, &front_viewport());
        let colors = stroke_colors(&list);
        assert_eq!(colors[0], painter.colors.x);
        assert_eq!(colors[2], painter.colors.active);
    }

    #[test]
    fn test_hovered_axis_is_highlighted() {
        let viewport = front_viewport();
        let node = TransformNode::new("box", NodeTransform::default());
        let mut gizmo = Gizmo::translation();
        gizmo.set_target_node(Some(SceneNodeRef::new(&node)));
        assert_eq!(gizmo.hover(Vec2::new(450.0, 302.0), &viewport), Axis::X);

        let painter = GizmoPainter::default();
        let mut list = DisplayList::new();
        painter.paint(Some(&mut list), &gizmo, &viewport);
        let colors = stroke_colors(&list);
        assert_eq!(colors[0], painter.colors.active);
        assert_eq!(colors[2], painter.colors.y);
    }

    #[test]
    fn test_scale_paints_square_caps_and_uniform_handle() {
        let node = TransformNode::new("box", NodeTransform::default());
        let mut gizmo = Gizmo::scale();
        gizmo.set_target_node(Some(SceneNodeRef::new(&node)));

        let mut list = DisplayList::new();
        let painted = GizmoPainter::default().paint(Some(&mut list), &gizmo, &front_viewport());
        assert_eq!(painted, 3);
        assert_eq!(list.fill_count(), 3);
    }

    #[test]
    fn test_rotation_drag_fills_wedge() {
        let viewport = front_viewport();
        let node = TransformNode::new("box", NodeTransform::default());
        let mut gizmo = Gizmo::rotation();
        gizmo.set_target_node(Some(SceneNodeRef::new(&node)));

        let painter = GizmoPainter::default();
        let mut idle = DisplayList::new();
        painter.paint(Some(&mut idle), &gizmo, &viewport);
        assert_eq!(idle.fill_count(), 0);

        assert!(gizmo.pointer_down(Vec2::new(480.0, 300.0), &viewport));
        gizmo.pointer_move(Vec2::new(400.0, 220.0), &viewport);
        let mut dragging = DisplayList::new();
        painter.paint(Some(&mut dragging), &gizmo, &viewport);
        assert!(matches!(dragging.commands()[0], DrawCommand::Fill { .. }));
        assert_eq!(stroke_colors(&dragging), vec![painter.colors.active]);
    }

    #[test]
    fn test_nothing_to_paint() {
        let gizmo = Gizmo::translation();
        let mut list = DisplayList::new();
        assert_eq!(GizmoPainter::default().paint(Some(&mut list), &gizmo, &front_viewport()), 0);
        assert_eq!(GizmoPainter::default().paint(None, &gizmo, &front_viewport()), 0);
        assert!(list.is_empty());
    }
}
