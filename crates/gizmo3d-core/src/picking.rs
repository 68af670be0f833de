//! Screen-space handle layout and hit testing
//!
//! This module lays out a gizmo's handles in pixel space for the current
//! camera and node transform, and picks the handle closest to a pointer.
//!
//! # Algorithm
//!
//! Every handle reduces to a 2D shape (segment, closed polyline, or square).
//! The pointer's distance to each shape is measured; the closest shape within
//! the hit tolerance wins. Handles are visited in the fixed priority order
//! X, Y, Z, Uniform and only a strictly smaller distance replaces the current
//! best, so exact ties resolve to the earlier axis.

use glam::{Vec2, Vec3};

use crate::axis::{Axis, GizmoKind, TransformMode, resolve_direction};
use crate::constants::gizmo as constants;
use crate::node::NodeTransform;
use crate::projection::{ScreenRing, Viewport, project_axis, project_ring};

/// Distance from `point` to the segment `start`..`end`.
pub fn distance_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_squared();
    if length_sq <= f32::EPSILON {
        return point.distance(start);
    }
    // Clamp the projection onto the segment to stay within its bounds
    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    point.distance(start + segment * t)
}

/// Distance from `point` to a polyline. `None` for fewer than two points.
pub fn distance_to_polyline(point: Vec2, points: &[Vec2], closed: bool) -> Option<f32> {
    if points.len() < 2 {
        return None;
    }
    let open = points
        .windows(2)
        .map(|pair| distance_to_segment(point, pair[0], pair[1]));
    let closing = closed
        .then(|| distance_to_segment(point, points[points.len() - 1], points[0]))
        .into_iter();
    open.chain(closing).reduce(f32::min)
}

/// Distance from `point` to an axis-aligned square; zero inside.
pub fn distance_to_square(point: Vec2, center: Vec2, half_extent: f32) -> f32 {
    let outside = (point - center).abs() - Vec2::splat(half_extent);
    outside.max(Vec2::ZERO).length()
}

/// Screen geometry of one handle
#[derive(Debug, Clone, PartialEq)]
pub enum HandleShape {
    /// Straight arrow from `start` to `end`
    Segment { start: Vec2, end: Vec2 },
    /// Rotation ring
    Ring(ScreenRing),
    /// Square handle
    Square { center: Vec2, half_extent: f32 },
}

impl HandleShape {
    /// Pixel distance from `point` to this shape.
    pub fn distance(&self, point: Vec2) -> f32 {
        match self {
            HandleShape::Segment { start, end } => distance_to_segment(point, *start, *end),
            HandleShape::Ring(ring) => {
                distance_to_polyline(point, &ring.points, true).unwrap_or(f32::INFINITY)
            }
            HandleShape::Square {
                center,
                half_extent,
            } => distance_to_square(point, *center, *half_extent),
        }
    }
}

/// One pickable handle
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    /// Axis this handle drives
    pub axis: Axis,
    /// Screen geometry
    pub shape: HandleShape,
}

/// Inputs that shape a gizmo's handle layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Gizmo kind
    pub kind: GizmoKind,
    /// World or local axes
    pub mode: TransformMode,
    /// Handle length (translation, scale) or ring radius (rotation) in pixels
    pub gizmo_size: f32,
    /// Scale arrows start at this fraction of `gizmo_size`
    pub arrow_start_ratio: f32,
    /// Scale arrows end at this fraction of `gizmo_size`
    pub arrow_end_ratio: f32,
}

/// All visible handles of a gizmo for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HandleLayout {
    /// Projected node position
    pub origin: Vec2,
    /// Non-degenerate handles in priority order
    pub handles: Vec<Handle>,
}

impl HandleLayout {
    /// Lay out handles for `target` as seen through `viewport`.
    ///
    /// Returns `None` when the node itself cannot be projected. Degenerate
    /// axes are left out of the layout.
    pub fn compute(params: &LayoutParams, viewport: &Viewport, target: &NodeTransform) -> Option<Self> {
        let origin = viewport.world_to_screen(target.position)?;
        let mut handles = Vec::with_capacity(4);
        if !params.gizmo_size.is_finite() || params.gizmo_size <= 0.0 {
            return Some(Self { origin, handles });
        }

        for &axis in params.kind.axes() {
            let shape = match axis {
                Axis::Uniform => Some(HandleShape::Square {
                    center: origin,
                    half_extent: constants::UNIFORM_HANDLE_SIZE * 0.5,
                }),
                _ => {
                    let Some(dir) = resolve_direction(axis, params.mode, target.rotation) else {
                        continue;
                    };
                    axis_shape(params, viewport, target.position, dir)
                }
            };

            match shape {
                Some(shape) => handles.push(Handle { axis, shape }),
                None => tracing::trace!(?axis, "handle degenerate this frame"),
            }
        }

        Some(Self { origin, handles })
    }

    /// Handle for `axis`, if visible.
    pub fn handle(&self, axis: Axis) -> Option<&Handle> {
        self.handles.iter().find(|handle| handle.axis == axis)
    }

    /// Closest handle to `pointer` within `tolerance` pixels, else `Axis::None`.
    pub fn pick(&self, pointer: Vec2, tolerance: f32) -> Axis {
        let mut closest_axis = Axis::None;
        let mut closest_dist = f32::MAX;

        for handle in &self.handles {
            let dist = handle.shape.distance(pointer);
            if dist <= tolerance && dist < closest_dist {
                closest_dist = dist;
                closest_axis = handle.axis;
            }
        }

        closest_axis
    }
}

fn axis_shape(
    params: &LayoutParams,
    viewport: &Viewport,
    position: Vec3,
    dir: Vec3,
) -> Option<HandleShape> {
    match params.kind {
        GizmoKind::Translation => {
            let axis = project_axis(viewport, position, dir).visible()?;
            Some(HandleShape::Segment {
                start: axis.origin,
                end: axis.point_at(params.gizmo_size),
            })
        }
        GizmoKind::Scale => {
            let axis = project_axis(viewport, position, dir).visible()?;
            Some(HandleShape::Segment {
                start: axis.point_at(params.gizmo_size * params.arrow_start_ratio),
                end: axis.point_at(params.gizmo_size * params.arrow_end_ratio),
            })
        }
        GizmoKind::Rotation => {
            project_ring(viewport, position, dir, params.gizmo_size).map(HandleShape::Ring)
        }
    }
}
