//! Screen-space projection of gizmo axes
//!
//! Projects a node's world position and a 3D axis through the camera
//! view-projection into pixel space (origin top-left, y down).
//!
//! Screen scale is measured with a small finite-difference probe around the
//! node rather than a full unit offset, so nodes close to the near plane still
//! project sensibly. The probe is scaled by clip `w`, which keeps it
//! proportional for both perspective and orthographic cameras.

use glam::{Mat4, Vec2, Vec3};

use crate::constants::gizmo as constants;

/// Camera transform plus viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Combined projection * view matrix
    pub view_proj: Mat4,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
}

/// Projection of a single world point together with its local screen scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFrame {
    /// Projected point in pixels
    pub origin: Vec2,
    /// Pixels per world unit for a screen-parallel vector at this point
    pub pixels_per_unit: f32,
    probe: f32,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(view_proj: Mat4, width: f32, height: f32) -> Self {
        Self {
            view_proj,
            width,
            height,
        }
    }

    /// Project a world point to pixels. `None` if the point is behind the camera.
    pub fn world_to_screen(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_proj * point.extend(1.0);
        if clip.w <= constants::MIN_CLIP_W {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let screen = Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        );
        screen.is_finite().then_some(screen)
    }

    /// Project `point` and measure the screen scale around it.
    ///
    /// The scale is the largest singular value of the 2x3 screen Jacobian,
    /// i.e. the pixel length of a unit vector lying parallel to the screen.
    pub fn screen_frame(&self, point: Vec3) -> Option<ScreenFrame> {
        let clip = self.view_proj * point.extend(1.0);
        if clip.w <= constants::MIN_CLIP_W {
            return None;
        }
        let origin = self.world_to_screen(point)?;
        let probe = (clip.w.abs() * constants::PROBE_FRACTION).max(1e-4);

        let mut columns = [Vec2::ZERO; 3];
        for (column, basis) in columns.iter_mut().zip([Vec3::X, Vec3::Y, Vec3::Z]) {
            *column = (self.world_to_screen(point + basis * probe)? - origin) / probe;
        }

        // J * J^T is symmetric 2x2; its largest eigenvalue is sigma_max^2
        let a: f32 = columns.iter().map(|c| c.x * c.x).sum();
        let b: f32 = columns.iter().map(|c| c.x * c.y).sum();
        let c: f32 = columns.iter().map(|c| c.y * c.y).sum();
        let half_trace = (a + c) * 0.5;
        let eigen_max = half_trace + (((a - c) * 0.5).powi(2) + b * b).sqrt();
        let pixels_per_unit = eigen_max.sqrt();

        if !pixels_per_unit.is_finite() || pixels_per_unit <= f32::EPSILON {
            return None;
        }

        Some(ScreenFrame {
            origin,
            pixels_per_unit,
            probe,
        })
    }
}

/// An axis as seen on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenAxis {
    /// Projected node position
    pub origin: Vec2,
    /// Unit direction of the projected axis
    pub direction: Vec2,
    /// Pixels travelled per world unit along the axis
    pub pixels_per_unit: f32,
    /// Axis pixel length relative to a screen-parallel vector, in `[0, 1]`
    pub foreshortening: f32,
}

impl ScreenAxis {
    /// End point of a handle whose unforeshortened length is `length_px`.
    pub fn point_at(&self, length_px: f32) -> Vec2 {
        self.origin + self.direction * length_px * self.foreshortening
    }

    /// World units corresponding to `pixels` travelled along the axis.
    pub fn pixels_to_units(&self, pixels: f32) -> f32 {
        pixels / self.pixels_per_unit
    }
}

/// Result of projecting an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisProjection {
    /// The axis has a usable on-screen direction
    Visible(ScreenAxis),
    /// The axis is (nearly) parallel to the view direction or behind the camera
    Degenerate,
}

impl AxisProjection {
    /// The visible projection, if any.
    pub fn visible(self) -> Option<ScreenAxis> {
        match self {
            AxisProjection::Visible(axis) => Some(axis),
            AxisProjection::Degenerate => None,
        }
    }
}

/// Project `axis_dir` anchored at `world_origin` onto the screen.
pub fn project_axis(viewport: &Viewport, world_origin: Vec3, axis_dir: Vec3) -> AxisProjection {
    let Some(frame) = viewport.screen_frame(world_origin) else {
        return AxisProjection::Degenerate;
    };
    let axis_dir = axis_dir.normalize_or_zero();
    if axis_dir == Vec3::ZERO {
        return AxisProjection::Degenerate;
    }

    let Some(tip) = viewport.world_to_screen(world_origin + axis_dir * frame.probe) else {
        return AxisProjection::Degenerate;
    };
    let delta = (tip - frame.origin) / frame.probe;
    let pixels_per_unit = delta.length();
    let foreshortening = (pixels_per_unit / frame.pixels_per_unit).min(1.0);

    if !foreshortening.is_finite() || foreshortening < constants::DEGENERATE_RATIO {
        return AxisProjection::Degenerate;
    }

    AxisProjection::Visible(ScreenAxis {
        origin: frame.origin,
        direction: delta / pixels_per_unit,
        pixels_per_unit,
        foreshortening,
    })
}

/// A rotation ring as seen on screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenRing {
    /// Projected ring center
    pub origin: Vec2,
    /// Closed polyline approximating the projected ring
    pub points: Vec<Vec2>,
    /// Signed projected area ratio of the ring's basis.
    ///
    /// Negative when the axis points towards the viewer (counter-clockwise
    /// on screen is a positive rotation), positive when it points away.
    pub winding: f32,
}

/// Project the ring of on-screen radius `radius_px` around `axis_dir`.
///
/// Edge-on rings (axis perpendicular to the view direction) are degenerate.
pub fn project_ring(
    viewport: &Viewport,
    world_origin: Vec3,
    axis_dir: Vec3,
    radius_px: f32,
) -> Option<ScreenRing> {
    let frame = viewport.screen_frame(world_origin)?;
    let axis_dir = axis_dir.normalize_or_zero();
    if axis_dir == Vec3::ZERO || radius_px <= 0.0 {
        return None;
    }

    let radius = radius_px / frame.pixels_per_unit;
    let u = axis_dir.any_orthogonal_vector().normalize();
    let v = axis_dir.cross(u);

    let pu = viewport.world_to_screen(world_origin + u * radius)? - frame.origin;
    let pv = viewport.world_to_screen(world_origin + v * radius)? - frame.origin;
    let winding = pu.perp_dot(pv) / (radius_px * radius_px);
    if !winding.is_finite() || winding.abs() < constants::DEGENERATE_RATIO {
        return None;
    }

    let segments = constants::RING_SEGMENTS;
    let points: Vec<Vec2> = (0..segments)
        .filter_map(|i| {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            let offset = (u * angle.cos() + v * angle.sin()) * radius;
            viewport.world_to_screen(world_origin + offset)
        })
        .collect();
    if points.len() < 3 {
        return None;
    }

    Some(ScreenRing {
        origin: frame.origin,
        points,
        winding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use approx::assert_relative_eq;

    fn front_viewport() -> Viewport {
        Camera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 800.0 / 600.0)
            .viewport(800.0, 600.0)
    }

    #[test]
    fn test_origin_projects_to_center() {
        let viewport = front_viewport();
        let origin = viewport.world_to_screen(Vec3::ZERO).unwrap();
        assert_relative_eq!(origin.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(origin.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_point_behind_camera() {
        let viewport = front_viewport();
        assert!(viewport.world_to_screen(Vec3::new(0.0, 0.0, 20.0)).is_none());
    }

    #[test]
    fn test_x_axis_points_right() {
        let viewport = front_viewport();
        let axis = project_axis(&viewport, Vec3::ZERO, Vec3::X).visible().unwrap();
        assert_relative_eq!(axis.direction.x, 1.0, epsilon = 1e-4);
        assert_relative_eq!(axis.direction.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(axis.foreshortening, 1.0, epsilon = 1e-3);

        let one_unit = viewport.world_to_screen(Vec3::X).unwrap().x - 400.0;
        assert_relative_eq!(axis.pixels_per_unit, one_unit, epsilon = 1e-2);
    }

    #[test]
    fn test_y_axis_points_up_on_screen() {
        let viewport = front_viewport();
        let axis = project_axis(&viewport, Vec3::ZERO, Vec3::Y).visible().unwrap();
        assert_relative_eq!(axis.direction.y, -1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_view_parallel_axis_is_degenerate() {
        let viewport = front_viewport();
        assert_eq!(
            project_axis(&viewport, Vec3::ZERO, Vec3::Z),
            AxisProjection::Degenerate
        );
        // Slightly off-axis is still degenerate
        let nearly = Vec3::new(0.01, 0.0, 1.0).normalize();
        assert_eq!(
            project_axis(&viewport, Vec3::ZERO, nearly),
            AxisProjection::Degenerate
        );
    }

    #[test]
    fn test_zero_axis_is_degenerate() {
        let viewport = front_viewport();
        assert_eq!(
            project_axis(&viewport, Vec3::ZERO, Vec3::ZERO),
            AxisProjection::Degenerate
        );
    }

    #[test]
    fn test_facing_ring_is_full_circle() {
        let viewport = front_viewport();
        let ring = project_ring(&viewport, Vec3::ZERO, Vec3::Z, 80.0).unwrap();
        assert!(ring.winding < 0.0);
        for point in &ring.points {
            assert_relative_eq!((*point - ring.origin).length(), 80.0, epsilon = 0.5);
        }
    }

    #[test]
    fn test_edge_on_ring_is_degenerate() {
        let viewport = front_viewport();
        assert!(project_ring(&viewport, Vec3::ZERO, Vec3::X, 80.0).is_none());
        assert!(project_ring(&viewport, Vec3::ZERO, Vec3::Y, 80.0).is_none());
    }

    #[test]
    fn test_ring_facing_away_has_positive_winding() {
        let viewport = front_viewport();
        let ring = project_ring(&viewport, Vec3::ZERO, Vec3::NEG_Z, 80.0).unwrap();
        assert!(ring.winding > 0.0);
    }
}
