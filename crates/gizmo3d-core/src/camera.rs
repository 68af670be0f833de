//! Orbit camera supplying the view-projection transform

use glam::{Mat4, Vec3};

use crate::constants::camera as constants;
use crate::projection::Viewport;

/// Orbit camera
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    // Orbit state
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Camera {
    /// Create a Z-up orbit camera with default parameters
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Z,
            fov: constants::DEFAULT_FOV_DEGREES.to_radians(),
            aspect,
            near: constants::DEFAULT_NEAR,
            far: constants::DEFAULT_FAR,
            yaw: constants::DEFAULT_YAW_DEGREES.to_radians(),
            pitch: constants::DEFAULT_PITCH_DEGREES.to_radians(),
            distance: constants::DEFAULT_DISTANCE,
        };
        camera.update_position_from_orbit();
        camera
    }

    /// Create a camera at `position` looking at `target`.
    ///
    /// Orbit state is left at its defaults; calling [`Camera::orbit`]
    /// afterwards switches back to orbit placement.
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target,
            up,
            fov: constants::DEFAULT_FOV_DEGREES.to_radians(),
            aspect,
            near: constants::DEFAULT_NEAR,
            far: constants::DEFAULT_FAR,
            yaw: constants::DEFAULT_YAW_DEGREES.to_radians(),
            pitch: constants::DEFAULT_PITCH_DEGREES.to_radians(),
            distance: (position - target).length(),
        }
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(
            constants::MIN_PITCH_DEGREES.to_radians(),
            constants::MAX_PITCH_DEGREES.to_radians(),
        );
        self.update_position_from_orbit();
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.cos();
        let y = self.distance * self.pitch.cos() * self.yaw.sin();
        let z = self.distance * self.pitch.sin();
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined projection * view
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Viewport of `width` x `height` pixels seen through this camera
    pub fn viewport(&self, width: f32, height: f32) -> Viewport {
        Viewport::new(self.view_proj(), width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = Camera::new(1.0);
        camera.orbit(0.3, 0.2);
        assert_relative_eq!(
            (camera.position - camera.target).length(),
            constants::DEFAULT_DISTANCE,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::new(1.0);
        camera.orbit(0.0, 10.0);
        assert!(camera.pitch <= constants::MAX_PITCH_DEGREES.to_radians() + 1e-6);
    }

    #[test]
    fn test_target_projects_to_viewport_center() {
        let camera = Camera::new(4.0 / 3.0);
        let viewport = camera.viewport(800.0, 600.0);
        let center = viewport.world_to_screen(camera.target).unwrap();
        assert_relative_eq!(center.x, 400.0, epsilon = 1e-2);
        assert_relative_eq!(center.y, 300.0, epsilon = 1e-2);
    }
}
