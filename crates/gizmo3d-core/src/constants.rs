//! Gizmo constants
//!
//! This module centralizes the magic numbers used by projection, picking,
//! drag tracking and snapping.

/// Handle layout and picking constants
pub mod gizmo {
    /// Default on-screen size of the translation gizmo (pixels)
    pub const DEFAULT_TRANSLATION_SIZE: f32 = 100.0;
    /// Default on-screen radius of the rotation gizmo (pixels)
    pub const DEFAULT_ROTATION_SIZE: f32 = 80.0;
    /// Default on-screen size of the scale gizmo (pixels)
    pub const DEFAULT_SCALE_SIZE: f32 = 100.0;
    /// Pointer distance within which a handle is considered hit (pixels)
    pub const HIT_TOLERANCE_PX: f32 = 10.0;
    /// Foreshortening ratio below which an axis counts as view-parallel
    pub const DEGENERATE_RATIO: f32 = 0.05;
    /// Clip-space w below which a point is treated as behind the camera
    pub const MIN_CLIP_W: f32 = 1e-5;
    /// Finite-difference step for screen derivatives, as a fraction of clip w
    pub const PROBE_FRACTION: f32 = 0.01;
    /// Number of polyline segments used for rotation rings
    pub const RING_SEGMENTS: u32 = 64;
    /// Side length of the uniform scale handle (pixels)
    pub const UNIFORM_HANDLE_SIZE: f32 = 12.0;
}

/// Drag tracking constants
pub mod drag {
    /// Smallest scale factor a drag may produce
    pub const MIN_SCALE_FACTOR: f32 = 1e-3;
    /// Pointer-to-origin distance below which rotation samples are skipped (pixels)
    pub const MIN_ROTATION_RADIUS_PX: f32 = 1e-3;
    /// Winding magnitude below which a ring counts as edge-on
    pub const MIN_WINDING: f32 = 1e-6;
}

/// Snapping defaults
pub mod snap {
    /// Default rotation snap increment (degrees)
    pub const DEFAULT_ROTATION_ANGLE: f32 = 15.0;
    /// Default translation snap increment (world units)
    pub const DEFAULT_TRANSLATION_INCREMENT: f32 = 1.0;
    /// Default scale snap increment (factor step)
    pub const DEFAULT_SCALE_INCREMENT: f32 = 0.1;
}

/// Scale gizmo arrow layout
pub mod scale {
    /// Fraction of the handle length at which scale arrows start
    pub const DEFAULT_ARROW_START_RATIO: f32 = 0.2;
    /// Fraction of the handle length at which scale arrows end
    pub const DEFAULT_ARROW_END_RATIO: f32 = 1.0;
}

/// Camera constants
pub mod camera {
    /// Default field of view (degrees)
    pub const DEFAULT_FOV_DEGREES: f32 = 40.0;
    /// Default near clipping plane
    pub const DEFAULT_NEAR: f32 = 0.1;
    /// Default far clipping plane
    pub const DEFAULT_FAR: f32 = 100000.0;
    /// Default orbit distance
    pub const DEFAULT_DISTANCE: f32 = 5.0;
    /// Default orbit yaw (degrees)
    pub const DEFAULT_YAW_DEGREES: f32 = 45.0;
    /// Default orbit pitch (degrees)
    pub const DEFAULT_PITCH_DEGREES: f32 = 30.0;
    /// Minimum pitch angle (degrees)
    pub const MIN_PITCH_DEGREES: f32 = -89.0;
    /// Maximum pitch angle (degrees)
    pub const MAX_PITCH_DEGREES: f32 = 89.0;
}

/// Axis colors
pub mod colors {
    /// X-axis color (red)
    pub const X_AXIS: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
    /// Y-axis color (green)
    pub const Y_AXIS: [f32; 4] = [0.2, 1.0, 0.2, 1.0];
    /// Z-axis color (blue)
    pub const Z_AXIS: [f32; 4] = [0.2, 0.2, 1.0, 1.0];
    /// Uniform handle color (light gray)
    pub const UNIFORM: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
    /// Highlight color for the active axis (yellow)
    pub const ACTIVE: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
}
