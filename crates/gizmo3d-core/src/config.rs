//! Gizmo settings persisted as RON

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, GizmoKind, TransformMode};
use crate::constants::{colors, gizmo, scale};
use crate::snap::SnapConfig;

/// Per-kind gizmo settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindSettings {
    /// Handle length or ring radius (pixels)
    pub gizmo_size: f32,
    /// Initial transform mode
    pub transform_mode: TransformMode,
    /// Snapping
    pub snap: SnapConfig,
    /// Scale arrow start fraction
    pub arrow_start_ratio: f32,
    /// Scale arrow end fraction
    pub arrow_end_ratio: f32,
}

impl KindSettings {
    /// Translation defaults
    pub fn translation() -> Self {
        Self {
            gizmo_size: gizmo::DEFAULT_TRANSLATION_SIZE,
            transform_mode: TransformMode::World,
            snap: SnapConfig::translation(),
            arrow_start_ratio: scale::DEFAULT_ARROW_START_RATIO,
            arrow_end_ratio: scale::DEFAULT_ARROW_END_RATIO,
        }
    }

    /// Rotation defaults
    pub fn rotation() -> Self {
        Self {
            gizmo_size: gizmo::DEFAULT_ROTATION_SIZE,
            snap: SnapConfig::rotation(),
            ..Self::translation()
        }
    }

    /// Scale defaults
    pub fn scale() -> Self {
        Self {
            gizmo_size: gizmo::DEFAULT_SCALE_SIZE,
            snap: SnapConfig::scale(),
            ..Self::translation()
        }
    }

    /// Defaults for `kind`
    pub fn for_kind(kind: GizmoKind) -> Self {
        match kind {
            GizmoKind::Translation => Self::translation(),
            GizmoKind::Rotation => Self::rotation(),
            GizmoKind::Scale => Self::scale(),
        }
    }
}

impl Default for KindSettings {
    fn default() -> Self {
        Self::translation()
    }
}

/// RGBA colors used when painting handles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisColors {
    pub x: [f32; 4],
    pub y: [f32; 4],
    pub z: [f32; 4],
    pub uniform: [f32; 4],
    /// Color of the highlighted or dragged axis
    pub active: [f32; 4],
}

impl AxisColors {
    /// Base color for `axis`. `Axis::None` uses the uniform color.
    pub fn for_axis(&self, axis: Axis) -> [f32; 4] {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
            Axis::None | Axis::Uniform => self.uniform,
        }
    }
}

impl Default for AxisColors {
    fn default() -> Self {
        Self {
            x: colors::X_AXIS,
            y: colors::Y_AXIS,
            z: colors::Z_AXIS,
            uniform: colors::UNIFORM,
            active: colors::ACTIVE,
        }
    }
}

/// Settings for all three gizmos
///
/// Missing sections fall back to their defaults. A section that is present
/// but partial fills its gaps from the translation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoSettings {
    pub translation: KindSettings,
    pub rotation: KindSettings,
    pub scale: KindSettings,
    /// Pointer distance within which a handle is hit (pixels)
    pub hit_tolerance: f32,
    pub colors: AxisColors,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self {
            translation: KindSettings::translation(),
            rotation: KindSettings::rotation(),
            scale: KindSettings::scale(),
            hit_tolerance: gizmo::HIT_TOLERANCE_PX,
            colors: AxisColors::default(),
        }
    }
}

impl GizmoSettings {
    /// Settings section for `kind`
    pub fn for_kind(&self, kind: GizmoKind) -> &KindSettings {
        match kind {
            GizmoKind::Translation => &self.translation,
            GizmoKind::Rotation => &self.rotation,
            GizmoKind::Scale => &self.scale,
        }
    }

    /// Parse settings from a RON string
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize settings to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load settings from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let settings = Self::from_ron_str(&content)?;
        tracing::debug!("Loaded gizmo settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Settings errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}
