//! Value snapping
//!
//! Quantizes drag deltas to a fixed increment. Two modes exist:
//!
//! - **Absolute**: the total delta since drag start is quantized as a whole on
//!   every sample, so each emitted value is a grid multiple away from the
//!   drag's starting value.
//! - **Relative**: each per-sample step is quantized on its own and added to a
//!   running total. Steps smaller than half an increment commit nothing, so the
//!   resulting sequence depends on the sampling rate.

use serde::{Deserialize, Serialize};

use crate::constants::snap as constants;

/// Snap settings for one gizmo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Whether snapping is requested
    pub enabled: bool,
    /// Grid step (degrees, world units, or scale factor step)
    pub increment: f32,
    /// Quantize the accumulated total (true) or each step (false)
    pub to_absolute: bool,
}

impl SnapConfig {
    /// Rotation defaults: disabled, 15 degrees, absolute.
    pub fn rotation() -> Self {
        Self {
            enabled: false,
            increment: constants::DEFAULT_ROTATION_ANGLE,
            to_absolute: true,
        }
    }

    /// Translation defaults: disabled, 1 unit, absolute.
    pub fn translation() -> Self {
        Self {
            enabled: false,
            increment: constants::DEFAULT_TRANSLATION_INCREMENT,
            to_absolute: true,
        }
    }

    /// Scale defaults: disabled, 0.1 factor step, absolute.
    pub fn scale() -> Self {
        Self {
            enabled: false,
            increment: constants::DEFAULT_SCALE_INCREMENT,
            to_absolute: true,
        }
    }

    /// Whether quantization actually applies: enabled with a positive finite increment.
    pub fn is_active(&self) -> bool {
        self.enabled && is_valid_increment(self.increment)
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self::translation()
    }
}

fn is_valid_increment(increment: f32) -> bool {
    increment.is_finite() && increment > 0.0
}

/// Round `value` to the nearest multiple of `increment`.
///
/// Zero, negative or non-finite increments leave `value` unchanged.
pub fn quantize(value: f32, increment: f32) -> f32 {
    if !is_valid_increment(increment) {
        return value;
    }
    (value / increment).round() * increment
}

/// Applies snapping to the raw totals of one drag
#[derive(Debug, Clone, PartialEq)]
pub struct SnapAccumulator {
    identity: f32,
    last_raw: f32,
    committed: f32,
}

impl SnapAccumulator {
    /// Start a drag whose untouched value is `identity` (0 for distances and
    /// angles, 1 for scale factors).
    pub fn new(identity: f32) -> Self {
        Self {
            identity,
            last_raw: identity,
            committed: identity,
        }
    }

    /// Feed the raw total for a new sample.
    ///
    /// Returns the value to emit and whether snapping was applied. The config
    /// is read per call, so toggling snapping mid-drag takes effect on the
    /// next sample.
    pub fn apply(&mut self, raw_total: f32, config: &SnapConfig) -> (f32, bool) {
        let step = raw_total - self.last_raw;
        self.last_raw = raw_total;

        if !config.is_active() {
            self.committed = raw_total;
            return (raw_total, false);
        }

        self.committed = if config.to_absolute {
            self.identity + quantize(raw_total - self.identity, config.increment)
        } else {
            self.committed + quantize(step, config.increment)
        };
        (self.committed, true)
    }

    /// Last emitted value.
    pub fn committed(&self) -> f32 {
        self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(increment: f32, to_absolute: bool) -> SnapConfig {
        SnapConfig {
            enabled: true,
            increment,
            to_absolute,
        }
    }

    #[test]
    fn test_defaults() {
        let rotation = SnapConfig::rotation();
        assert!(!rotation.enabled);
        assert_eq!(rotation.increment, 15.0);
        assert!(rotation.to_absolute);

        let translation = SnapConfig::translation();
        assert!(!translation.enabled);
        assert_eq!(translation.increment, 1.0);
        assert!(translation.to_absolute);
    }

    #[test]
    fn test_quantize_rounds_to_grid() {
        assert_eq!(quantize(44.0, 15.0), 45.0);
        assert_eq!(quantize(37.0, 15.0), 30.0);
        assert_eq!(quantize(-8.0, 15.0), -15.0);
        assert_relative_eq!(quantize(1.26, 0.25), 1.25);
    }

    #[test]
    fn test_invalid_increment_passes_through() {
        assert_eq!(quantize(44.0, 0.0), 44.0);
        assert_eq!(quantize(44.0, -15.0), 44.0);
        assert_eq!(quantize(44.0, f32::NAN), 44.0);
        assert_eq!(quantize(44.0, f32::INFINITY), 44.0);
        assert!(!config(0.0, true).is_active());
        assert!(!config(-15.0, true).is_active());
    }

    #[test]
    fn test_absolute_accumulator() {
        let mut snap = SnapAccumulator::new(0.0);
        let cfg = config(15.0, true);
        assert_eq!(snap.apply(10.0, &cfg), (15.0, true));
        assert_eq!(snap.apply(44.0, &cfg), (45.0, true));
        assert_eq!(snap.apply(52.0, &cfg), (45.0, true));
    }

    #[test]
    fn test_relative_accumulator_quantizes_each_step() {
        let mut snap = SnapAccumulator::new(0.0);
        let cfg = config(15.0, false);
        // +10 rounds to +15, +34 rounds to +30
        assert_eq!(snap.apply(10.0, &cfg), (15.0, true));
        assert_eq!(snap.apply(44.0, &cfg), (45.0, true));
        // +6 is below half an increment and commits nothing
        assert_eq!(snap.apply(50.0, &cfg), (45.0, true));
        assert_eq!(snap.apply(56.0, &cfg), (45.0, true));
        assert_eq!(snap.committed(), 45.0);
    }

    #[test]
    fn test_absolute_and_relative_diverge() {
        let samples = [6.0, 12.0, 18.0, 24.0];
        let mut absolute = SnapAccumulator::new(0.0);
        let mut relative = SnapAccumulator::new(0.0);
        let last_absolute = samples
            .iter()
            .map(|raw| absolute.apply(*raw, &config(15.0, true)).0)
            .last()
            .unwrap();
        let last_relative = samples
            .iter()
            .map(|raw| relative.apply(*raw, &config(15.0, false)).0)
            .last()
            .unwrap();
        assert_eq!(last_absolute, 30.0);
        assert_eq!(last_relative, 0.0);
    }

    #[test]
    fn test_scale_quantizes_around_identity() {
        let mut snap = SnapAccumulator::new(1.0);
        let (value, active) = snap.apply(1.37, &config(0.25, true));
        assert!(active);
        assert_relative_eq!(value, 1.25);
    }

    #[test]
    fn test_disabled_passes_raw_and_resyncs() {
        let mut snap = SnapAccumulator::new(0.0);
        let disabled = SnapConfig {
            enabled: false,
            ..config(15.0, false)
        };
        assert_eq!(snap.apply(7.0, &disabled), (7.0, false));
        assert_eq!(snap.committed(), 7.0);
        // Re-enabling continues from the raw value
        assert_eq!(snap.apply(29.0, &config(15.0, false)), (22.0, true));
    }
}
