//! Planar handle primitive

use glam::Vec2;

use crate::canvas::{Canvas, Color, StrokeStyle, all_finite, with_alpha};

/// Translucent quad with an outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePrimitive {
    pub inactive_alpha: f32,
    pub active_alpha: f32,
    pub inactive_line_width: f32,
    pub active_line_width: f32,
}

impl Default for PlanePrimitive {
    fn default() -> Self {
        Self {
            inactive_alpha: 0.3,
            active_alpha: 0.5,
            inactive_line_width: 2.0,
            active_line_width: 3.0,
        }
    }
}

impl PlanePrimitive {
    /// Fill and outline the quad given by four `corners`.
    pub fn draw(&self, ctx: Option<&mut dyn Canvas>, corners: &[Vec2], color: Color, active: bool) {
        let Some(ctx) = ctx else { return };
        if corners.len() != 4 || !all_finite(corners) {
            return;
        }
        let (alpha, line_width) = if active {
            (self.active_alpha, self.active_line_width)
        } else {
            (self.inactive_alpha, self.inactive_line_width)
        };
        ctx.fill_polygon(corners, with_alpha(color, alpha));
        ctx.stroke_polyline(corners, true, &StrokeStyle::new(line_width, color));
    }
}
