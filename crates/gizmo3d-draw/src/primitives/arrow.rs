//! Arrow primitive

use glam::{Mat2, Vec2};

use crate::canvas::{Canvas, Color, LineCap, StrokeStyle, all_finite};

/// Straight arrow with an open V head
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPrimitive {
    /// Length of each head stroke (pixels)
    pub head_length: f32,
    /// Angle between the shaft and each head stroke (radians)
    pub head_angle: f32,
    pub line_cap: LineCap,
}

impl Default for ArrowPrimitive {
    fn default() -> Self {
        Self {
            head_length: 15.0,
            head_angle: std::f32::consts::FRAC_PI_6,
            line_cap: LineCap::Round,
        }
    }
}

impl ArrowPrimitive {
    /// Draw an arrow from `start` to `end` with its head at `end`.
    pub fn draw(
        &self,
        ctx: Option<&mut dyn Canvas>,
        start: Vec2,
        end: Vec2,
        color: Color,
        line_width: f32,
    ) {
        let Some(ctx) = ctx else { return };
        let Some(dir) = shaft_direction(start, end) else {
            return;
        };
        let style = StrokeStyle::new(line_width, color).with_cap(self.line_cap);
        ctx.stroke_polyline(&[start, end], false, &style);

        let back = -dir * self.head_length;
        let left = end + Mat2::from_angle(self.head_angle) * back;
        let right = end + Mat2::from_angle(-self.head_angle) * back;
        ctx.stroke_polyline(&[left, end, right], false, &style);
    }

    /// Draw a shaft from `start` to `end` capped with a filled square of side
    /// `square_size` centered on `end`.
    pub fn draw_with_square(
        &self,
        ctx: Option<&mut dyn Canvas>,
        start: Vec2,
        end: Vec2,
        color: Color,
        line_width: f32,
        square_size: f32,
    ) {
        let Some(ctx) = ctx else { return };
        if shaft_direction(start, end).is_none() || !square_size.is_finite() || square_size <= 0.0 {
            return;
        }
        let style = StrokeStyle::new(line_width, color).with_cap(self.line_cap);
        ctx.stroke_polyline(&[start, end], false, &style);

        let half = Vec2::splat(square_size * 0.5);
        let corners = [
            end - half,
            end + Vec2::new(half.x, -half.y),
            end + half,
            end + Vec2::new(-half.x, half.y),
        ];
        ctx.fill_polygon(&corners, color);
    }
}

fn shaft_direction(start: Vec2, end: Vec2) -> Option<Vec2> {
    if !all_finite(&[start, end]) {
        return None;
    }
    let dir = (end - start).normalize_or_zero();
    (dir != Vec2::ZERO).then_some(dir)
}
