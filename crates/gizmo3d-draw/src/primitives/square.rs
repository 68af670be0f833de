//! Square handle primitive

use glam::Vec2;

use crate::canvas::{Canvas, Color, StrokeStyle};

/// Filled square with a darker outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareHandlePrimitive {
    /// Side length used when no size is given (pixels)
    pub default_size: f32,
    pub line_width: f32,
}

impl Default for SquareHandlePrimitive {
    fn default() -> Self {
        Self {
            default_size: 12.0,
            line_width: 1.0,
        }
    }
}

impl SquareHandlePrimitive {
    /// Draw a square centered on `center`, of side `size` or `default_size`.
    pub fn draw(&self, ctx: Option<&mut dyn Canvas>, center: Vec2, color: Color, size: Option<f32>) {
        let Some(ctx) = ctx else { return };
        let size = size.unwrap_or(self.default_size);
        if !center.is_finite() || !size.is_finite() || size <= 0.0 {
            return;
        }
        let half = size * 0.5;
        let corners = [
            center + Vec2::new(-half, -half),
            center + Vec2::new(half, -half),
            center + Vec2::new(half, half),
            center + Vec2::new(-half, half),
        ];
        let outline = [color[0] * 0.5, color[1] * 0.5, color[2] * 0.5, color[3]];
        ctx.fill_polygon(&corners, color);
        ctx.stroke_polyline(&corners, true, &StrokeStyle::new(self.line_width, outline));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};

    const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];

    #[test]
    fn test_defaults() {
        let square = SquareHandlePrimitive::default();
        assert_eq!(square.default_size, 12.0);
        assert_eq!(square.line_width, 1.0);
    }

    #[test]
    fn test_default_and_custom_size() {
        let square = SquareHandlePrimitive::default();
        let mut list = DisplayList::new();
        square.draw(Some(&mut list), Vec2::new(100.0, 100.0), YELLOW, None);
        square.draw(Some(&mut list), Vec2::new(150.0, 150.0), YELLOW, Some(20.0));

        let DrawCommand::Fill { points, .. } = &list.commands()[0] else {
            panic!("expected fill");
        };
        assert_eq!(points[0], Vec2::new(94.0, 94.0));
        let DrawCommand::Fill { points, .. } = &list.commands()[2] else {
            panic!("expected fill");
        };
        assert_eq!(points[2], Vec2::new(160.0, 160.0));
    }

    #[test]
    fn test_invalid_size_is_noop() {
        let mut list = DisplayList::new();
        SquareHandlePrimitive::default().draw(Some(&mut list), Vec2::ZERO, YELLOW, Some(-1.0));
        SquareHandlePrimitive::default().draw(None, Vec2::ZERO, YELLOW, None);
        assert!(list.is_empty());
    }
}
