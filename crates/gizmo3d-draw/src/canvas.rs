//! 2D canvas abstraction

use glam::Vec2;

/// RGBA color, components in `[0, 1]`
pub type Color = [f32; 4];

/// Replace the alpha component of `color`.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    [color[0], color[1], color[2], alpha]
}

/// Line end style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Line corner style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokeStyle {
    /// Solid stroke with butt caps and miter joins.
    pub fn new(width: f32, color: Color) -> Self {
        Self {
            color,
            width,
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }

    /// Set the line cap.
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set the line join.
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

/// Drawing surface for gizmo primitives
///
/// Coordinates are pixels, origin top-left, y down.
pub trait Canvas {
    /// Stroke a polyline, closing it back to the first point if `closed`.
    fn stroke_polyline(&mut self, points: &[Vec2], closed: bool, style: &StrokeStyle);

    /// Fill a simple polygon.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `Canvas::stroke_polyline`
    Stroke {
        points: Vec<Vec2>,
        closed: bool,
        style: StrokeStyle,
    },
    /// `Canvas::fill_polygon`
    Fill { points: Vec<Vec2>, color: Color },
}

/// Canvas that records every call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of stroke commands.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Stroke { .. }))
            .count()
    }

    /// Number of fill commands.
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Fill { .. }))
            .count()
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DisplayList {
    fn stroke_polyline(&mut self, points: &[Vec2], closed: bool, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Stroke {
            points: points.to_vec(),
            closed,
            style: *style,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Fill {
            points: points.to_vec(),
            color,
        });
    }
}

/// Whether every point is finite.
pub(crate) fn all_finite(points: &[Vec2]) -> bool {
    points.iter().all(|point| point.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_list_records_in_order() {
        let mut list = DisplayList::new();
        let style = StrokeStyle::new(2.0, [1.0, 0.0, 0.0, 1.0]).with_cap(LineCap::Round);
        list.stroke_polyline(&[Vec2::ZERO, Vec2::X], false, &style);
        list.fill_polygon(&[Vec2::ZERO, Vec2::X, Vec2::Y], [0.0, 1.0, 0.0, 0.5]);

        assert_eq!(list.len(), 2);
        assert_eq!(list.stroke_count(), 1);
        assert_eq!(list.fill_count(), 1);
        assert!(matches!(
            &list.commands()[0],
            DrawCommand::Stroke { style, .. } if style.cap == LineCap::Round
        ));

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha([0.1, 0.2, 0.3, 1.0], 0.5), [0.1, 0.2, 0.3, 0.5]);
    }
}
