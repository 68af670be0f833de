//! Circle, arc and wedge primitive
//!
//! Rings arrive as closed polylines that were sampled at evenly spaced
//! parameter angles starting at angle zero. Arcs select a contiguous run of
//! those samples by parameter angle. Wedges are filled pie slices defined in
//! screen angles (radians, y down).

use std::f32::consts::TAU;

use glam::Vec2;

use crate::canvas::{Canvas, Color, LineCap, LineJoin, StrokeStyle, all_finite, with_alpha};

/// Segments per full turn used to tessellate wedges
const WEDGE_SEGMENTS_PER_TURN: f32 = 64.0;

/// Ring and sweep drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    /// Alpha multiplier for filled wedges
    pub fill_alpha: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for CirclePrimitive {
    fn default() -> Self {
        Self {
            fill_alpha: 0.5,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
        }
    }
}

/// Parameters for [`CirclePrimitive::draw`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStyle {
    pub color: Color,
    pub line_width: f32,
    /// Fill the wedge from `arc_start` to `arc_end`
    pub filled: bool,
    /// Wedge start, screen angle in radians
    pub arc_start: f32,
    /// Wedge end, screen angle in radians
    pub arc_end: f32,
    /// Stroke only the arc around `arc_center` instead of the whole ring
    pub partial_arc: bool,
    /// Arc center, ring parameter angle in radians
    pub arc_center: f32,
    /// Arc angular extent in radians
    pub arc_range: f32,
}

impl CircleStyle {
    /// Full outlined ring without a wedge.
    pub fn outline(color: Color, line_width: f32) -> Self {
        Self {
            color,
            line_width,
            filled: false,
            arc_start: 0.0,
            arc_end: 0.0,
            partial_arc: false,
            arc_center: 0.0,
            arc_range: TAU,
        }
    }
}

impl CirclePrimitive {
    fn stroke_style(&self, color: Color, line_width: f32) -> StrokeStyle {
        StrokeStyle::new(line_width, color)
            .with_cap(self.line_cap)
            .with_join(self.line_join)
    }

    /// Stroke the full ring.
    pub fn draw_circle(
        &self,
        ctx: Option<&mut dyn Canvas>,
        points: &[Vec2],
        color: Color,
        line_width: f32,
    ) {
        let Some(ctx) = ctx else { return };
        if points.len() < 3 || !all_finite(points) {
            return;
        }
        ctx.stroke_polyline(points, true, &self.stroke_style(color, line_width));
    }

    /// Stroke the part of the ring within `arc_range / 2` of `arc_center`.
    pub fn draw_arc(
        &self,
        ctx: Option<&mut dyn Canvas>,
        points: &[Vec2],
        arc_center: f32,
        arc_range: f32,
        color: Color,
        line_width: f32,
    ) {
        if arc_range >= TAU {
            self.draw_circle(ctx, points, color, line_width);
            return;
        }
        let Some(ctx) = ctx else { return };
        if points.len() < 3 || !all_finite(points) || !arc_center.is_finite() || arc_range.is_nan() || arc_range <= 0.0 {
            return;
        }
        let arc = arc_points(points, arc_center, arc_range);
        if arc.len() >= 2 {
            ctx.stroke_polyline(&arc, false, &self.stroke_style(color, line_width));
        }
    }

    /// Fill the pie slice of `radius` around `center` from `arc_start` to
    /// `arc_end`. The fill uses `fill_alpha` times the color's alpha.
    pub fn draw_filled_wedge(
        &self,
        ctx: Option<&mut dyn Canvas>,
        center: Vec2,
        radius: f32,
        arc_start: f32,
        arc_end: f32,
        color: Color,
    ) {
        let Some(ctx) = ctx else { return };
        let sweep = arc_end - arc_start;
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 || !sweep.is_finite() || sweep.abs() <= f32::EPSILON {
            return;
        }
        // A wedge never covers more than one full turn
        let sweep = sweep.clamp(-TAU, TAU);
        let segments = ((sweep.abs() / TAU * WEDGE_SEGMENTS_PER_TURN).ceil() as usize).max(2);

        let mut polygon = Vec::with_capacity(segments + 2);
        polygon.push(center);
        polygon.extend((0..=segments).map(|i| {
            let angle = arc_start + sweep * i as f32 / segments as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        }));
        ctx.fill_polygon(&polygon, with_alpha(color, color[3] * self.fill_alpha));
    }

    /// Combined draw: optional wedge fill, then the full ring or an arc.
    pub fn draw(&self, ctx: Option<&mut dyn Canvas>, points: &[Vec2], center: Vec2, style: CircleStyle) {
        let Some(ctx) = ctx else { return };
        if style.filled
            && let Some(radius) = mean_radius(points, center)
        {
            self.draw_filled_wedge(Some(&mut *ctx), center, radius, style.arc_start, style.arc_end, style.color);
        }
        if style.partial_arc {
            self.draw_arc(Some(ctx), points, style.arc_center, style.arc_range, style.color, style.line_width);
        } else {
            self.draw_circle(Some(ctx), points, style.color, style.line_width);
        }
    }
}

fn arc_points(points: &[Vec2], arc_center: f32, arc_range: f32) -> Vec<Vec2> {
    let count = points.len();
    let step = TAU / count as f32;
    // Samples sitting exactly on an arc end belong to the arc
    let first = ((arc_center - arc_range * 0.5) / step - 1e-4).ceil() as i64;
    let last = ((arc_center + arc_range * 0.5) / step + 1e-4).floor() as i64;
    (first..=last)
        .map(|i| points[i.rem_euclid(count as i64) as usize])
        .collect()
}

fn mean_radius(points: &[Vec2], center: Vec2) -> Option<f32> {
    if points.is_empty() {
        return None;
    }
    let radius = points.iter().map(|p| p.distance(center)).sum::<f32>() / points.len() as f32;
    (radius.is_finite() && radius > 0.0).then_some(radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    const BLUE: Color = [0.0, 0.0, 1.0, 1.0];

    fn ring(n: usize, radius: f32) -> Vec<Vec2> {
        (0..n)
            .map(|i| {
                let a = i as f32 / n as f32 * TAU;
                Vec2::new(100.0, 100.0) + Vec2::new(a.cos(), a.sin()) * radius
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let circle = CirclePrimitive::default();
        assert_eq!(circle.fill_alpha, 0.5);
        assert_eq!(circle.line_cap, LineCap::Round);
        assert_eq!(circle.line_join, LineJoin::Round);
    }

    #[test]
    fn test_draw_circle_is_closed() {
        let mut list = DisplayList::new();
        CirclePrimitive::default().draw_circle(Some(&mut list), &ring(4, 100.0), BLUE, 3.0);
        assert!(matches!(&list.commands()[0], DrawCommand::Stroke { closed: true, points, .. } if points.len() == 4));
    }

    #[test]
    fn test_draw_arc_selects_samples() {
        let points = ring(8, 50.0);
        let mut list = DisplayList::new();
        // Eighth-turn samples: centered on PI/2 with range PI covers samples 0..=4
        CirclePrimitive::default().draw_arc(Some(&mut list), &points, FRAC_PI_2, PI, BLUE, 2.0);
        let DrawCommand::Stroke { points: arc, closed, .. } = &list.commands()[0] else {
            panic!("expected arc stroke");
        };
        assert!(!closed);
        assert_eq!(arc.as_slice(), &points[0..=4]);
    }

    #[test]
    fn test_draw_arc_wraps_past_zero() {
        let points = ring(8, 50.0);
        let mut list = DisplayList::new();
        CirclePrimitive::default().draw_arc(Some(&mut list), &points, 0.0, FRAC_PI_2, BLUE, 2.0);
        let DrawCommand::Stroke { points: arc, .. } = &list.commands()[0] else {
            panic!("expected arc stroke");
        };
        assert_eq!(arc.as_slice(), &[points[7], points[0], points[1]]);
    }

    #[test]
    fn test_filled_wedge() {
        let mut list = DisplayList::new();
        CirclePrimitive::default().draw_filled_wedge(Some(&mut list), Vec2::new(100.0, 100.0), 80.0, 0.0, FRAC_PI_2, BLUE);
        let DrawCommand::Fill { points, color } = &list.commands()[0] else {
            panic!("expected wedge fill");
        };
        assert_eq!(color[3], 0.5);
        assert_eq!(points[0], Vec2::new(100.0, 100.0));
        assert_relative_eq!(points[1].x, 180.0, epsilon = 1e-4);
        let tip = points[points.len() - 1];
        assert_relative_eq!(tip.x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(tip.y, 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_combined_draw() {
        let points = ring(16, 40.0);
        let mut list = DisplayList::new();
        let style = CircleStyle {
            filled: true,
            arc_start: 0.0,
            arc_end: PI,
            ..CircleStyle::outline(BLUE, 3.0)
        };
        CirclePrimitive::default().draw(Some(&mut list), &points, Vec2::new(100.0, 100.0), style);
        assert_eq!(list.fill_count(), 1);
        assert_eq!(list.stroke_count(), 1);
    }

    #[test]
    fn test_degenerate_inputs_are_noops() {
        let circle = CirclePrimitive::default();
        circle.draw_circle(None, &ring(8, 10.0), BLUE, 1.0);

        let mut list = DisplayList::new();
        circle.draw_circle(Some(&mut list), &ring(2, 10.0), BLUE, 1.0);
        circle.draw_arc(Some(&mut list), &ring(8, 10.0), 0.0, 0.0, BLUE, 1.0);
        circle.draw_filled_wedge(Some(&mut list), Vec2::ZERO, 10.0, 1.0, 1.0, BLUE);
        circle.draw_filled_wedge(Some(&mut list), Vec2::ZERO, 0.0, 0.0, 1.0, BLUE);
        assert!(list.is_empty());
    }
}
