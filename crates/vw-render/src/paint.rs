//! Render-context abstraction.
//!
//! Shapes never talk to a canvas directly. They describe themselves through
//! a `Painter`: the browser bridge implements it on top of Canvas2D, and
//! `DisplayList` implements it by recording every call, which is what the
//! tests and any headless consumer use.
//!
//! All coordinates handed to a painter are world coordinates. The painter
//! maps them to the screen with the last `ViewTransform` it was given.

use serde::Serialize;
use vw_core::Point;

/// CSS colour string.
pub type Color = &'static str;

/// Stroke parameters for lines and rings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    /// Dash pattern in alternating on/off lengths. Empty means solid.
    pub dash: &'static [f64],
}

/// Graph edges are drawn with a plain line style.
pub type SegmentStyle = LineStyle;

impl LineStyle {
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: &[],
        }
    }

    pub const fn dashed(color: Color, width: f64, dash: &'static [f64]) -> Self {
        Self { color, width, dash }
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid("#323232", 2.0)
    }
}

// ─── View transform ──────────────────────────────────────────────────────

/// World → screen mapping: translate by `center`, scale by `1 / zoom`,
/// translate by `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewTransform {
    pub center: Point,
    pub zoom: f64,
    pub offset: Point,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            zoom: 1.0,
            offset: Point::ORIGIN,
        }
    }
}

impl ViewTransform {
    pub fn scale(&self) -> f64 {
        1.0 / self.zoom
    }

    /// Inverse of the drawing transform: where a screen pixel lands in the
    /// world.
    pub fn to_world(&self, screen: Point) -> Point {
        (screen - self.center) * self.zoom - self.offset
    }
}

// ─── Painter ─────────────────────────────────────────────────────────────

pub trait Painter {
    /// Wipe the whole surface. Resets any view transform.
    fn clear(&mut self, width: f64, height: f64);

    /// Transform applied to every following call until the next `clear`.
    fn set_view(&mut self, view: &ViewTransform);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    fn stroke_circle(&mut self, center: Point, radius: f64, line: &LineStyle);

    fn stroke_line(&mut self, from: Point, to: Point, line: &LineStyle);

    /// Fill the closed outline through `points`, then stroke it.
    fn fill_polygon(&mut self, points: &[Point], fill: Color, stroke: &LineStyle);
}

// ─── Display list ────────────────────────────────────────────────────────

/// One recorded painter call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    Clear {
        width: f64,
        height: f64,
    },
    SetView {
        view: ViewTransform,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        line: LineStyle,
    },
    StrokeLine {
        from: Point,
        to: Point,
        line: LineStyle,
    },
    FillPolygon {
        points: Vec<Point>,
        fill: Color,
        stroke: LineStyle,
    },
}

/// A `Painter` that records calls instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Every recorded line as `(from, to, style)`.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, &LineStyle)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokeLine { from, to, line } => Some((*from, *to, line)),
            _ => None,
        })
    }

    /// Every recorded ring (stroked circle) as `(center, radius, style)`.
    pub fn rings(&self) -> impl Iterator<Item = (Point, f64, &LineStyle)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokeCircle {
                center,
                radius,
                line,
            } => Some((*center, *radius, line)),
            _ => None,
        })
    }
}

impl Painter for DisplayList {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn set_view(&mut self, view: &ViewTransform) {
        self.ops.push(DrawOp::SetView { view: *view });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, line: &LineStyle) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            line: *line,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, line: &LineStyle) {
        self.ops.push(DrawOp::StrokeLine {
            from,
            to,
            line: *line,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color, stroke: &LineStyle) {
        self.ops.push(DrawOp::FillPolygon {
            points: points.to_vec(),
            fill,
            stroke: *stroke,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn screen_center_maps_to_negated_offset() {
        let view = ViewTransform {
            center: Point::new(400.0, 300.0),
            zoom: 2.0,
            offset: Point::new(-400.0, -300.0),
        };
        assert_eq!(view.to_world(Point::new(400.0, 300.0)), Point::new(400.0, 300.0));
        // One screen pixel covers `zoom` world units.
        assert_eq!(view.to_world(Point::new(500.0, 250.0)), Point::new(600.0, 200.0));
    }

    #[test]
    fn display_list_records_in_order() {
        let mut list = DisplayList::new();
        list.clear(10.0, 10.0);
        list.stroke_line(Point::ORIGIN, Point::new(1.0, 1.0), &LineStyle::default());
        list.fill_circle(Point::ORIGIN, 2.0, "black");

        assert_eq!(list.len(), 3);
        assert_eq!(list.lines().count(), 1);
        assert!(matches!(list.ops()[0], DrawOp::Clear { .. }));
        assert!(!list.is_empty());
    }

    #[test]
    fn default_line_is_solid_dark_grey() {
        let line = LineStyle::default();
        assert_eq!(line.color, "#323232");
        assert_eq!(line.width, 2.0);
        assert!(!line.is_dashed());
    }
}
