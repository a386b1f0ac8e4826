//! `Draw` implementations for every drawable model type.

use crate::paint::{LineStyle, Painter, SegmentStyle};
use crate::style::{GraphStyle, PointStyle, PolygonStyle, RoadStyle};
use vw_core::{Envelope, Graph, Point, Polygon, RoadSystem, Segment};

/// Something that can describe itself to a `Painter`.
pub trait Draw {
    type Style: Default;

    fn draw(&self, painter: &mut dyn Painter, style: &Self::Style);

    /// Draw with the default style.
    fn draw_default(&self, painter: &mut dyn Painter) {
        self.draw(painter, &Self::Style::default());
    }
}

impl Draw for Point {
    type Style = PointStyle;

    fn draw(&self, painter: &mut dyn Painter, style: &PointStyle) {
        let radius = style.radius();
        painter.fill_circle(*self, radius, style.color);
        if style.is_fill_selected {
            painter.stroke_circle(*self, radius * 0.3, &PointStyle::SELECTED_RING);
        }
        if style.is_highlight {
            painter.stroke_circle(*self, radius, &PointStyle::HIGHLIGHT_RING);
        }
    }
}

impl Draw for Segment {
    type Style = SegmentStyle;

    fn draw(&self, painter: &mut dyn Painter, style: &LineStyle) {
        painter.stroke_line(self.start, self.end, style);
    }
}

impl Draw for Polygon {
    type Style = PolygonStyle;

    fn draw(&self, painter: &mut dyn Painter, style: &PolygonStyle) {
        if self.points().is_empty() {
            return;
        }
        painter.fill_polygon(self.points(), style.fill, &style.outline());
    }
}

impl Draw for Envelope {
    type Style = PolygonStyle;

    fn draw(&self, painter: &mut dyn Painter, style: &PolygonStyle) {
        self.polygon().draw(painter, style);
    }
}

impl Draw for Graph {
    type Style = GraphStyle;

    /// Edges first so vertex dots sit on top of them.
    fn draw(&self, painter: &mut dyn Painter, style: &GraphStyle) {
        for (_, edge) in self.edges() {
            edge.draw(painter, &style.edge);
        }
        for (_, vertex) in self.vertices() {
            vertex.draw(painter, &style.vertex);
        }
    }
}

impl Draw for RoadSystem {
    type Style = RoadStyle;

    fn draw(&self, painter: &mut dyn Painter, style: &RoadStyle) {
        for envelope in self.envelopes() {
            envelope.draw(painter, &style.envelope);
        }
        for envelope in self.envelopes() {
            envelope.skeleton().draw(painter, &style.centre_line);
        }
        for border in self.borders() {
            border.draw(painter, &style.border);
        }
        log::trace!(
            "drew {} roads, {} border segments",
            self.envelopes().len(),
            self.borders().len()
        );
    }
}
