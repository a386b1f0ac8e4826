//! Per-shape style records.

use crate::paint::{Color, LineStyle, SegmentStyle};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointStyle {
    pub color: Color,
    /// Diameter of the vertex dot.
    pub size: f64,
    /// Yellow ring around the dot.
    pub is_highlight: bool,
    /// Small orange ring inside the dot.
    pub is_fill_selected: bool,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: "black",
            size: 18.0,
            is_highlight: false,
            is_fill_selected: false,
        }
    }
}

impl PointStyle {
    pub const SELECTED_RING: LineStyle = LineStyle::solid("orange", 3.0);
    pub const HIGHLIGHT_RING: LineStyle = LineStyle::solid("yellow", 2.0);

    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    #[must_use]
    pub fn highlighted(mut self) -> Self {
        self.is_highlight = true;
        self
    }

    #[must_use]
    pub fn selected(mut self) -> Self {
        self.is_fill_selected = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolygonStyle {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            fill: "rgba(0, 0, 255, 0.3)",
            stroke: "blue",
            line_width: 2.0,
        }
    }
}

impl PolygonStyle {
    pub fn outline(&self) -> LineStyle {
        LineStyle::solid(self.stroke, self.line_width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GraphStyle {
    pub edge: SegmentStyle,
    pub vertex: PointStyle,
}

/// How the road network is painted: grey envelopes, white dashed lane
/// markings along each skeleton, white outer borders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoadStyle {
    pub envelope: PolygonStyle,
    pub centre_line: LineStyle,
    pub border: LineStyle,
}

impl Default for RoadStyle {
    fn default() -> Self {
        Self {
            envelope: PolygonStyle {
                fill: "#BBB",
                stroke: "#BBB",
                line_width: 15.0,
            },
            centre_line: LineStyle::dashed("white", 4.0, &[10.0, 10.0]),
            border: LineStyle::solid("white", 4.0),
        }
    }
}
