//! Road envelopes: a rounded rectangle thickened around one graph edge.

use crate::math::{angle, translate};
use crate::point::{Point, Segment};
use crate::polygon::Polygon;
use smallvec::SmallVec;
use std::f64::consts::{FRAC_PI_2, PI};

/// A polygon generated around a skeleton segment.
#[derive(Debug, Clone)]
pub struct Envelope {
    skeleton: Segment,
    polygon: Polygon,
}

impl Envelope {
    /// Build the envelope of `skeleton` for a road `width` wide.
    ///
    /// Each end gets a half circle sampled with `roundness + 1` points;
    /// `roundness` 0 behaves like 1 (a flat cap).
    pub fn new(skeleton: Segment, width: f64, roundness: u32) -> Self {
        let polygon = Polygon::new(generate_outline(&skeleton, width, roundness).into_vec());
        Self { skeleton, polygon }
    }

    pub fn skeleton(&self) -> &Segment {
        &self.skeleton
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn into_polygon(self) -> Polygon {
        self.polygon
    }
}

fn generate_outline(skeleton: &Segment, width: f64, roundness: u32) -> SmallVec<[Point; 24]> {
    let Segment { start, end } = *skeleton;
    let radius = width / 2.0;
    let alpha = angle(start - end);
    let steps = roundness.max(1);
    let step = PI / steps as f64;
    let from = alpha - FRAC_PI_2;

    let mut points = SmallVec::with_capacity(2 * (steps as usize + 1));
    for i in 0..=steps {
        points.push(translate(start, from + step * i as f64, radius));
    }
    for i in 0..=steps {
        points.push(translate(end, PI + from + step * i as f64, radius));
    }
    points
}
