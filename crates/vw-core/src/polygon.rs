//! Polygons and the segment-level union used to outline the road network.
//!
//! The union works on boundary segments rather than on areas:
//!
//! 1. **Break**: every pair of polygons has its boundaries split at their
//!    proper crossings, so no boundary segment crosses another polygon's
//!    boundary in its interior any more.
//! 2. **Classify**: a segment of polygon `i` survives if its midpoint is not
//!    inside any other polygon `j`, using an even-odd ray cast.
//!
//! Both phases are quadratic in the number of segments. That is fine for
//! editor-sized graphs (tens of edges).

use crate::math::segment_intersection;
use crate::point::{Point, Segment};

/// Distance between a polygon's bounding box and the start of its
/// inside/outside test ray.
const RAY_MARGIN: f64 = 1000.0;

/// A closed polygon.
///
/// `points` is the outline as generated. `segments` starts out as the closed
/// boundary of those points and is split in place by `break_pair`, so after
/// a union it may hold more segments than there are points.
#[derive(Debug, Clone)]
pub struct Polygon {
    points: Vec<Point>,
    segments: Vec<Segment>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        let n = points.len();
        let segments = (0..n)
            .map(|i| Segment::new(points[i], points[(i + 1) % n]))
            .collect();
        Self { points, segments }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty polygon.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.segments.first()?;
        let init = (first.start, first.start);
        Some(
            self.segments
                .iter()
                .flat_map(|s| [s.start, s.end])
                .fold(init, |(lo, hi), p| {
                    (
                        Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                        Point::new(hi.x.max(p.x), hi.y.max(p.y)),
                    )
                }),
        )
    }

    /// Even-odd test: cast a ray from outside the bounding box to `point`
    /// and count boundary crossings.
    pub fn contains_point(&self, point: Point) -> bool {
        let Some((min, _)) = self.bounds() else {
            return false;
        };
        let outer = Point::new(min.x - RAY_MARGIN, min.y - RAY_MARGIN);

        let crossings = self
            .segments
            .iter()
            .filter(|s| segment_intersection(outer, point, s.start, s.end).is_some())
            .count();
        crossings % 2 == 1
    }

    /// A segment is inside when its midpoint is.
    pub fn contains_segment(&self, segment: &Segment) -> bool {
        self.contains_point(segment.midpoint())
    }

    /// Split both boundaries at every proper crossing between them.
    ///
    /// Segments are visited in index order, and the remainder of a split
    /// segment is inserted right after it, so it is visited (and possibly
    /// split again) later in the same pass. Touches at an endpoint
    /// of either segment are not crossings.
    pub fn break_pair(a: &mut Polygon, b: &mut Polygon) {
        let segs_a = &mut a.segments;
        let segs_b = &mut b.segments;

        let mut i = 0;
        while i < segs_a.len() {
            let mut j = 0;
            while j < segs_b.len() {
                let (sa, sb) = (segs_a[i], segs_b[j]);
                if let Some(hit) = segment_intersection(sa.start, sa.end, sb.start, sb.end)
                    && !hit.is_touch()
                {
                    let point = hit.point;
                    segs_a[i].end = point;
                    segs_a.insert(i + 1, Segment::new(point, sa.end));
                    segs_b[j].end = point;
                    segs_b.insert(j + 1, Segment::new(point, sb.end));
                }
                j += 1;
            }
            i += 1;
        }
    }

    /// `break_pair` over every unordered pair, in `(i, j)` with `i < j`
    /// order.
    pub fn multi_break(polygons: &mut [Polygon]) {
        for i in 0..polygons.len() {
            let (head, tail) = polygons.split_at_mut(i + 1);
            let current = &mut head[i];
            for other in tail.iter_mut() {
                Polygon::break_pair(current, other);
            }
        }
    }

    /// Outline of the union of `polygons`: every boundary segment that is
    /// not inside some other polygon.
    ///
    /// The polygons are broken in place.
    pub fn union(polygons: &mut [Polygon]) -> Vec<Segment> {
        Polygon::multi_break(polygons);

        let mut kept = Vec::new();
        for (i, polygon) in polygons.iter().enumerate() {
            for segment in &polygon.segments {
                let covered = polygons
                    .iter()
                    .enumerate()
                    .any(|(j, other)| i != j && other.contains_segment(segment));
                if !covered {
                    kept.push(*segment);
                }
            }
        }

        log::trace!(
            "union of {} polygons kept {} border segments",
            polygons.len(),
            kept.len()
        );
        kept
    }
}
