//! Stateless geometry helpers.
//!
//! Everything here is a pure function over `Point`s. The intersection test
//! uses exact float comparisons: an intersection at offset exactly 0 or 1 on
//! either segment is an endpoint touch, not a crossing.

use crate::point::Point;

/// Result of a successful segment–segment intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub point: Point,
    /// Parametric position along the first segment (`0` = `a`, `1` = `b`).
    pub offset: f64,
    /// Parametric position along the second segment (`0` = `c`, `1` = `d`).
    pub other_offset: f64,
}

impl Intersection {
    /// The crossing lies exactly on an endpoint of either segment.
    pub fn is_touch(&self) -> bool {
        let at_end = |t: f64| t == 0.0 || t == 1.0;
        at_end(self.offset) || at_end(self.other_offset)
    }
}

pub fn add(p1: Point, p2: Point) -> Point {
    p1 + p2
}

pub fn subtract(p1: Point, p2: Point) -> Point {
    p1 - p2
}

pub fn scale(point: Point, k: f64) -> Point {
    point * k
}

/// Direction of `point` seen as a vector from the origin, in `(-π, π]`.
pub fn angle(point: Point) -> f64 {
    point.y.atan2(point.x)
}

/// Move `point` by `offset` along the direction `angle`.
pub fn translate(point: Point, angle: f64, offset: f64) -> Point {
    Point::new(
        point.x + angle.cos() * offset,
        point.y + angle.sin() * offset,
    )
}

pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

pub fn average(p1: Point, p2: Point) -> Point {
    Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Find the candidate closest to `target`, as long as it is strictly closer
/// than `threshold`.
///
/// Candidates are `(key, point)` pairs so callers can get back whatever
/// handle they index by. Ties go to the first candidate in iteration order.
pub fn nearest_vertex<K>(
    target: Point,
    candidates: impl IntoIterator<Item = (K, Point)>,
    threshold: f64,
) -> Option<(K, Point)> {
    let mut best: Option<(K, Point)> = None;
    let mut min_distance = f64::INFINITY;

    for (key, candidate) in candidates {
        let d = distance(candidate, target);
        if d < min_distance && d < threshold {
            min_distance = d;
            best = Some((key, candidate));
        }
    }

    best
}

/// `nearest_vertex` over bare points.
pub fn nearest_point(target: Point, candidates: &[Point], threshold: f64) -> Option<Point> {
    nearest_vertex(target, candidates.iter().map(|p| ((), *p)), threshold).map(|(_, p)| p)
}

/// Intersect segment `a–b` with segment `c–d`.
///
/// Returns `None` for parallel or collinear segments (zero determinant) and
/// when the crossing falls outside either segment.
pub fn segment_intersection(a: Point, b: Point, c: Point, d: Point) -> Option<Intersection> {
    let t_top = (d.x - c.x) * (a.y - c.y) - (d.y - c.y) * (a.x - c.x);
    let u_top = (c.y - a.y) * (a.x - b.x) - (c.x - a.x) * (a.y - b.y);
    let bottom = (d.y - c.y) * (b.x - a.x) - (d.x - c.x) * (b.y - a.y);

    if bottom == 0.0 {
        return None;
    }

    let t = t_top / bottom;
    let u = u_top / bottom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(Intersection {
        point: Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t)),
        offset: t,
        other_offset: u,
    })
}
