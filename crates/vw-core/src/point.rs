//! Point and segment primitives.
//!
//! Both are plain value types. Equality is exact coordinate equality, with
//! no epsilon: two vertices placed by the editor are only "the same" when
//! they land on identical coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

// ─── Point ───────────────────────────────────────────────────────────────

/// A 2D point (or vector) in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

// ─── Segment ─────────────────────────────────────────────────────────────

/// An unordered pair of points.
///
/// `Segment::new(a, b) == Segment::new(b, a)`. Graph edges are handed out as
/// segments built from the current vertex positions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Whether `point` is one of the two endpoints.
    pub fn includes(&self, point: Point) -> bool {
        self.start == point || self.end == point
    }

    /// A segment whose endpoints coincide. Never valid as a graph edge.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn midpoint(&self) -> Point {
        crate::math::average(self.start, self.end)
    }

    pub fn length(&self) -> f64 {
        crate::math::distance(self.start, self.end)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.includes(other.start) && self.includes(other.end)
    }
}
