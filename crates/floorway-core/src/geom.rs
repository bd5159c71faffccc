//! Geometry primitives: [`Point`] and [`Bounds`].
//!
//! Floor plans are authored in plan coordinates: `x` grows to the right and
//! `y` runs along the depth axis of the building (the scene's Z axis).

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D point on a floor plan.
///
/// With the `serde` feature a point is written as a two-element array
/// `[x, y]`, the shape floor-plan data is authored in.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let d = self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

// --- trait impls for Point ---

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A closed axis-aligned box \[min, max] on a floor plan.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Create bounds from two corners, canonicalized so that `min` ≤ `max`
    /// on each axis.
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest bounds containing every point, or `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        Some(it.fold(Self::new(first, first), Self::include))
    }

    /// Width along `x`.
    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    /// Depth along `y`.
    #[inline]
    pub fn depth(self) -> f64 {
        self.max.y - self.min.y
    }

    /// Size as a `Point` (width, depth).
    #[inline]
    pub fn size(self) -> Point {
        self.max - self.min
    }

    /// Center of the box.
    #[inline]
    pub fn center(self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Whether `p` lies inside or on the edge of the box.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Grow the box so it contains `p`.
    #[inline]
    pub fn include(self, p: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Smallest box that contains both boxes.
    #[inline]
    pub fn union(self, other: Bounds) -> Self {
        self.include(other.min).include(other.max)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_is_an_array() {
        let p: Point = serde_json::from_str("[-24, 0.5]").unwrap();
        assert_eq!(p, Point::new(-24.0, 0.5));
        assert_eq!(serde_json::to_string(&p).unwrap(), "[-24.0,0.5]");
    }
}
