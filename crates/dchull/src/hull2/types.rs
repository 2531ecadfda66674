//! Value types shared by the hull routines.
//!
//! - `Point`: integer coordinates, ordered by x then y.
//! - `ConvexPolygon`: owned cyclic vertex list (segment or convex polygon).
//! - `Tangent`: vertex indices of a bridge between two sub-hulls.
//! - `HullError`: precondition failures of `build_hull`.

use std::fmt;

use nalgebra::Vector2;

use super::orient::{orientation, Orientation};

/// Planar point with exact integer coordinates.
///
/// The derived ordering compares `x` first and breaks ties by `y`, which is
/// the sort order `build_hull` expects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, exact in `i128`.
    #[inline]
    pub fn dist2(self, other: Point) -> i128 {
        let dx = other.x as i128 - self.x as i128;
        let dy = other.y as i128 - self.y as i128;
        dx * dx + dy * dy
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<[i64; 2]> for Point {
    #[inline]
    fn from([x, y]: [i64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [i64; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<Vector2<i64>> for Point {
    #[inline]
    fn from(v: Vector2<i64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for Vector2<i64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Convex hull as a cyclic vertex list.
///
/// Invariants
/// - At least two vertices. Exactly two means a segment: every hulled point
///   lies on the line through them, between them.
/// - With three or more vertices no consecutive (wrapping) triple is a
///   `Right` turn.
///
/// Only the hull routines construct values; callers read them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvexPolygon {
    verts: Vec<Point>,
}

impl ConvexPolygon {
    #[inline]
    pub(crate) fn from_vertices(verts: Vec<Point>) -> Self {
        debug_assert!(verts.len() >= 2, "hull needs at least two vertices");
        Self { verts }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Never true for a hull built by this crate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Two-vertex hull of a collinear point set.
    #[inline]
    pub fn is_segment(&self) -> bool {
        self.verts.len() == 2
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.verts.iter()
    }

    #[inline]
    pub(crate) fn next(&self, i: usize) -> usize {
        (i + 1) % self.verts.len()
    }

    #[inline]
    pub(crate) fn prev(&self, i: usize) -> usize {
        (i + self.verts.len() - 1) % self.verts.len()
    }

    /// True if `p` lies inside the hull or on its boundary.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_segment() {
            let (a, b) = (self.verts[0], self.verts[1]);
            return orientation(a, b, p) == Orientation::Collinear
                && a.x.min(b.x) <= p.x
                && p.x <= a.x.max(b.x)
                && a.y.min(b.y) <= p.y
                && p.y <= a.y.max(b.y);
        }
        (0..self.verts.len())
            .all(|i| orientation(self.verts[i], self.verts[self.next(i)], p) != Orientation::Right)
    }

    /// Twice the enclosed area (zero for segments).
    pub fn doubled_area(&self) -> i128 {
        if self.is_segment() {
            return 0;
        }
        let mut acc: i128 = 0;
        for (i, p) in self.verts.iter().enumerate() {
            let q = self.verts[self.next(i)];
            acc += p.x as i128 * q.y as i128 - q.x as i128 * p.y as i128;
        }
        acc.abs()
    }
}

impl<'a> IntoIterator for &'a ConvexPolygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.verts.iter()
    }
}

/// Bridge between a left and a right sub-hull, as vertex indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    /// Index into the left hull.
    pub left: usize,
    /// Index into the right hull.
    pub right: usize,
}

/// Precondition failures of `build_hull`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// A hull needs at least two distinct points.
    TooFewPoints { got: usize },
    /// `points[index - 1] >= points[index]` (unsorted or duplicated input).
    NotStrictlySorted { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::TooFewPoints { got } => {
                write!(f, "convex hull needs at least 2 points, got {got}")
            }
            HullError::NotStrictlySorted { index } => write!(
                f,
                "points must be strictly ascending by (x, y); violated at index {index}"
            ),
        }
    }
}

impl std::error::Error for HullError {}
