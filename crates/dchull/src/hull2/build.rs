use super::merge::merge;
use super::orient::{orientation, Orientation};
use super::types::{ConvexPolygon, HullError, Point};

/// Convex hull of a strictly ascending `(x, y)` point sequence.
///
/// Pre: `points` sorted by `(x, y)` without duplicates (checked).
/// Post: vertices in counter-clockwise order with no collinear vertex left on
/// a straight boundary run; a segment `[min, max]` if all points are collinear.
///
/// `merge` itself may leave a vertex in the middle of a straight edge; those
/// are dropped in one pass over the finished hull, after the last merge. The
/// sub-hulls built during recursion keep them.
///
/// Errors: `TooFewPoints` for fewer than two points, `NotStrictlySorted` on
/// the first out-of-order or repeated point.
pub fn build_hull(points: &[Point]) -> Result<ConvexPolygon, HullError> {
    if points.len() < 2 {
        return Err(HullError::TooFewPoints { got: points.len() });
    }
    if let Some(index) = (1..points.len()).find(|&i| points[i - 1] >= points[i]) {
        return Err(HullError::NotStrictlySorted { index });
    }
    Ok(strip_collinear(hull_sorted(points)))
}

/// Sort, deduplicate, then `build_hull`.
pub fn convex_hull(points: &[Point]) -> Result<ConvexPolygon, HullError> {
    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.dedup();
    build_hull(&pts)
}

fn hull_sorted(points: &[Point]) -> ConvexPolygon {
    let n = points.len();
    match n {
        2 => ConvexPolygon::from_vertices(points.to_vec()),
        3 => {
            let (p0, p1, p2) = (points[0], points[1], points[2]);
            let verts = match orientation(p0, p1, p2) {
                Orientation::Collinear => vec![p0, p2],
                Orientation::Right => vec![p2, p1, p0],
                Orientation::Left => vec![p0, p1, p2],
            };
            ConvexPolygon::from_vertices(verts)
        }
        _ => {
            // mid stays on the left; both halves keep at least two points
            let mid = (n - 1) / 2;
            let left = hull_sorted(&points[..=mid]);
            let right = hull_sorted(&points[mid + 1..]);
            merge(&left, &right)
        }
    }
}

/// Drop vertices lying strictly inside a straight boundary run.
fn strip_collinear(hull: ConvexPolygon) -> ConvexPolygon {
    if hull.is_segment() {
        return hull;
    }
    let vs = hull.vertices();
    let kept: Vec<Point> = (0..vs.len())
        .filter(|&i| {
            orientation(vs[hull.prev(i)], vs[i], vs[hull.next(i)]) != Orientation::Collinear
        })
        .map(|i| vs[i])
        .collect();
    if kept.len() >= 3 {
        return ConvexPolygon::from_vertices(kept);
    }
    // everything on one line: keep the two extremes
    let lo = vs.iter().copied().min().unwrap_or_default();
    let hi = vs.iter().copied().max().unwrap_or_default();
    ConvexPolygon::from_vertices(vec![lo, hi])
}
