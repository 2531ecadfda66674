//! Upper and lower tangents between two x-separated convex hulls.
//!
//! Both searches start from the facing extreme vertices and walk each
//! candidate around its hull until the bridge supports both polygons. Moving
//! one end can break tangency at the other, so the two walks repeat until a
//! full pass changes nothing. A collinear neighbour moves the candidate once
//! more (onto the farther collinear vertex) and ends that side's walk.
//!
//! "Upper" means smaller y, which is higher in the drawing frame.

use super::orient::{orientation, Orientation};
use super::types::{ConvexPolygon, Point, Tangent};

/// Index of the extreme vertex chosen by `better(candidate, current)`.
fn extreme_by(h: &ConvexPolygon, better: impl Fn(Point, Point) -> bool) -> usize {
    let vs = h.vertices();
    let mut best = 0;
    for (i, &p) in vs.iter().enumerate().skip(1) {
        if better(p, vs[best]) {
            best = i;
        }
    }
    best
}

/// Upper tangent of `a` (left hull) and `b` (right hull).
pub fn upper_tangent(a: &ConvexPolygon, b: &ConvexPolygon) -> Tangent {
    let av = a.vertices();
    let bv = b.vertices();
    // rightmost of a, topmost on ties; leftmost of b, topmost on ties
    let mut l = extreme_by(a, |p, q| p.x > q.x || (p.x == q.x && p.y < q.y));
    let mut r = extreme_by(b, |p, q| p.x < q.x || (p.x == q.x && p.y < q.y));

    let mut changed = true;
    while changed {
        changed = false;
        loop {
            let next = a.next(l);
            match orientation(av[l], bv[r], av[next]) {
                Orientation::Right => break,
                Orientation::Collinear => {
                    l = next;
                    break;
                }
                Orientation::Left => {
                    l = next;
                    changed = true;
                }
            }
        }
        loop {
            let prev = b.prev(r);
            match orientation(bv[r], av[l], bv[prev]) {
                Orientation::Left => break,
                Orientation::Collinear => {
                    r = prev;
                    break;
                }
                Orientation::Right => {
                    r = prev;
                    changed = true;
                }
            }
        }
    }
    Tangent { left: l, right: r }
}

/// Lower tangent of `a` (left hull) and `b` (right hull).
pub fn lower_tangent(a: &ConvexPolygon, b: &ConvexPolygon) -> Tangent {
    let av = a.vertices();
    let bv = b.vertices();
    // rightmost of a, bottommost on ties; leftmost of b, bottommost on ties
    let mut l = extreme_by(a, |p, q| p.x > q.x || (p.x == q.x && p.y > q.y));
    let mut r = extreme_by(b, |p, q| p.x < q.x || (p.x == q.x && p.y > q.y));

    let mut changed = true;
    while changed {
        changed = false;
        loop {
            let prev = a.prev(l);
            match orientation(av[l], bv[r], av[prev]) {
                Orientation::Left => break,
                Orientation::Collinear => {
                    l = prev;
                    break;
                }
                Orientation::Right => {
                    l = prev;
                    changed = true;
                }
            }
        }
        loop {
            let next = b.next(r);
            match orientation(bv[r], av[l], bv[next]) {
                Orientation::Right => break,
                Orientation::Collinear => {
                    r = next;
                    break;
                }
                Orientation::Left => {
                    r = next;
                    changed = true;
                }
            }
        }
    }
    Tangent { left: l, right: r }
}
