use super::orient::{orientation, Orientation};
use super::tangent::{lower_tangent, upper_tangent};
use super::types::ConvexPolygon;

/// Merge a left hull `a` and a right hull `b` into their common hull.
///
/// Pre: every vertex of `a` precedes every vertex of `b` in `(x, y)` order and
/// both satisfy the `ConvexPolygon` invariants.
///
/// The result walks `a` from the upper to the lower tangent vertex, then `b`
/// from the lower to the upper tangent vertex, both in increasing cyclic index.
/// A vertex lying inside a straight edge of the result can survive here;
/// `build_hull` removes those once the recursion is done.
pub fn merge(a: &ConvexPolygon, b: &ConvexPolygon) -> ConvexPolygon {
    let (av, bv) = (a.vertices(), b.vertices());

    // Two collinear segments: tangents are undefined, keep the outer endpoints.
    if a.is_segment()
        && b.is_segment()
        && orientation(av[0], av[1], bv[0]) == Orientation::Collinear
        && orientation(av[0], av[1], bv[1]) == Orientation::Collinear
    {
        return ConvexPolygon::from_vertices(vec![av[0], bv[1]]);
    }

    let ut = upper_tangent(a, b);
    let lt = lower_tangent(a, b);

    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut i = ut.left;
    while i != lt.left {
        out.push(av[i]);
        i = a.next(i);
    }
    out.push(av[i]);

    let mut j = lt.right;
    while j != ut.right {
        out.push(bv[j]);
        j = b.next(j);
    }
    out.push(bv[j]);

    ConvexPolygon::from_vertices(out)
}
