use super::types::Point;

/// Turn direction of `r` relative to the directed line `p → q`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Right,
    Collinear,
}

/// Signed doubled area of the triangle `(p, q, r)` in the hull's convention:
/// negative is a `Right` turn, positive a `Left` turn.
///
/// Evaluated in `i128`; exact while coordinates stay within `±2^62`.
#[inline]
pub fn cross(p: Point, q: Point, r: Point) -> i128 {
    let (px, py) = (p.x as i128, p.y as i128);
    let (qx, qy) = (q.x as i128, q.y as i128);
    let (rx, ry) = (r.x as i128, r.y as i128);
    (qy - py) * (rx - qx) - (qx - px) * (ry - qy)
}

/// Classify `r` against `p → q`. Exact; no tolerance.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    match cross(p, q, r).signum() {
        -1 => Orientation::Right,
        1 => Orientation::Left,
        _ => Orientation::Collinear,
    }
}
