use std::fmt;

use crate::hull2::Point;

/// The walk ran out of lattice neighbours before visiting every point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkError {
    /// Point the walk was stuck at.
    pub at: Point,
    pub visited: usize,
    pub total: usize,
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "polygon walk stranded at {} after {} of {} points (no unvisited grid neighbour)",
            self.at, self.visited, self.total
        )
    }
}

impl std::error::Error for WalkError {}

/// Recover the boundary order of a polygon sampled on a lattice of spacing `g`.
///
/// Starting at `points[0]`, repeatedly step to the first unvisited point (in
/// input order) one grid step away, straight (`g`) or diagonal (`g·√2`).
/// Distances are compared squared, so the test is exact.
pub fn order_polygon(points: &[Point], g: i64) -> Result<Vec<Point>, WalkError> {
    let Some(&start) = points.first() else {
        return Ok(Vec::new());
    };
    let step2 = g as i128 * g as i128;
    let mut visited = vec![false; points.len()];
    visited[0] = true;
    let mut order = Vec::with_capacity(points.len());
    order.push(start);

    let mut cur = 0;
    while order.len() < points.len() {
        let here = points[cur];
        let next = (0..points.len()).find(|&j| {
            let d2 = here.dist2(points[j]);
            !visited[j] && (d2 == step2 || d2 == 2 * step2)
        });
        match next {
            Some(j) => {
                visited[j] = true;
                order.push(points[j]);
                cur = j;
            }
            None => {
                return Err(WalkError {
                    at: here,
                    visited: order.len(),
                    total: points.len(),
                })
            }
        }
    }
    Ok(order)
}
