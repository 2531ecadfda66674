use std::fmt;

use nalgebra::Vector2;

use super::parse::{in_range, COORD_LIMIT};
use crate::hull2::Point;

/// A point or unit that `to_drawing_frame` cannot move without overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameError {
    PointOutOfRange { point: Point },
    UnitOutOfRange { unit: i64 },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::PointOutOfRange { point } => {
                write!(f, "point {point} is outside ±{COORD_LIMIT}")
            }
            FrameError::UnitOutOfRange { unit } => {
                write!(f, "grid unit {unit} is not in 1..={COORD_LIMIT}")
            }
        }
    }
}

impl std::error::Error for FrameError {}

/// Move `points` into the drawing frame: x shifted so the leftmost point sits
/// at `g`, y mirrored so the topmost point sits at `g` (SVG y grows down).
///
/// Relative order along x is preserved; order along y is reversed. Inputs
/// within `±COORD_LIMIT` land within `±2^62`.
pub fn to_drawing_frame(points: &[Point], g: i64) -> Result<Vec<Point>, FrameError> {
    if !(1..=COORD_LIMIT).contains(&g) {
        return Err(FrameError::UnitOutOfRange { unit: g });
    }
    if let Some(&point) = points.iter().find(|&&p| !in_range(p)) {
        return Err(FrameError::PointOutOfRange { point });
    }
    let Some((min, max)) = bbox(points) else {
        return Ok(Vec::new());
    };
    let shift = Vector2::new(g - min.x, max.y + g);
    Ok(points
        .iter()
        .map(|p| Point::from(Vector2::new(p.x, -p.y) + shift))
        .collect())
}

/// Drawing area: the bounding box of a point set plus a margin of `unit` on
/// every side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: i64,
    pub height: i64,
    pub unit: i64,
}

impl Canvas {
    /// `None` for an empty point set.
    pub fn around(points: &[Point], unit: i64) -> Option<Self> {
        let (min, max) = bbox(points)?;
        let span = max - min;
        Some(Self {
            width: span.x + 2 * unit,
            height: span.y + 2 * unit,
            unit,
        })
    }

    /// Corners of the inner frame (`unit` in from each edge), clockwise on
    /// screen from the top-left.
    pub fn frame_corners(&self) -> [Point; 4] {
        let g = self.unit;
        let (w, h) = (self.width - g, self.height - g);
        [
            Point::new(g, g),
            Point::new(w, g),
            Point::new(w, h),
            Point::new(g, h),
        ]
    }
}

fn bbox(points: &[Point]) -> Option<(Vector2<i64>, Vector2<i64>)> {
    let first = Vector2::<i64>::from(*points.first()?);
    Some(points.iter().fold((first, first), |(lo, hi), &p| {
        let v = Vector2::from(p);
        (lo.inf(&v), hi.sup(&v))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_and_shifts_into_margin() {
        let pts = vec![Point::new(-5, 0), Point::new(5, 10), Point::new(0, -10)];
        let out = to_drawing_frame(&pts, 4).unwrap();
        assert_eq!(
            out,
            vec![Point::new(4, 14), Point::new(14, 4), Point::new(9, 24)]
        );
        let canvas = Canvas::around(&out, 4).unwrap();
        assert_eq!((canvas.width, canvas.height), (18, 28));
        assert_eq!(
            canvas.frame_corners(),
            [
                Point::new(4, 4),
                Point::new(14, 4),
                Point::new(14, 24),
                Point::new(4, 24)
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(to_drawing_frame(&[], 3).unwrap().is_empty());
        assert_eq!(Canvas::around(&[], 3), None);
    }

    #[test]
    fn extreme_coordinates_are_refused() {
        assert_eq!(
            to_drawing_frame(&[Point::new(0, i64::MIN)], 1),
            Err(FrameError::PointOutOfRange {
                point: Point::new(0, i64::MIN)
            })
        );
        assert_eq!(
            to_drawing_frame(&[Point::new(0, 0), Point::new(5, i64::MAX)], 1),
            Err(FrameError::PointOutOfRange {
                point: Point::new(5, i64::MAX)
            })
        );
        assert_eq!(
            to_drawing_frame(&[Point::new(0, 0)], i64::MAX),
            Err(FrameError::UnitOutOfRange { unit: i64::MAX })
        );
        assert_eq!(
            to_drawing_frame(&[Point::new(0, 0)], 0),
            Err(FrameError::UnitOutOfRange { unit: 0 })
        );
    }

    #[test]
    fn limit_corners_stay_inside_the_exact_range() {
        let l = COORD_LIMIT;
        let out = to_drawing_frame(&[Point::new(l, -l), Point::new(-l, l)], l).unwrap();
        assert_eq!(out, vec![Point::new(3 * l, 3 * l), Point::new(l, l)]);
        assert!(out.iter().all(|p| p.x.abs() <= 1 << 62 && p.y.abs() <= 1 << 62));
    }
}
