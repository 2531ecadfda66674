//! Minimal SVG output for points, polygons and hulls.
//!
//! Coordinates are written as given; callers move points into the drawing
//! frame first (`grid::to_drawing_frame`). Every picture has a white
//! background and a dashed red frame one grid unit in from the canvas edge.

use crate::grid::Canvas;
use crate::hull2::Point;

const HULL_FILL: &str = "#66CDAA";
const POLYGON_FILL: &str = "yellow";

struct Doc {
    body: String,
}

impl Doc {
    fn open(points: &[Point], g: i64) -> Self {
        let canvas = Canvas::around(points, g).unwrap_or(Canvas {
            width: 2 * g,
            height: 2 * g,
            unit: g,
        });
        let mut body = format!(
            "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" >\n",
            canvas.width, canvas.height
        );
        body.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
        body.push_str(&format!(
            "<polygon stroke=\"red\" points=\"{}\" fill=\"none\" stroke-width=\"1\" stroke-dasharray=\"8\"/>\n",
            point_list(&canvas.frame_corners())
        ));
        Self { body }
    }

    fn polygon(&mut self, vertices: &[Point], fill: &str) {
        self.body.push_str(&format!(
            "<polygon stroke=\"black\" points=\"{}\" fill=\"{fill}\" stroke-width=\"1\" />\n",
            point_list(vertices)
        ));
    }

    fn markers(&mut self, points: &[Point]) {
        for p in points {
            self.body.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"2\" fill=\"black\" />\n",
                p.x, p.y
            ));
        }
    }

    fn finish(mut self) -> String {
        self.body.push_str("</svg>");
        self.body
    }
}

/// `x,y x,y …` as used by the `points` attribute.
pub fn point_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bare point set.
pub fn points(points: &[Point], g: i64) -> String {
    let mut doc = Doc::open(points, g);
    doc.markers(points);
    doc.finish()
}

/// Polygon with its vertices in boundary order.
pub fn polygon(polygon: &[Point], g: i64) -> String {
    let mut doc = Doc::open(polygon, g);
    doc.polygon(polygon, POLYGON_FILL);
    doc.markers(polygon);
    doc.finish()
}

/// Hull drawn under the polygon it encloses; markers on the hull vertices.
///
/// The canvas follows the hull, whose bounding box is that of the whole point
/// set. An empty `polygon` draws the hull alone.
pub fn hull(hull: &[Point], polygon: &[Point], g: i64) -> String {
    let mut doc = Doc::open(hull, g);
    doc.polygon(hull, HULL_FILL);
    if !polygon.is_empty() {
        doc.polygon(polygon, POLYGON_FILL);
    }
    doc.markers(hull);
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn points_document_layout() {
        let doc = points(&pts(&[(2, 2), (6, 4)]), 2);
        assert!(doc.starts_with("<svg width=\"8\" height=\"6\" "));
        assert!(doc.contains("points=\"2,2 6,2 6,4 2,4\""));
        assert_eq!(doc.matches("<circle").count(), 2);
        assert!(doc.contains("<circle cx=\"6\" cy=\"4\" r=\"2\" fill=\"black\" />"));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn hull_is_drawn_below_the_polygon() {
        let poly = pts(&[(1, 1), (3, 1), (2, 2), (3, 3), (1, 3)]);
        let h = pts(&[(1, 1), (1, 3), (3, 3), (3, 1)]);
        let doc = hull(&h, &poly, 1);
        let hull_at = doc.find(HULL_FILL).unwrap();
        let poly_at = doc.find("fill=\"yellow\"").unwrap();
        assert!(hull_at < poly_at);
        assert!(doc.contains("points=\"1,1 1,3 3,3 3,1\""));
        assert_eq!(doc.matches("<circle").count(), 4);
    }

    #[test]
    fn hull_without_polygon() {
        let doc = hull(&pts(&[(1, 1), (1, 3), (3, 1)]), &[], 1);
        assert!(doc.starts_with("<svg width=\"4\" height=\"4\" "));
        assert!(!doc.contains("yellow"));
    }

    #[test]
    fn polygon_keeps_vertex_order() {
        let doc = polygon(&pts(&[(1, 1), (3, 1), (3, 3)]), 1);
        assert!(doc.contains("points=\"1,1 3,1 3,3\" fill=\"yellow\""));
    }
}
