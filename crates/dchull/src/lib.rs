//! Divide-and-conquer convex hulls of planar integer point sets.
//!
//! Layout
//! - `hull2`: the hull itself (orientation predicate, tangents, merge, builder).
//! - `grid`: grid-sampled inputs (file format, drawing frame, polygon walk).
//! - `svg`: small SVG writers for points, polygons and hulls.
//! - `cloud`: replayable random point clouds for tests and benches.
//!
//! Conventions
//! - Coordinates are `i64`; the orientation predicate is evaluated in `i128`
//!   so every test is exact for coordinates within `±2^62`. No tolerances.
//!   `hull2` trusts its callers on range; the grid readers and
//!   `grid::to_drawing_frame` refuse anything past `grid::COORD_LIMIT`.
//! - "Counter-clockwise" follows the predicate's sign convention, which is the
//!   visual CCW direction in the y-down drawing frame used by `grid::frame`.

pub mod cloud;
pub mod grid;
pub mod hull2;
pub mod svg;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull2::{build_hull, convex_hull, ConvexPolygon, HullError, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{
        draw_cloud, draw_cloud_shaped, CloudBounds, CloudCfg, CloudShape, ReplayToken,
    };
    pub use crate::grid::{order_polygon, parse_grid, read_grid, to_drawing_frame, Canvas};
    pub use crate::grid::{FrameError, GridInput, ParseError, WalkError, COORD_LIMIT};
    pub use crate::hull2::{
        build_hull, convex_hull, cross, lower_tangent, merge, orientation, upper_tangent,
        ConvexPolygon, HullError, Orientation, Point, Tangent,
    };
}
