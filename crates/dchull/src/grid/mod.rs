//! Grid-sampled inputs: file format, drawing frame and polygon walk.
//!
//! Purpose
//! - Read point sets sampled on a lattice of spacing `g` (the "grid unit"),
//!   move them into the y-down frame used for drawing, and recover the
//!   boundary order of a polygon whose vertices are lattice neighbours.
//!
//! Conventions
//! - Grid files carry the unit, a point count and one `x y` pair per line.
//! - Frames keep a margin of one grid unit around the bounding box.
//! - Coordinates and units are bounded by `COORD_LIMIT` (2^60).
//!
//! Code cross-refs: `GridInput`, `to_drawing_frame`, `Canvas`, `order_polygon`.

mod frame;
mod parse;
mod walk;

pub use frame::{to_drawing_frame, Canvas, FrameError};
pub use parse::{in_range, parse_grid, read_grid, GridInput, ParseError, COORD_LIMIT};
pub use walk::{order_polygon, WalkError};
