//! Divide-and-conquer convex hull in 2D.
//!
//! Purpose
//! - Hull an x-sorted integer point sequence by splitting it in half, hulling
//!   each half recursively and stitching the two sub-hulls along their upper
//!   and lower tangents.
//!
//! Why this design
//! - Every geometric decision goes through one exact predicate
//!   (`orientation`), so degenerate inputs (collinear runs, shared x values at
//!   the split) take explicit branches instead of tolerances.
//! - Hulls are owned, immutable vertex lists walked with modular indices; a
//!   merge consumes its two inputs and allocates the result.
//!
//! Conventions
//! - Input is sorted strictly ascending by `(x, y)`; `convex_hull` sorts and
//!   deduplicates for callers that cannot guarantee it.
//! - Output vertices never make a `Right` turn. Two-vertex hulls are segments
//!   (all input points collinear).
//!
//! Code cross-refs: `orientation`, `upper_tangent`, `lower_tangent`, `merge`,
//! `build_hull`.

mod build;
mod merge;
mod orient;
mod tangent;
mod types;

pub use build::{build_hull, convex_hull};
pub use merge::merge;
pub use orient::{cross, orientation, Orientation};
pub use tangent::{lower_tangent, upper_tangent};
pub use types::{ConvexPolygon, HullError, Point, Tangent};
