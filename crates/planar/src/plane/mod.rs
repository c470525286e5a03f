//! Planar geometry core.
//!
//! Purpose
//! - Convex hull by angular sweep (Graham scan) with a distance tie-break.
//! - Point-in-polygon by ray casting against every edge (even-odd rule).
//!
//! Conventions
//! - Points are `Vector2<f64>`; polygons are closed vertex loops (`Polygon`).
//! - Tolerances live in `GeomCfg` and are passed explicitly; nothing is global.
//! - Degenerate polygons (fewer than 3 vertices) are valid values everywhere.

pub mod hull;
pub mod membership;
pub mod sample;
mod segment;
mod types;
mod util;

pub use hull::convex_hull;
pub use membership::{
    contains, filter_inside, is_inside, outside_point, winding_number, MembershipRule,
};
pub use segment::{segment_intersection, segments_intersect};
pub use types::{GeomCfg, Polygon, DEFAULT_EPS, DEFAULT_OUTSIDE_MARGIN};

#[cfg(test)]
mod tests;
