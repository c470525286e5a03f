//! Planar point-set geometry: Graham-scan hulls and ray-cast membership.
//!
//! Layout
//! - `plane`: the geometric core (hull, segment crossing, membership, sampler).
//! - `io`: text formats around the core (`.xyz` point lists, `.obj` polygons).
//!
//! All geometry is pure and tolerance-explicit: every call takes a `GeomCfg`.

pub mod io;
pub mod plane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use plane::{GeomCfg, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::io::{load_obj, load_xyz, save_obj, save_xyz, IoError, ParseError};
    pub use crate::plane::sample::{draw_points_in_disk, ReplayToken, SampleCfg};
    pub use crate::plane::{
        contains, convex_hull, filter_inside, is_inside, outside_point, segment_intersection,
        segments_intersect, winding_number, GeomCfg, MembershipRule, Polygon,
    };
    pub use nalgebra::Vector2 as Vec2;
}
