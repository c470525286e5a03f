//! Point-in-polygon by ray casting (even-odd rule).
//!
//! A segment is cast from a point known to be outside the polygon to the query
//! and crossings against every edge are counted; odd means inside.
//!
//! Accepted limitations
//! - Queries on an edge, or rays grazing a vertex, get whatever the
//!   tolerance-based crossing predicate reports (a vertex may count twice).
//! - The outside point is a heuristic: the bounding-box corner pushed away by
//!   a fixed, non-diagonal offset. It does not prove the ray avoids vertices.
//!
//! `winding_number` is the is-left accumulation alternative; callers opt in
//! through `MembershipRule::Winding`.

use nalgebra::Vector2;

use super::segment::segments_intersect;
use super::types::{GeomCfg, Polygon};
use super::util::cross;

/// Which membership test `filter_inside` applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MembershipRule {
    /// Even-odd crossings of a ray from the derived outside point.
    #[default]
    RayCast,
    /// Non-zero winding number.
    Winding,
}

/// Ray origin strictly outside `poly`'s bounding box; `None` for an empty polygon.
///
/// The offset is `(m, m/√2)` with `m = cfg.outside_margin`, so the ray never
/// runs along the 45° diagonal through the box's min corner (usually a vertex
/// for axis-aligned shapes).
pub fn outside_point(poly: &Polygon, cfg: GeomCfg) -> Option<Vector2<f64>> {
    let corner = poly.min_corner()?;
    let m = cfg.outside_margin;
    Some(corner - Vector2::new(m, m * std::f64::consts::FRAC_1_SQRT_2))
}

/// Even-odd test of `query` against `poly`, casting from `outside`.
///
/// An empty polygon contains nothing.
pub fn is_inside(
    poly: &Polygon,
    query: Vector2<f64>,
    outside: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    let crossings = poly
        .edges()
        .filter(|&(a, b)| segments_intersect(a, b, outside, query, cfg))
        .count();
    crossings % 2 == 1
}

/// `is_inside` with the ray origin derived by `outside_point`.
pub fn contains(poly: &Polygon, query: Vector2<f64>, cfg: GeomCfg) -> bool {
    match outside_point(poly, cfg) {
        Some(outside) => is_inside(poly, query, outside, cfg),
        None => false,
    }
}

/// Winding number of `poly` around `query` (CCW loops count positive).
///
/// Points exactly on an edge are not special-cased.
pub fn winding_number(poly: &Polygon, query: Vector2<f64>) -> i32 {
    let mut wn = 0;
    for (a, b) in poly.edges() {
        if a.y <= query.y {
            if b.y > query.y && cross(a, b, query) > 0.0 {
                wn += 1;
            }
        } else if b.y <= query.y && cross(a, b, query) < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// Points of `points` inside `poly` under `rule`, in input order.
pub fn filter_inside(
    poly: &Polygon,
    points: &[Vector2<f64>],
    rule: MembershipRule,
    cfg: GeomCfg,
) -> Vec<Vector2<f64>> {
    let kept: Vec<Vector2<f64>> = match rule {
        MembershipRule::RayCast => match outside_point(poly, cfg) {
            Some(outside) => points
                .iter()
                .copied()
                .filter(|&q| is_inside(poly, q, outside, cfg))
                .collect(),
            None => Vec::new(),
        },
        MembershipRule::Winding => points
            .iter()
            .copied()
            .filter(|&q| winding_number(poly, q) != 0)
            .collect(),
    };
    tracing::debug!(
        polygon = poly.len(),
        queries = points.len(),
        inside = kept.len(),
        rule = ?rule,
        "filter_inside"
    );
    kept
}
