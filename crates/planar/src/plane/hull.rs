//! Graham-scan convex hull.
//!
//! Model
//! - Anchor `p0` = lowest point (ties within eps: leftmost). It is on the hull.
//! - Remaining points are swept in ascending polar angle around `p0`; points on
//!   one ray from `p0` (triangle area within eps) are visited nearest first, so
//!   the farthest of a collinear run is the one that survives.
//! - A monotonic stack keeps only strict left turns; collinear triples pop.
//!   The last vertex must also turn left into `p0`.
//!
//! Output is counter-clockwise starting at `p0`. Degenerate inputs (0, 1, 2
//! points, all collinear) give degenerate polygons, never panics.

use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Vector2;

use super::types::{GeomCfg, Polygon};
use super::util::{det, salient_angle};

/// Lowest point, leftmost among points whose y is within eps of it.
fn anchor(points: &[Vector2<f64>], cfg: GeomCfg) -> Option<Vector2<f64>> {
    points.iter().copied().reduce(|best, p| {
        let lower_left = if cfg.is_close(p.y, best.y) {
            p.x < best.x
        } else {
            p.y < best.y
        };
        if lower_left {
            p
        } else {
            best
        }
    })
}

/// Polar angle of `p - p0`, or `None` when `p` coincides with `p0`.
///
/// The anchor is lowest, so angles fall in `[0, π]` up to eps. A point within
/// eps below `p0` and left of it is folded past `π` to the end of the sweep.
#[inline]
fn polar_angle(p0: Vector2<f64>, p: Vector2<f64>, cfg: GeomCfg) -> Option<f64> {
    let d = p - p0;
    if cfg.is_close(d.x, 0.0) && cfg.is_close(d.y, 0.0) {
        return None;
    }
    let theta = d.y.atan2(d.x);
    Some(if theta < -FRAC_PI_2 { theta + TAU } else { theta })
}

/// `a` and `b` lie on one ray from `p0`: the triangle `p0, a, b` has
/// (doubled) area within eps and the directions agree.
#[inline]
fn same_direction(p0: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>, cfg: GeomCfg) -> bool {
    let (da, db) = (a - p0, b - p0);
    cfg.is_close(det(da, db), 0.0) && da.dot(&db) > 0.0
}

/// Points ordered by polar angle around `p0`; angularly coincident points
/// (see `same_direction`) nearest first.
///
/// Sorting first by the exact angle keeps the comparator a total order; each
/// run of points coincident with the run's first point is then re-sorted by
/// distance. Duplicates of `p0` lead.
fn angular_order(points: &[Vector2<f64>], p0: Vector2<f64>, cfg: GeomCfg) -> Vec<Vector2<f64>> {
    let mut keyed: Vec<(f64, f64, Vector2<f64>)> = points
        .iter()
        .map(|&p| {
            let angle = polar_angle(p0, p, cfg).unwrap_or(f64::NEG_INFINITY);
            (angle, (p - p0).norm_squared(), p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut start = keyed
        .iter()
        .take_while(|k| k.0 == f64::NEG_INFINITY)
        .count();
    while start < keyed.len() {
        let first = keyed[start].2;
        let mut end = start + 1;
        while end < keyed.len() && same_direction(p0, first, keyed[end].2, cfg) {
            end += 1;
        }
        if end - start > 1 {
            keyed[start..end].sort_by(|a, b| a.1.total_cmp(&b.1));
        }
        start = end;
    }
    keyed.into_iter().map(|(_, _, p)| p).collect()
}

/// Convex hull by Graham scan (CCW, starting at the lowest-leftmost point).
///
/// Total over any finite input: empty in, empty out; one or two points are
/// returned as given; collinear sets reduce to their two extremes.
pub fn convex_hull(points: &[Vector2<f64>], cfg: GeomCfg) -> Polygon {
    let Some(p0) = anchor(points, cfg) else {
        return Polygon::default();
    };
    let sorted = angular_order(points, p0, cfg);

    let mut hull: Vec<Vector2<f64>> = Vec::with_capacity(sorted.len());
    for p in sorted {
        while hull.len() >= 2 && !salient_angle(hull[hull.len() - 2], hull[hull.len() - 1], p) {
            hull.pop();
        }
        hull.push(p);
    }
    while hull.len() >= 3 && !salient_angle(hull[hull.len() - 2], hull[hull.len() - 1], hull[0]) {
        hull.pop();
    }
    tracing::debug!(input = points.len(), hull = hull.len(), "convex_hull");
    Polygon::new(hull)
}
