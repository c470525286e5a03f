//! Parametric segment crossing.
//!
//! For segments `[a, b]` and `[c, d]` write `A = a - c`, `B = c - d`,
//! `C = a - b` and `det = C × B`. Then
//! - `t = (A × B) / det` is the parameter along `[a, b]`,
//! - `u = -(C × A) / det` is the parameter along `[c, d]`,
//!
//! and the segments cross iff both lie in `[0, 1]` (endpoints count).
//!
//! Limitation: `|det| <= eps` (parallel or nearly so) is reported as no
//! crossing, so collinear overlapping segments are never detected.

use nalgebra::Vector2;

use super::types::GeomCfg;
use super::util::det;

/// Crossing point of `[a, b]` and `[c, d]`, or `None` if they miss or are parallel.
pub fn segment_intersection(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
    cfg: GeomCfg,
) -> Option<Vector2<f64>> {
    let big_a = a - c;
    let big_b = c - d;
    let big_c = a - b;
    let denom = det(big_c, big_b);
    if cfg.is_close(denom, 0.0) {
        return None;
    }
    let t = det(big_a, big_b) / denom;
    let u = -det(big_c, big_a) / denom;
    let unit = 0.0..=1.0;
    if unit.contains(&t) && unit.contains(&u) {
        Some(a + (b - a) * t)
    } else {
        None
    }
}

/// Whether `[a, b]` crosses `[c, d]`; see the module docs for the parallel case.
#[inline]
pub fn segments_intersect(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    segment_intersection(a, b, c, d, cfg).is_some()
}
