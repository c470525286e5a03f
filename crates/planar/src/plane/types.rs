//! Basic planar types and tolerances.
//!
//! - `GeomCfg`: absolute closeness tolerance and the outside-point margin.
//! - `Polygon`: closed vertex loop; edges wrap from the last vertex to the first.

use nalgebra::Vector2;

/// Absolute tolerance for angle, distance and determinant closeness.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Distance the ray origin is pushed away from the polygon's bounding box.
pub const DEFAULT_OUTSIDE_MARGIN: f64 = 1000.0;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
    pub outside_margin: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            outside_margin: DEFAULT_OUTSIDE_MARGIN,
        }
    }
}

impl GeomCfg {
    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }
}

/// Closed polygon given by its vertex loop.
///
/// Invariants (design choice):
/// - No orientation or simplicity is enforced; hulls come out CCW.
/// - 0, 1 or 2 vertices is a degenerate but valid polygon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub verts: Vec<Vector2<f64>>,
}

impl Polygon {
    #[inline]
    pub fn new(verts: Vec<Vector2<f64>>) -> Self {
        Self { verts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Fewer than three vertices: no interior.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.verts.len() < 3
    }

    /// Edges `(v[i], v[(i+1) mod n])`, including the closing edge.
    ///
    /// A single vertex yields one zero-length edge; an empty polygon yields none.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| (self.verts[i], self.verts[(i + 1) % n]))
    }

    /// Minimum corner of the axis-aligned bounding box; `None` if empty.
    pub fn min_corner(&self) -> Option<Vector2<f64>> {
        let first = *self.verts.first()?;
        Some(
            self.verts
                .iter()
                .fold(first, |m, p| Vector2::new(m.x.min(p.x), m.y.min(p.y))),
        )
    }
}
