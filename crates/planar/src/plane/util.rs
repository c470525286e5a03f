use nalgebra::Vector2;

/// 2D cross product `u × v`.
#[inline]
pub(crate) fn det(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

/// `(b - a) × (c - a)`; positive for a counter-clockwise turn a→b→c.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    det(b - a, c - a)
}

/// Strictly counter-clockwise turn (salient angle). Collinear is not salient.
#[inline]
pub(crate) fn salient_angle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    cross(a, b, c) > 0.0
}
