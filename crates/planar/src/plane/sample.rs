//! Random point clouds for inputs, tests and benchmarks.
//!
//! Model
//! - `count` points uniform in a disk of `radius` around `center`
//!   (radius drawn as `R·sqrt(u)` so density is uniform in area).
//! - Optional `snap` rounds coordinates to a grid, which produces the
//!   duplicates and collinear runs the hull has to survive.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    pub count: usize,
    pub radius: f64,
    pub center: Vector2<f64>,
    /// Grid spacing to snap to; `None` or a non-positive value disables snapping.
    pub snap: Option<f64>,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 100,
            radius: 1.0,
            center: Vector2::zeros(),
            snap: None,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points uniformly from a disk. Same token, same points.
pub fn draw_points_in_disk(cfg: SampleCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let r0 = cfg.radius.max(0.0);
    let snap = cfg.snap.filter(|s| *s > 0.0);
    (0..cfg.count)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = r0 * rng.gen::<f64>().sqrt();
            let p = cfg.center + Vector2::new(th.cos() * r, th.sin() * r);
            match snap {
                Some(s) => Vector2::new((p.x / s).round() * s, (p.y / s).round() * s),
                None => p,
            }
        })
        .collect()
}
