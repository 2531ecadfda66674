//! Random integer point clouds (replay tokens, box or ring layouts).
//!
//! Purpose
//! - Deterministic inputs for property tests, benches and the CLI demo. A
//!   draw is fully determined by its config and a `(seed, index)` token.
//!
//! Model
//! - `Box`: coordinates uniform in the inclusive bounds.
//! - `Ring`: points at uniform angles on a circle inscribed in the bounds,
//!   rounded to the grid, so most samples end up on the hull.
//! - The result is sorted by `(x, y)` and deduplicated, ready for `build_hull`;
//!   it may hold fewer than `count` points.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull2::Point;

/// Inclusive axis-aligned bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloudBounds {
    pub min: Vector2<i64>,
    pub max: Vector2<i64>,
}

impl CloudBounds {
    /// `[-half, half]²`.
    pub fn square(half: i64) -> Self {
        let h = half.abs();
        Self {
            min: Vector2::new(-h, -h),
            max: Vector2::new(h, h),
        }
    }

    #[inline]
    fn center(&self) -> Vector2<f64> {
        (self.min + self.max).map(|c| c as f64) * 0.5
    }

    #[inline]
    fn inradius(&self) -> f64 {
        let span = self.max - self.min;
        span.x.min(span.y) as f64 * 0.5
    }
}

/// Where samples are placed inside the bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CloudShape {
    #[default]
    Box,
    Ring,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of draws before deduplication.
    pub count: usize,
    pub bounds: CloudBounds,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 256,
            bounds: CloudBounds::square(100),
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
        // SplitMix64-style mixing, cheap and stable.
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

/// Uniform draw in the box; see `draw_cloud_shaped` for other layouts.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    draw_cloud_shaped(cfg, CloudShape::Box, tok)
}

/// Draw a sorted, duplicate-free point cloud.
pub fn draw_cloud_shaped(cfg: CloudCfg, shape: CloudShape, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let CloudBounds { min, max } = cfg.bounds;
    let (lo, hi) = (min.inf(&max), min.sup(&max));
    let mut pts: Vec<Point> = match shape {
        CloudShape::Box => (0..cfg.count)
            .map(|_| Point::new(rng.gen_range(lo.x..=hi.x), rng.gen_range(lo.y..=hi.y)))
            .collect(),
        CloudShape::Ring => {
            let c = cfg.bounds.center();
            let r = cfg.bounds.inradius();
            (0..cfg.count)
                .map(|_| {
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    let v = c + Vector2::new(th.cos(), th.sin()) * r;
                    Point::new(v.x.round() as i64, v.y.round() as i64)
                })
                .collect()
        }
    };
    pts.sort_unstable();
    pts.dedup();
    pts
}
