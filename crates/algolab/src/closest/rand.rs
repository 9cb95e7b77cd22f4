//! Deterministic uniform point samples in an axis-aligned box.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//! so example data and benchmark inputs are reproducible and indexable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Sampling box. `snap_to_int` rounds coordinates to integers, matching the
/// historical example generator; leave it off for collision-free float sets.
#[derive(Clone, Copy, Debug)]
pub struct BoxCfg {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub snap_to_int: bool,
}

impl Default for BoxCfg {
    fn default() -> Self {
        Self {
            x_min: -50.0,
            x_max: 50.0,
            y_min: -50.0,
            y_max: 50.0,
            snap_to_int: true,
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

/// Draw `n` points uniformly from `cfg`'s box.
pub fn draw_points_uniform(n: usize, cfg: BoxCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| {
            let x: f64 = rng.gen_range(cfg.x_min..=cfg.x_max);
            let y: f64 = rng.gen_range(cfg.y_min..=cfg.y_max);
            if cfg.snap_to_int {
                Point::new(x.round(), y.round())
            } else {
                Point::new(x, y)
            }
        })
        .collect()
}
