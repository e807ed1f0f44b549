//! Reproducible random scenario sampling (matrices and cones).
//!
//! Purpose
//! - Provide deterministic, indexable draws for benches and batch sweeps.
//!   Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so scenario `k` of a sweep can be regenerated in isolation.

use nalgebra::Matrix2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cone::AngularCone;

/// Random 2×2 matrix configuration.
#[derive(Clone, Copy, Debug)]
pub struct MatrixCfg {
    /// Coefficients are drawn uniformly from this closed range.
    pub coeff_min: f64,
    pub coeff_max: f64,
    /// Redraw when `|det|` falls below this threshold (0 disables rejection).
    pub reject_below_det: f64,
}

impl Default for MatrixCfg {
    fn default() -> Self {
        Self {
            coeff_min: -2.0,
            coeff_max: 2.0,
            reject_below_det: 1e-4,
        }
    }
}

/// Random angular-cone configuration (degrees).
#[derive(Clone, Copy, Debug)]
pub struct ConeRangeCfg {
    pub min_span_deg: f64,
    pub max_span_deg: f64,
    /// Random start angle in `[0, 360)`? Otherwise cones start at 0°.
    pub random_start: bool,
}

impl Default for ConeRangeCfg {
    fn default() -> Self {
        Self {
            min_span_deg: 10.0,
            max_span_deg: 180.0,
            random_start: false,
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

/// Draw a random 2×2 matrix; near-singular draws are rejected and redrawn
/// (bounded retries, after which the last draw is returned as-is).
pub fn draw_matrix(cfg: MatrixCfg, tok: ReplayToken) -> Matrix2<f64> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.coeff_min.min(cfg.coeff_max);
    let hi = cfg.coeff_max.max(cfg.coeff_min);
    let mut m = Matrix2::zeros();
    for _ in 0..32 {
        m = Matrix2::new(
            rng.gen_range(lo..=hi),
            rng.gen_range(lo..=hi),
            rng.gen_range(lo..=hi),
            rng.gen_range(lo..=hi),
        );
        if cfg.reject_below_det <= 0.0 || m.determinant().abs() >= cfg.reject_below_det {
            break;
        }
    }
    m
}

/// Draw a random angular cone within the configured span bounds.
pub fn draw_cone(cfg: ConeRangeCfg, tok: ReplayToken) -> AngularCone {
    let mut rng = tok.to_std_rng();
    let lo = cfg.min_span_deg.clamp(0.0, 360.0);
    let hi = cfg.max_span_deg.clamp(lo, 360.0);
    let span = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
    let start = if cfg.random_start {
        rng.gen::<f64>() * 360.0
    } else {
        0.0
    };
    AngularCone::new(start, start + span)
}
