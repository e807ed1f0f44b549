//! Slope sampling around a center point.
//!
//! `estimate_min_l` is a numerical upper-bound estimate of the smallest
//! local Lipschitz constant, not an exact supremum: it samples the clamped
//! interval densely and takes the worst observed difference quotient. For a
//! fixed input it is deterministic; growing the sample count refines the
//! estimate toward the true bound (it can undershoot near kinks at coarse
//! counts).

use super::catalog::FunctionId;

/// Sampling configuration for `estimate_min_l` callers that want a default.
///
/// 100 interior samples is a display-quality convention, not a derived
/// constant.
#[derive(Clone, Copy, Debug)]
pub struct EstimateCfg {
    pub sample_count: usize,
}

impl Default for EstimateCfg {
    fn default() -> Self {
        Self { sample_count: 100 }
    }
}

/// How a `[0, 1]` control value maps to an effective magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlScale {
    /// Identity: the control value is the magnitude.
    Linear,
    /// `10^(4t − 2)`: t ∈ [0, 1] covers magnitudes 0.01 to 100.
    Log,
}

/// Map a normalized control value to an effective magnitude (for δ and L
/// sliders).
#[inline]
pub fn control_to_magnitude(t: f64, scale: ControlScale) -> f64 {
    match scale {
        ControlScale::Linear => t,
        ControlScale::Log => 10f64.powf(4.0 * t - 2.0),
    }
}

/// `|fy − fx| ≤ l·|y − x|`: is `(y, fy)` inside the Lipschitz cone at
/// `(x, fx)`?
#[inline]
pub fn check_containment(x: f64, y: f64, fx: f64, fy: f64, l: f64) -> bool {
    (fy - fx).abs() <= l * (y - x).abs()
}

/// Observed difference quotient `|fy − fx| / |y − x|`; `None` at `y = x`.
#[inline]
pub fn actual_slope(x: f64, y: f64, fx: f64, fy: f64) -> Option<f64> {
    if y == x {
        return None;
    }
    Some(((fy - fx) / (y - x)).abs())
}

/// Smallest Lipschitz constant observed on `[x−δ, x+δ]` clamped to the
/// function's declared domain.
///
/// Samples both clamped boundaries plus `sample_count − 1` interior points;
/// undefined samples and the center itself contribute nothing. Returns 0.0
/// when no sample contributes (including an undefined center).
pub fn estimate_min_l(id: FunctionId, x: f64, delta: f64, sample_count: usize) -> f64 {
    let Some(fx) = id.evaluate(x) else {
        return 0.0;
    };
    let domain = id.spec().domain;
    let x_min = (x - delta).max(domain.min);
    let x_max = (x + delta).min(domain.max);
    let n = sample_count.max(1);

    let mut max_slope = 0.0f64;
    let mut consider = |y: f64| {
        if y == x {
            return;
        }
        if let Some(fy) = id.evaluate(y) {
            let slope = ((fy - fx) / (y - x)).abs();
            if slope > max_slope {
                max_slope = slope;
            }
        }
    };

    // Boundary points first, then the interior grid.
    consider(x_min);
    consider(x_max);
    for i in 1..n {
        consider(x_min + (i as f64 / n as f64) * (x_max - x_min));
    }
    max_slope
}
