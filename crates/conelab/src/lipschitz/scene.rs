//! Full Lipschitz scene: graph, bound lines, cone region, and annotations
//! for one choice of function, center, radius, probe point, and constant.

use nalgebra::Vector2;

use super::catalog::FunctionId;
use super::estimate::{actual_slope, check_containment, estimate_min_l, EstimateCfg};
use crate::curve::SampledCurve;

/// Graph polyline resolution (samples per window; the polyline has one more
/// point, minus any undefined samples).
const GRAPH_SAMPLES: usize = 500;
/// Cone-region polygon resolution per edge.
const REGION_SAMPLES: usize = 50;
/// The plotted window extends this factor beyond δ on each side.
const WINDOW_FACTOR: f64 = 1.5;

/// Lipschitz constant selection: a fixed value or the sampled minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LipschitzBound {
    Fixed(f64),
    Auto,
}

/// What part of the abscissa the graph covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotWindow {
    /// `x ± 1.5δ`, clamped to the declared domain.
    Radius,
    /// The whole declared domain.
    FullDomain,
}

/// Inputs for one Lipschitz scene. `delta` and any `Fixed` bound are
/// effective magnitudes; control-scale mapping happens at the boundary
/// (`control_to_magnitude`).
#[derive(Clone, Copy, Debug)]
pub struct LipschitzSceneParams {
    pub function: FunctionId,
    /// Center point of the neighborhood.
    pub x: f64,
    /// Probe point tested against the cone.
    pub y: f64,
    /// Neighborhood radius δ > 0.
    pub delta: f64,
    pub bound: LipschitzBound,
    pub window: PlotWindow,
}

/// Everything a renderer draws, plus the scalar annotations it displays.
///
/// When `f(x)` is undefined the bound lines and cone region are empty and
/// the slope-dependent booleans are false; `within_delta` is purely metric
/// and stays meaningful.
#[derive(Clone, Debug)]
pub struct LipschitzScene {
    /// Function graph over the window, undefined samples dropped.
    pub graph: SampledCurve,
    /// Line of slope +L through `(x, f(x))`, as a 2-point segment.
    pub upper_bound: SampledCurve,
    /// Line of slope −L through `(x, f(x))`.
    pub lower_bound: SampledCurve,
    /// Closed polygon between the two bound lines over the δ-interval.
    pub cone_region: SampledCurve,
    /// The δ-interval clamped to the domain.
    pub interval: (f64, f64),
    pub effective_l: f64,
    pub effective_delta: f64,
    pub fx: Option<f64>,
    pub fy: Option<f64>,
    pub actual_slope: Option<f64>,
    /// Observed slope ≤ effective L.
    pub condition_satisfied: bool,
    /// `(y, f(y))` lies inside the Lipschitz cone.
    pub in_cone: bool,
    /// `|y − x| < δ`.
    pub within_delta: bool,
}

/// Compute the scene. Pure; call again on every parameter change.
pub fn lipschitz_scene(params: &LipschitzSceneParams, cfg: EstimateCfg) -> LipschitzScene {
    let id = params.function;
    let domain = id.spec().domain;
    let (x, y, delta) = (params.x, params.y, params.delta);

    let fx = id.evaluate(x);
    let fy = id.evaluate(y);

    let effective_l = match params.bound {
        LipschitzBound::Fixed(l) => l,
        LipschitzBound::Auto => estimate_min_l(id, x, delta, cfg.sample_count),
    };

    // Window for the graph and bound lines.
    let (w_min, w_max) = match params.window {
        PlotWindow::Radius => (
            (x - delta * WINDOW_FACTOR).max(domain.min),
            (x + delta * WINDOW_FACTOR).min(domain.max),
        ),
        PlotWindow::FullDomain => (domain.min, domain.max),
    };

    let mut graph = Vec::with_capacity(GRAPH_SAMPLES + 1);
    for i in 0..=GRAPH_SAMPLES {
        let xv = w_min + (i as f64 / GRAPH_SAMPLES as f64) * (w_max - w_min);
        if let Some(yv) = id.evaluate(xv) {
            graph.push(Vector2::new(xv, yv));
        }
    }

    // The δ-interval itself, clamped.
    let i_min = (x - delta).max(domain.min);
    let i_max = (x + delta).min(domain.max);

    let (upper_bound, lower_bound, cone_region) = match fx {
        Some(fx) => {
            let line = |sign: f64| {
                SampledCurve::new(vec![
                    Vector2::new(w_min, fx + sign * effective_l * (w_min - x)),
                    Vector2::new(w_max, fx + sign * effective_l * (w_max - x)),
                ])
            };
            let mut upper = Vec::with_capacity(REGION_SAMPLES + 1);
            let mut lower = Vec::with_capacity(REGION_SAMPLES + 1);
            for i in 0..=REGION_SAMPLES {
                let xv = i_min + (i as f64 / REGION_SAMPLES as f64) * (i_max - i_min);
                upper.push(Vector2::new(xv, fx + effective_l * (xv - x)));
                lower.push(Vector2::new(xv, fx - effective_l * (xv - x)));
            }
            // Close the polygon: upper edge left→right, lower edge back.
            let region: SampledCurve =
                upper.into_iter().chain(lower.into_iter().rev()).collect();
            (line(1.0), line(-1.0), region)
        }
        None => (
            SampledCurve::empty(),
            SampledCurve::empty(),
            SampledCurve::empty(),
        ),
    };

    let slope = match (fx, fy) {
        (Some(fx), Some(fy)) => actual_slope(x, y, fx, fy),
        _ => None,
    };
    let condition_satisfied = slope.is_some_and(|s| s <= effective_l);
    let in_cone = match (fx, fy) {
        (Some(fx), Some(fy)) => check_containment(x, y, fx, fy, effective_l),
        _ => false,
    };

    LipschitzScene {
        graph: SampledCurve::new(graph),
        upper_bound,
        lower_bound,
        cone_region,
        interval: (i_min, i_max),
        effective_l,
        effective_delta: delta,
        fx,
        fy,
        actual_slope: slope,
        condition_satisfied,
        in_cone,
        within_delta: (y - x).abs() < delta,
    }
}
