use super::*;
use proptest::prelude::*;

#[test]
fn catalog_keys_round_trip() {
    for id in FunctionId::ALL {
        assert_eq!(FunctionId::from_key(id.key()), Some(id));
    }
    assert_eq!(FunctionId::from_key("nosuch"), None);
}

#[test]
fn evaluate_respects_partial_domains() {
    assert_eq!(FunctionId::NegLog.evaluate(0.0), None);
    assert_eq!(FunctionId::NegLog.evaluate(1.0), Some(0.0));
    assert_eq!(FunctionId::LogX.evaluate(-1.0), None);
    assert_eq!(FunctionId::SqrtX.evaluate(-0.5), None);
    assert_eq!(FunctionId::SqrtX.evaluate(0.0), Some(0.0));
    // Removable singularity is patched, not NaN.
    assert_eq!(FunctionId::X2Sin1X.evaluate(0.0), Some(0.0));
    // Total functions are total.
    for id in [FunctionId::X2, FunctionId::Abs, FunctionId::Relu, FunctionId::Sin] {
        assert!(id.evaluate(-1.5).is_some());
    }
}

#[test]
fn evaluate_matches_formulas() {
    assert_eq!(FunctionId::X2.evaluate(3.0), Some(9.0));
    assert_eq!(FunctionId::Relu.evaluate(-2.0), Some(0.0));
    assert_eq!(FunctionId::Relu.evaluate(2.0), Some(2.0));
    let y = FunctionId::X23.evaluate(-8.0).unwrap();
    assert!((y + 4.0).abs() < 1e-12);
    let y = FunctionId::SqrtAbs.evaluate(-4.0).unwrap();
    assert!((y - 2.0).abs() < 1e-12);
}

#[test]
fn estimate_matches_local_slope_of_square() {
    // f(x) = x² near x = 1: the local slope bound tends to 2|x| as δ → 0.
    let l = estimate_min_l(FunctionId::X2, 1.0, 1e-3, 100);
    assert!((l - 2.0).abs() < 5e-3, "estimate {l} should be near 2");
}

#[test]
fn estimate_abs_kink_is_one() {
    // |x| has slope 1 on both sides of the kink at 0.
    let l = estimate_min_l(FunctionId::Abs, 0.0, 0.5, 100);
    assert!((l - 1.0).abs() < 1e-12);
}

#[test]
fn estimate_clamps_to_domain() {
    // Center at the domain edge of √x: only the right side contributes,
    // and the steepest quotient is at the sample closest to 0.
    let l = estimate_min_l(FunctionId::SqrtX, 0.0, 1.0, 100);
    assert!(l > 1.0);
    let steeper = estimate_min_l(FunctionId::SqrtX, 0.0, 1.0, 1000);
    assert!(steeper >= l);
}

#[test]
fn estimate_undefined_center_contributes_nothing() {
    assert_eq!(estimate_min_l(FunctionId::NegLog, 0.0, 0.5, 100), 0.0);
}

#[test]
fn containment_example() {
    // |2.25 − 1| = 1.25 ≤ 3·0.5 = 1.5
    assert!(check_containment(1.0, 1.5, 1.0, 2.25, 3.0));
    assert!(!check_containment(1.0, 1.5, 1.0, 2.25, 2.0));
}

#[test]
fn actual_slope_none_at_center() {
    assert_eq!(actual_slope(1.0, 1.0, 1.0, 1.0), None);
    let s = actual_slope(1.0, 1.5, 1.0, 2.25).unwrap();
    assert!((s - 2.5).abs() < 1e-12);
}

#[test]
fn control_scale_endpoints() {
    assert!((control_to_magnitude(0.0, ControlScale::Log) - 0.01).abs() < 1e-12);
    assert!((control_to_magnitude(0.5, ControlScale::Log) - 1.0).abs() < 1e-9);
    assert!((control_to_magnitude(1.0, ControlScale::Log) - 100.0).abs() < 1e-9);
    assert_eq!(control_to_magnitude(0.37, ControlScale::Linear), 0.37);
}

#[test]
fn scene_auto_bound_contains_probe_point() {
    // With the sampled minimum L, a probe on the sampling grid can never
    // break the containment inequality.
    let params = LipschitzSceneParams {
        function: FunctionId::Sin,
        x: 0.5,
        y: 1.0,
        delta: 1.0,
        bound: LipschitzBound::Auto,
        window: PlotWindow::Radius,
    };
    let scene = lipschitz_scene(&params, EstimateCfg::default());
    assert!(scene.in_cone);
    assert!(scene.condition_satisfied);
    assert!(scene.within_delta);
    assert!(scene.effective_l > 0.0);
}

#[test]
fn scene_geometry_shapes() {
    let params = LipschitzSceneParams {
        function: FunctionId::X2,
        x: 1.0,
        y: 1.5,
        delta: 0.5,
        bound: LipschitzBound::Fixed(3.0),
        window: PlotWindow::Radius,
    };
    let scene = lipschitz_scene(&params, EstimateCfg::default());
    assert_eq!(scene.graph.len(), 501);
    assert_eq!(scene.upper_bound.len(), 2);
    assert_eq!(scene.lower_bound.len(), 2);
    assert_eq!(scene.cone_region.len(), 102);
    // Window is x ± 1.5δ, inside the domain here.
    assert!((scene.graph.pts[0].x - 0.25).abs() < 1e-12);
    assert!((scene.graph.pts[500].x - 1.75).abs() < 1e-12);
    // δ-interval is tighter than the window.
    assert!((scene.interval.0 - 0.5).abs() < 1e-12);
    assert!((scene.interval.1 - 1.5).abs() < 1e-12);
    // Bound lines pass through (x, f(x)) with slope ±L.
    let fx = scene.fx.unwrap();
    let up = &scene.upper_bound.pts;
    let slope = (up[1].y - up[0].y) / (up[1].x - up[0].x);
    assert!((slope - 3.0).abs() < 1e-12);
    assert!((fx - 1.0).abs() < 1e-12);
    // y = 1.5: |f(y) − f(x)| = 1.25 ≤ 3·0.5
    assert!(scene.in_cone);
    assert!(scene.condition_satisfied);
}

#[test]
fn scene_full_domain_window() {
    let params = LipschitzSceneParams {
        function: FunctionId::X2,
        x: 0.0,
        y: 0.5,
        delta: 0.1,
        bound: LipschitzBound::Fixed(1.0),
        window: PlotWindow::FullDomain,
    };
    let scene = lipschitz_scene(&params, EstimateCfg::default());
    assert!((scene.graph.pts[0].x + 3.0).abs() < 1e-12);
    assert!((scene.graph.pts.last().unwrap().x - 3.0).abs() < 1e-12);
}

#[test]
fn scene_undefined_center_degrades_quietly() {
    let params = LipschitzSceneParams {
        function: FunctionId::SqrtX,
        x: -1.0,
        y: 0.5,
        delta: 0.2,
        bound: LipschitzBound::Fixed(1.0),
        window: PlotWindow::Radius,
    };
    let scene = lipschitz_scene(&params, EstimateCfg::default());
    assert_eq!(scene.fx, None);
    assert!(scene.upper_bound.is_empty());
    assert!(scene.lower_bound.is_empty());
    assert!(scene.cone_region.is_empty());
    assert!(!scene.in_cone);
    assert!(!scene.condition_satisfied);
    assert_eq!(scene.actual_slope, None);
    // Distance to the probe is still meaningful.
    assert!(!scene.within_delta);
}

#[test]
fn scene_window_clamps_to_domain() {
    // x − 1.5δ would reach −1.45; the window stops at the domain edge.
    let params = LipschitzSceneParams {
        function: FunctionId::SqrtX,
        x: 0.05,
        y: 0.1,
        delta: 1.0,
        bound: LipschitzBound::Auto,
        window: PlotWindow::Radius,
    };
    let scene = lipschitz_scene(&params, EstimateCfg::default());
    assert_eq!(scene.graph.len(), 501);
    assert_eq!(scene.graph.pts[0].x, 0.0);
    assert!((scene.interval.0 - 0.0).abs() < 1e-12);
    assert!(scene.graph.pts.iter().all(|p| p.x >= 0.0));
}

proptest! {
    #[test]
    fn containment_is_symmetric_under_swap(x in -2.0..2.0f64, y in -2.0..2.0f64, l in 0.0..10.0f64) {
        // The predicate only sees absolute differences.
        let (fx, fy) = (x * x, y * y);
        prop_assert_eq!(
            check_containment(x, y, fx, fy, l),
            check_containment(y, x, fy, fx, l)
        );
    }

    #[test]
    fn estimate_never_negative(x in -3.0..3.0f64, delta in 1e-4..2.0f64) {
        for id in FunctionId::ALL {
            prop_assert!(estimate_min_l(id, x, delta, 100) >= 0.0);
        }
    }

    #[test]
    fn auto_bound_dominates_grid_quotients(x in -1.0..1.0f64, delta in 0.01..1.0f64) {
        // Every slope the estimator saw is ≤ the returned maximum.
        let id = FunctionId::Sin;
        let l = estimate_min_l(id, x, delta, 100);
        let fx = id.evaluate(x).unwrap();
        let domain = id.spec().domain;
        let lo = (x - delta).max(domain.min);
        let hi = (x + delta).min(domain.max);
        for i in 0..=100 {
            let y = lo + (i as f64 / 100.0) * (hi - lo);
            if y != x {
                let fy = id.evaluate(y).unwrap();
                prop_assert!(((fy - fx) / (y - x)).abs() <= l + 1e-12);
            }
        }
    }
}
