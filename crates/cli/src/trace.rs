//! Scene → plot-trace conversion.
//!
//! The renderer consumes named traces (parallel x/y arrays); cone fans are
//! closed through the origin so they fill as sectors.

use conelab::SampledCurve;
use serde::Serialize;

/// One named polyline for the plotting layer.
#[derive(Debug, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Curve as an open polyline.
pub fn trace(name: &str, curve: &SampledCurve) -> Trace {
    Trace {
        name: name.to_string(),
        x: curve.pts.iter().map(|p| p.x).collect(),
        y: curve.pts.iter().map(|p| p.y).collect(),
    }
}

/// Curve closed through the origin (sector fill). Empty curves stay empty:
/// a degenerate cone renders as nothing, not as a stray origin point.
pub fn trace_closed_fan(name: &str, curve: &SampledCurve) -> Trace {
    if curve.is_empty() {
        return trace(name, curve);
    }
    let mut x = Vec::with_capacity(curve.len() + 2);
    let mut y = Vec::with_capacity(curve.len() + 2);
    x.push(0.0);
    y.push(0.0);
    for p in &curve.pts {
        x.push(p.x);
        y.push(p.y);
    }
    x.push(0.0);
    y.push(0.0);
    Trace {
        name: name.to_string(),
        x,
        y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn closed_fan_wraps_origin() {
        let curve = SampledCurve::new(vec![Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)]);
        let t = trace_closed_fan("c", &curve);
        assert_eq!(t.x, vec![0.0, 1.0, 0.0, 0.0]);
        assert_eq!(t.y, vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn empty_curve_stays_empty() {
        let t = trace_closed_fan("c", &SampledCurve::empty());
        assert!(t.x.is_empty() && t.y.is_empty());
    }
}
