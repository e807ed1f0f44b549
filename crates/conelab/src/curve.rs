//! Sampled plane curves handed to the plotting layer.

use nalgebra::Vector2;

/// Ordered polyline/polygon in the plane.
///
/// Invariants:
/// - Points are ordered as produced (by angle for cone fans, by abscissa for
///   function graphs); renderers connect them in sequence.
/// - Every computation returns a fresh curve; curves are never mutated after
///   construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledCurve {
    pub pts: Vec<Vector2<f64>>,
}

impl SampledCurve {
    #[inline]
    pub fn new(pts: Vec<Vector2<f64>>) -> Self {
        Self { pts }
    }

    /// Empty curve, used for degenerate geometry.
    #[inline]
    pub fn empty() -> Self {
        Self { pts: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Map every point through `f`, returning a fresh curve.
    #[inline]
    pub fn map_points<F>(&self, f: F) -> SampledCurve
    where
        F: Fn(Vector2<f64>) -> Vector2<f64>,
    {
        SampledCurve {
            pts: self.pts.iter().map(|&p| f(p)).collect(),
        }
    }
}

impl FromIterator<Vector2<f64>> for SampledCurve {
    fn from_iter<I: IntoIterator<Item = Vector2<f64>>>(iter: I) -> Self {
        SampledCurve {
            pts: iter.into_iter().collect(),
        }
    }
}
