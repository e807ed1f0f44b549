//! Basic cone types and tolerances.
//!
//! - `ConeCfg`: centralizes the determinant tolerance and ray sampling
//!   density used when turning cones into renderable fans.
//! - `AngularCone`: angular sector `[start, end]` in degrees.

/// Cone sampling/tolerance configuration.
///
/// The determinant threshold and ray count are conventions, not derived
/// quantities; keep them here so call sites never hard-code either.
#[derive(Clone, Copy, Debug)]
pub struct ConeCfg {
    /// A matrix with `|det| < eps_det` is treated as singular.
    pub eps_det: f64,
    /// Number of ray steps per fan; a fan has `ray_count + 1` points.
    pub ray_count: usize,
    /// Length of each sampled ray.
    pub ray_length: f64,
}

impl Default for ConeCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-4,
            ray_count: 100,
            ray_length: 20.0,
        }
    }
}

/// Convex angular sector from the origin, `start_deg <= end_deg`,
/// span at most 360°.
///
/// The polar cone of a sector wider than 180° collapses to the origin;
/// `is_polar_degenerate` reports that case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularCone {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl AngularCone {
    #[inline]
    pub fn new(start_deg: f64, end_deg: f64) -> Self {
        Self { start_deg, end_deg }
    }

    /// Sector `[0, end_deg]`, the common single-slider form.
    #[inline]
    pub fn from_origin(end_deg: f64) -> Self {
        Self {
            start_deg: 0.0,
            end_deg,
        }
    }

    #[inline]
    pub fn span_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// True when the polar cone is the origin alone (span beyond a
    /// half-plane).
    #[inline]
    pub fn is_polar_degenerate(&self) -> bool {
        self.span_deg() > 180.0
    }
}
