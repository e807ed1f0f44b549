//! Scene geometry for two classic convex-analysis pictures.
//!
//! - `cone`: maps an angular cone through a 2×2 linear transform and computes
//!   polar cones (preimage cone via the inverse, polar image via the
//!   transpose).
//! - `lipschitz`: estimates local Lipschitz constants of a fixed catalog of
//!   scalar functions by dense sampling around a center point.
//!
//! All computations are pure functions of their inputs: callers hold the
//! current parameter values and recompute scenes on every change. Degenerate
//! inputs (near-singular matrices, wide cones, out-of-domain points) degrade
//! to empty geometry plus flags, never to panics.

pub mod api;
pub mod cone;
pub mod curve;
pub mod lipschitz;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports to align code with the usual blackboard notation.
pub use curve::SampledCurve;
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cone::{
        cone_scene, generate_cone, invert, polar_cone, transform_by_inverse,
        transform_by_transpose, AngularCone, ConeCfg, ConeScene, ConeSceneParams,
    };
    pub use crate::curve::SampledCurve;
    pub use crate::lipschitz::{
        actual_slope, check_containment, control_to_magnitude, estimate_min_l, lipschitz_scene,
        ControlScale, EstimateCfg, FunctionId, FunctionSpec, Interval, LipschitzBound,
        LipschitzScene, LipschitzSceneParams, PlotWindow,
    };
    pub use crate::rand::{draw_cone, draw_matrix, ConeRangeCfg, MatrixCfg, ReplayToken};
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
