//! Curated re-export surface for downstream binaries and experiments.
//!
//! Prefer these re-exports for consistency across callers; the module tree
//! remains the source of truth.

// Cone mapping
pub use crate::cone::{
    cone_scene, generate_cone, invert, polar_cone, transform_by_inverse, transform_by_transpose,
    AngularCone, ConeCfg, ConeScene, ConeSceneParams,
};
// Lipschitz estimation
pub use crate::lipschitz::{
    actual_slope, check_containment, control_to_magnitude, estimate_min_l, lipschitz_scene,
    ControlScale, EstimateCfg, FunctionId, FunctionSpec, Interval, LipschitzBound, LipschitzScene,
    LipschitzSceneParams, PlotWindow,
};
// Random scenarios
pub use crate::rand::{draw_cone, draw_matrix, ConeRangeCfg, MatrixCfg, ReplayToken};
// Shared curve type
pub use crate::curve::SampledCurve;
