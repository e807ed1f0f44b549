//! Local Lipschitz estimation for a fixed catalog of scalar functions.
//!
//! Purpose
//! - Evaluate catalog functions with partial domains (`Option`, never NaN),
//!   estimate the smallest local Lipschitz constant around a point by dense
//!   sampling, and assemble the full plot scene a renderer needs.
//!
//! Code cross-refs: `lipschitz::catalog::FunctionId`,
//! `lipschitz::scene::lipschitz_scene`

mod catalog;
mod estimate;
mod scene;

pub use catalog::{FunctionId, FunctionSpec, Interval};
pub use estimate::{
    actual_slope, check_containment, control_to_magnitude, estimate_min_l, ControlScale,
    EstimateCfg,
};
pub use scene::{
    lipschitz_scene, LipschitzBound, LipschitzScene, LipschitzSceneParams, PlotWindow,
};

#[cfg(test)]
mod tests;
