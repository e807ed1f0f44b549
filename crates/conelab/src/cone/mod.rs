//! Angular cones in the plane and their behavior under 2×2 linear maps.
//!
//! Purpose
//! - Sample an angular sector as a fan of rays, push it through a linear map
//!   (preimage via the inverse, polar image via the transpose), and compute
//!   polar cones in closed form.
//! - Keep the API small and numerically explicit: degenerate matrices and
//!   wide cones return empty geometry or `None`, never panic.
//!
//! Code cross-refs: `curve::SampledCurve`, `cone::scene::cone_scene`

mod scene;
mod transform;
mod types;

pub use scene::{cone_scene, ConeScene, ConeSceneParams};
pub use transform::{
    generate_cone, invert, polar_cone, transform_by_inverse, transform_by_transpose,
};
pub use types::{AngularCone, ConeCfg};
