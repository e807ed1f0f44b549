//! Full cone-mapping scene: the four fans a renderer draws for one choice of
//! matrix and cone.

use nalgebra::Matrix2;

use super::transform::{
    generate_cone, invert, polar_cone, transform_by_inverse, transform_by_transpose,
};
use super::types::{AngularCone, ConeCfg};
use crate::curve::SampledCurve;

/// Inputs for one cone-mapping scene.
#[derive(Clone, Copy, Debug)]
pub struct ConeSceneParams {
    pub matrix: Matrix2<f64>,
    pub cone: AngularCone,
}

/// The four named fans plus degeneracy flags for display.
///
/// - `cone_c`: the chosen cone C.
/// - `cone_k`: preimage K = {x : Ax ∈ C} = A⁻¹·C; empty when A is singular.
/// - `polar_c`: polar cone C°; empty when C spans more than 180°.
/// - `polar_k`: K° = Aᵀ·C°; empty whenever `polar_c` is.
#[derive(Clone, Debug)]
pub struct ConeScene {
    pub cone_c: SampledCurve,
    pub cone_k: SampledCurve,
    pub polar_c: SampledCurve,
    pub polar_k: SampledCurve,
    pub matrix_degenerate: bool,
    pub polar_degenerate: bool,
}

/// Compute the scene. Pure; call again on every parameter change.
pub fn cone_scene(params: &ConeSceneParams, cfg: ConeCfg) -> ConeScene {
    let cone_c = generate_cone(params.cone, cfg.ray_count, cfg.ray_length);
    let matrix_degenerate = invert(params.matrix, cfg.eps_det).is_none();
    let cone_k = transform_by_inverse(&cone_c, params.matrix, cfg.eps_det);

    let (polar_c, polar_degenerate) = match polar_cone(params.cone) {
        Some(polar) => (
            generate_cone(polar, cfg.ray_count, cfg.ray_length),
            false,
        ),
        None => (SampledCurve::empty(), true),
    };
    let polar_k = transform_by_transpose(&polar_c, params.matrix);

    ConeScene {
        cone_c,
        cone_k,
        polar_c,
        polar_k,
        matrix_degenerate,
        polar_degenerate,
    }
}
