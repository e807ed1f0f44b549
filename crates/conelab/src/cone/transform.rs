//! Cone sampling, 2×2 inversion with a determinant guard, and the two
//! push-forwards (inverse for the primal cone, transpose for the polar).
//!
//! The inverse/transpose asymmetry is deliberate: the preimage cone
//! `K = {x : Ax ∈ C}` is `A⁻¹·C`, while its polar is the forward image
//! `K° = {Aᵀλ : λ ∈ C°}`. Conflating the two produces plausible but wrong
//! pictures.

use nalgebra::{Matrix2, Vector2};

use super::types::AngularCone;
use crate::curve::SampledCurve;

/// Sample a cone as `ray_count + 1` ray endpoints, uniformly spaced in angle
/// from `start_deg` to `end_deg` inclusive, each of length `ray_length`.
pub fn generate_cone(cone: AngularCone, ray_count: usize, ray_length: f64) -> SampledCurve {
    let start = cone.start_deg.to_radians();
    let end = cone.end_deg.to_radians();
    let n = ray_count.max(1);
    let mut pts = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let theta = start + (i as f64 / n as f64) * (end - start);
        pts.push(Vector2::new(
            ray_length * theta.cos(),
            ray_length * theta.sin(),
        ));
    }
    SampledCurve::new(pts)
}

/// 2×2 inverse with an explicit determinant guard.
///
/// Returns `None` when `|det| < eps_det`; the threshold absorbs
/// floating-point noise around truly singular inputs. Callers render empty
/// geometry on `None` instead of propagating an error.
pub fn invert(m: Matrix2<f64>, eps_det: f64) -> Option<Matrix2<f64>> {
    let det = m.determinant();
    if !det.is_finite() || det.abs() < eps_det {
        return None;
    }
    m.try_inverse()
}

/// Apply `m⁻¹` to every point of `curve`; empty when `m` is singular.
pub fn transform_by_inverse(
    curve: &SampledCurve,
    m: Matrix2<f64>,
    eps_det: f64,
) -> SampledCurve {
    match invert(m, eps_det) {
        Some(inv) => curve.map_points(|p| inv * p),
        None => SampledCurve::empty(),
    }
}

/// Apply `mᵀ` to every point of `curve`. Always defined.
pub fn transform_by_transpose(curve: &SampledCurve, m: Matrix2<f64>) -> SampledCurve {
    let mt = m.transpose();
    curve.map_points(|p| mt * p)
}

/// Polar cone of an angular sector.
///
/// For `[α, β]` with span ≤ 180° the polar is the sector `[β+90°, α+270°]`
/// (normals at right angles to the extreme rays, on the far side). A span
/// beyond 180° has only the origin in its polar; that case returns `None`
/// and callers render an empty fan. The 180° boundary itself is proper: the
/// polar of a closed half-plane is a single ray, span 0.
pub fn polar_cone(cone: AngularCone) -> Option<AngularCone> {
    if cone.is_polar_degenerate() {
        return None;
    }
    Some(AngularCone::new(
        cone.end_deg + 90.0,
        cone.start_deg + 270.0,
    ))
}
