//! Print one cone-mapping scene as plain numbers.
//!
//! Purpose
//! - Provide a quick, reproducible data point for eyeballing the geometry
//!   without the plotting front end: a shear matrix applied to the first
//!   quadrant, with both polars.

use conelab::cone::{cone_scene, AngularCone, ConeCfg, ConeSceneParams};
use nalgebra::matrix;

fn main() {
    let params = ConeSceneParams {
        matrix: matrix![1.0, 1.0; 0.0, 1.0],
        cone: AngularCone::new(0.0, 90.0),
    };
    let scene = cone_scene(&params, ConeCfg::default());

    println!(
        "cone_c: {} pts  cone_k: {} pts  polar_c: {} pts  polar_k: {} pts",
        scene.cone_c.len(),
        scene.cone_k.len(),
        scene.polar_c.len(),
        scene.polar_k.len()
    );
    println!(
        "matrix_degenerate={} polar_degenerate={}",
        scene.matrix_degenerate, scene.polar_degenerate
    );
    for (label, curve) in [
        ("cone_k.first", scene.cone_k.pts.first()),
        ("cone_k.last", scene.cone_k.pts.last()),
        ("polar_k.first", scene.polar_k.pts.first()),
        ("polar_k.last", scene.polar_k.pts.last()),
    ] {
        if let Some(p) = curve {
            println!("{label} = ({:.6}, {:.6})", p.x, p.y);
        }
    }
}
