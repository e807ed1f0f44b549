use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nalgebra::Matrix2;
use polars::prelude::*;
use serde_json::json;
use std::fs::File;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use conelab::cone::{cone_scene, AngularCone, ConeCfg, ConeSceneParams};
use conelab::lipschitz::{
    control_to_magnitude, estimate_min_l, lipschitz_scene, ControlScale, EstimateCfg, FunctionId,
    LipschitzBound, LipschitzSceneParams, PlotWindow,
};

mod provenance;
mod trace;

use trace::{trace, trace_closed_fan};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Scene computation runner for the convex-analysis plots")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a cone-mapping scene and write its plot traces as JSON
    Cone {
        /// Matrix coefficients, row-major: a11 a12 a21 a22
        #[arg(long, num_args = 4, value_names = ["A11", "A12", "A21", "A22"],
              default_values_t = [1.0, 0.0, 0.0, 1.0], allow_negative_numbers = true)]
        matrix: Vec<f64>,
        /// Cone start angle in degrees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,
        /// Cone end angle in degrees
        #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
        end: f64,
        #[arg(long)]
        out: String,
    },
    /// Compute a Lipschitz scene and write its plot traces as JSON
    Lipschitz {
        /// Function key (see `catalog`)
        #[arg(long)]
        function: String,
        /// Center point
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        /// Probe point
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        /// Neighborhood radius (a [0,1] control value with --log-scale)
        #[arg(long)]
        delta: f64,
        /// Lipschitz constant (a [0,1] control value with --log-scale);
        /// omit to use the sampled minimum
        #[arg(long)]
        l: Option<f64>,
        /// Map delta and l through 10^(4t-2) from [0,1] controls
        #[arg(long)]
        log_scale: bool,
        /// Plot the whole declared domain instead of x ± 1.5δ
        #[arg(long)]
        full_domain: bool,
        #[arg(long)]
        out: String,
    },
    /// Batch-estimate minimum L over a CSV with columns function,x,delta
    Sweep {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Interior sample count per row
        #[arg(long, default_value_t = 100)]
        samples: usize,
    },
    /// Print the function catalog as JSON
    Catalog,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Cone {
            matrix,
            start,
            end,
            out,
        } => cone(matrix, start, end, out),
        Action::Lipschitz {
            function,
            x,
            y,
            delta,
            l,
            log_scale,
            full_domain,
            out,
        } => lipschitz(function, x, y, delta, l, log_scale, full_domain, out),
        Action::Sweep {
            input,
            out,
            samples,
        } => sweep(input, out, samples),
        Action::Catalog => catalog(),
        Action::Report => report(),
    }
}

fn cone(matrix: Vec<f64>, start: f64, end: f64, out: String) -> Result<()> {
    tracing::info!(?matrix, start, end, out, "cone");
    let m = Matrix2::new(matrix[0], matrix[1], matrix[2], matrix[3]);
    let params = ConeSceneParams {
        matrix: m,
        cone: AngularCone::new(start, end),
    };
    let scene = cone_scene(&params, ConeCfg::default());

    let doc = json!({
        "traces": [
            trace_closed_fan("Cone C", &scene.cone_c),
            trace_closed_fan("Cone K = {x : Ax ∈ C}", &scene.cone_k),
            trace_closed_fan("Polar C°", &scene.polar_c),
            trace_closed_fan("Polar K° = {Aᵀλ : λ ∈ C°}", &scene.polar_k),
        ],
        "annotations": {
            "matrix_degenerate": scene.matrix_degenerate,
            "polar_degenerate": scene.polar_degenerate,
        }
    });
    write_artifact(
        Path::new(&out),
        &doc,
        json!({"matrix": matrix, "start": start, "end": end}),
    )
}

#[allow(clippy::too_many_arguments)]
fn lipschitz(
    function: String,
    x: f64,
    y: f64,
    delta: f64,
    l: Option<f64>,
    log_scale: bool,
    full_domain: bool,
    out: String,
) -> Result<()> {
    tracing::info!(
        function,
        x,
        y,
        delta,
        ?l,
        log_scale,
        full_domain,
        out,
        "lipschitz"
    );
    let Some(id) = FunctionId::from_key(&function) else {
        bail!("unknown function key {function:?}; see `catalog` for valid keys");
    };
    let scale = if log_scale {
        ControlScale::Log
    } else {
        ControlScale::Linear
    };
    let spec = id.spec();
    if !spec.domain.contains(x) {
        bail!(
            "x = {x} outside the domain [{}, {}] of {}",
            spec.domain.min,
            spec.domain.max,
            spec.name
        );
    }
    let delta_eff = control_to_magnitude(delta, scale);
    if delta_eff <= 0.0 {
        bail!("delta must be positive, got {delta_eff}");
    }
    let params = LipschitzSceneParams {
        function: id,
        x,
        y,
        delta: delta_eff,
        bound: match l {
            Some(l) => LipschitzBound::Fixed(control_to_magnitude(l, scale)),
            None => LipschitzBound::Auto,
        },
        window: if full_domain {
            PlotWindow::FullDomain
        } else {
            PlotWindow::Radius
        },
    };
    let scene = lipschitz_scene(&params, EstimateCfg::default());

    let doc = json!({
        "traces": [
            trace("Lipschitz Cone Region", &scene.cone_region),
            trace(&format!("f(x) = {}", spec.name), &scene.graph),
            trace("Slope +L", &scene.upper_bound),
            trace("Slope -L", &scene.lower_bound),
        ],
        "annotations": {
            "function": id.key(),
            "convex": spec.convex,
            "interval": [scene.interval.0, scene.interval.1],
            "effective_l": scene.effective_l,
            "effective_delta": scene.effective_delta,
            "fx": scene.fx,
            "fy": scene.fy,
            "actual_slope": scene.actual_slope,
            "condition_satisfied": scene.condition_satisfied,
            "in_cone": scene.in_cone,
            "within_delta": scene.within_delta,
        }
    });
    write_artifact(
        Path::new(&out),
        &doc,
        json!({
            "function": function, "x": x, "y": y, "delta": delta, "l": l,
            "log_scale": log_scale, "full_domain": full_domain
        }),
    )
}

/// Read rows of (function, x, delta), append a `min_l` column, write CSV.
fn sweep(input: String, out: String, samples: usize) -> Result<()> {
    tracing::info!(input, out, samples, "sweep");
    let lf = LazyCsvReader::new(&input)
        .with_infer_schema_length(Some(100))
        .finish()?;
    let mut df = lf.collect()?;

    let functions = df.column("function")?.str()?.clone();
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let xs = xs.f64()?;
    let deltas = df.column("delta")?.cast(&DataType::Float64)?;
    let deltas = deltas.f64()?;

    let mut min_l = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let (Some(key), Some(x), Some(delta)) = (functions.get(i), xs.get(i), deltas.get(i))
        else {
            bail!("row {i}: missing function/x/delta");
        };
        let Some(id) = FunctionId::from_key(key) else {
            bail!("row {i}: unknown function key {key:?}");
        };
        min_l.push(estimate_min_l(id, x, delta, samples));
    }
    let min_l = Series::new("min_l".into(), min_l);
    let df = df.with_column(min_l)?;
    tracing::info!(rows = df.height(), "sweep_done");

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out_path).with_context(|| format!("creating {out}"))?;
    CsvWriter::new(&mut file).finish(df)?;

    provenance::write_sidecar(out_path, json!({"input": input, "samples": samples}))?;
    Ok(())
}

fn catalog() -> Result<()> {
    let entries: Vec<_> = FunctionId::ALL
        .into_iter()
        .map(|id| {
            let spec = id.spec();
            json!({
                "key": id.key(),
                "name": spec.name,
                "domain": [spec.domain.min, spec.domain.max],
                "convex": spec.convex,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": conelab::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Write a JSON artifact plus its provenance sidecar.
fn write_artifact(out: &Path, doc: &serde_json::Value, params: serde_json::Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    provenance::write_sidecar(out, params)?;
    Ok(())
}
