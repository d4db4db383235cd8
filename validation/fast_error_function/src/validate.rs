//! Accuracy report for every erf method.
//!
//! Samples a dense grid, compares each method against the fdlibm routine in
//! both precisions and writes one JSON record per (method, precision, function).
//!
//! Environment:
//! - `ERF_VALIDATION_SAMPLES`: grid size over [-8, 8] (default 200001).
//! - `ERF_VALIDATION_OUTPUT`: output path (default `../output/error_function/report.json`).
//! - `RUST_LOG`: log filter (default `info`).

use error_function::{erf_sun, erfc_sun};
use fast_error_function::prelude::*;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

const DEFAULT_SAMPLES: usize = 200_001;
const DEFAULT_OUTPUT: &str = "../output/error_function/report.json";

#[derive(Debug, Deserialize, Serialize)]
struct Report {
    samples: usize,
    lower: f64,
    upper: f64,
    results: Vec<MethodReport>,
}

#[derive(Debug, Deserialize, Serialize)]
struct MethodReport {
    method: String,
    description: String,
    precision: String,
    function: String,
    max_abs_error: f64,
    argmax: f64,
    mean_abs_error: f64,
    documented_bound: f64,
    within_bound: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let samples = match env::var("ERF_VALIDATION_SAMPLES") {
        Ok(s) => s.parse::<usize>()?.max(2),
        Err(_) => DEFAULT_SAMPLES,
    };
    let output = env::var("ERF_VALIDATION_OUTPUT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT));

    let (lower, upper) = (-8.0, 8.0);
    let xs: Vec<f64> = (0..samples)
        .map(|i| lower + (upper - lower) * i as f64 / (samples - 1) as f64)
        .collect();
    info!("validating {} methods on {} samples", Method::ALL.len(), samples);

    let mut results = Vec::new();
    for method in Method::ALL {
        for function in [Function::Erf, Function::Erfc] {
            results.push(validate_double(method, function, &xs)?);
            results.push(validate_single(method, function, &xs)?);
        }
    }

    let failures = results.iter().filter(|r| !r.within_bound).count();
    for r in results.iter().filter(|r| !r.within_bound) {
        warn!(
            "{} ({} {}): max error {:.3e} at x = {} exceeds {:.1e}",
            r.method, r.function, r.precision, r.max_abs_error, r.argmax, r.documented_bound
        );
    }

    let report = Report {
        samples,
        lower,
        upper,
        results,
    };
    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&output, serde_json::to_string_pretty(&report)?)?;
    info!("wrote {:?} ({} out of bound)", output, failures);

    Ok(())
}

fn reference(function: Function, x: f64) -> f64 {
    match function {
        Function::Erf => erf_sun(x),
        Function::Erfc => erfc_sun(x),
    }
}

fn validate_double(
    method: Method,
    function: Function,
    xs: &[f64],
) -> Result<MethodReport, ErfError> {
    let ys = FastErf::new()
        .method(method)
        .function(function)
        .build()?
        .eval_slice(xs)?;
    let errors: Vec<(f64, f64)> = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| (x, (y - reference(function, x)).abs()))
        .collect();
    Ok(summarize(method, function, Precision::Double, &errors))
}

fn validate_single(
    method: Method,
    function: Function,
    xs: &[f64],
) -> Result<MethodReport, ErfError> {
    let xf: Vec<f32> = xs.iter().map(|&x| x as f32).collect();
    let ys = FastErf::new()
        .method(method)
        .function(function)
        .build()?
        .eval_slice(&xf)?;
    let errors: Vec<(f64, f64)> = xf
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| {
            let x = x as f64;
            (x, (y as f64 - reference(function, x)).abs())
        })
        .collect();
    Ok(summarize(method, function, Precision::Single, &errors))
}

fn summarize(
    method: Method,
    function: Function,
    precision: Precision,
    errors: &[(f64, f64)],
) -> MethodReport {
    let (argmax, max_abs_error) = errors
        .iter()
        .copied()
        .fold((0.0, 0.0), |best, e| if e.1 > best.1 { e } else { best });
    let mean_abs_error = errors.iter().map(|e| e.1).sum::<f64>() / errors.len() as f64;

    // erfc inherits the erf bound up to one rounding of 1 - erf.
    let documented_bound = method.max_error_in(precision) + 2.0 * precision.epsilon();

    info!(
        "{:<32} {:<4} {:<6} max {:.3e} mean {:.3e}",
        method.name(),
        function.name(),
        precision.name(),
        max_abs_error,
        mean_abs_error
    );

    MethodReport {
        method: method.name().to_string(),
        description: method.description().to_string(),
        precision: precision.name().to_string(),
        function: function.name().to_string(),
        max_abs_error,
        argmax,
        mean_abs_error,
        documented_bound,
        within_bound: max_abs_error <= documented_bound,
    }
}
