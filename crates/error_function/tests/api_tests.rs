#![cfg(feature = "dev")]
//! Tests for the fluent builder and evaluator.
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, names, duplicates
//! 2. **Evaluator** - Scalars, slices, buffers, dynamic inputs

use approx::assert_abs_diff_eq;

use error_function::internals::algorithms::sun::{erf_sun, erfc_sun};
use error_function::internals::api::{
    DynamicInput, DynamicOutput, ErfBuilder, ErfError, Function, Method,
};

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let evaluator = ErfBuilder::new().build().unwrap();
    assert_eq!(evaluator.method(), Method::Reference);
    assert_eq!(evaluator.function(), Function::Erf);
    assert_eq!(evaluator.eval(0.5_f64), erf_sun(0.5));
}

/// Test selecting a method by name.
#[test]
fn test_builder_method_name() {
    let evaluator = ErfBuilder::new().method_name("Winitzki").build().unwrap();
    assert_eq!(evaluator.method(), Method::Winitzki);

    let err = ErfBuilder::new().method_name("chebyshev").build().unwrap_err();
    assert_eq!(err, ErfError::UnknownMethod("chebyshev".to_string()));
}

/// Test duplicate parameters are reported at build time.
#[test]
fn test_builder_duplicates() {
    let err = ErfBuilder::new()
        .method(Method::Sun)
        .method(Method::Winitzki)
        .build()
        .unwrap_err();
    assert_eq!(err, ErfError::DuplicateParameter { parameter: "method" });

    let err = ErfBuilder::new()
        .function(Function::Erf)
        .complementary()
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ErfError::DuplicateParameter {
            parameter: "function"
        }
    );
}

/// Test the complementary shorthand.
#[test]
fn test_builder_complementary() {
    let evaluator = ErfBuilder::new()
        .method(Method::Sun)
        .complementary()
        .build()
        .unwrap();
    assert_eq!(evaluator.function(), Function::Erfc);
    assert_eq!(evaluator.eval(2.0_f64), erfc_sun(2.0));
}

// ============================================================================
// Evaluator Tests
// ============================================================================

/// Test slices, buffers and integers through the evaluator.
#[test]
fn test_evaluator_containers() {
    let evaluator = ErfBuilder::new()
        .method(Method::AbramowitzStegun)
        .build()
        .unwrap();

    let xs = [-2.0_f32, 0.0, 2.0];
    let ys = evaluator.eval_slice(&xs).unwrap();
    assert_eq!(ys[0], -ys[2]);
    assert_eq!(ys[1], 0.0);

    let mut out = [0.0_f64; 2];
    evaluator.eval_into(&[0.3, 0.6], &mut out).unwrap();
    assert_abs_diff_eq!(out[0], erf_sun(0.3), epsilon = 1.5e-7);
    assert_abs_diff_eq!(out[1], erf_sun(0.6), epsilon = 1.5e-7);

    let ys = evaluator.eval_integers(&[1, -1]).unwrap();
    assert_eq!(ys[0], -ys[1]);
    assert_eq!(evaluator.config().method, Method::AbramowitzStegun);
}

/// Test dynamic inputs through the evaluator.
#[test]
fn test_evaluator_dynamic() {
    let evaluator = ErfBuilder::new().complementary().build().unwrap();
    assert_eq!(
        evaluator.eval_dynamic(DynamicInput::Integer(0)),
        Ok(DynamicOutput::Real(1.0))
    );
}
