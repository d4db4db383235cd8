#![cfg(feature = "dev")]
//! Tests for method dispatch, validation and the serial executor.
//!
//! ## Test Organization
//!
//! 1. **Method Metadata** - Names, lookup, bounds, precision support
//! 2. **Dispatch** - Promotion of double-only methods
//! 3. **Validator** - Empty, mismatched, dimensionality, duplicates
//! 4. **Executor** - Slices, buffers, integers

use approx::assert_relative_eq;

use error_function::internals::algorithms::sun::{erf_sun, erfc_sun};
use error_function::internals::algorithms::winitzki::erf_winitzki;
use error_function::internals::engine::executor::{ErfConfig, ErfExecutor};
use error_function::internals::engine::method::{Function, Method};
use error_function::internals::engine::validator::Validator;
use error_function::internals::primitives::errors::ErfError;
use error_function::internals::primitives::precision::Precision;

// ============================================================================
// Method Metadata Tests
// ============================================================================

/// Test names round-trip through lookup.
#[test]
fn test_method_names_round_trip() {
    for method in Method::ALL {
        assert_eq!(Method::from_name(method.name()), Ok(method));
        assert_eq!(method.to_string(), method.name());
        assert!(!method.description().is_empty());
    }
    assert_eq!(Method::all(), &Method::ALL[..]);
}

/// Test lookup is case-insensitive and accepts aliases.
#[test]
fn test_method_aliases() {
    assert_eq!(Method::from_name("WINITZKI"), Ok(Method::Winitzki));
    assert_eq!(Method::from_name(" nr "), Ok(Method::NumericalRecipes));
    assert_eq!(Method::from_name("as"), Ok(Method::AbramowitzStegun));
    assert_eq!(Method::from_name("rational"), Ok(Method::AbramowitzStegunRational));
    assert_eq!(Method::from_name("kl"), Ok(Method::KaragiannidisLioumpas));
    assert_eq!(Method::from_name("fdlibm"), Ok(Method::Sun));
    assert_eq!(Method::from_name("libm"), Ok(Method::Reference));
    assert_eq!(
        Method::from_name("taylor"),
        Err(ErfError::UnknownMethod("taylor".to_string()))
    );
}

/// Test error bounds are ordered by precision and positive.
#[test]
fn test_method_bounds() {
    for method in Method::ALL {
        let double = method.max_error_in(Precision::Double);
        let single = method.max_error_in(Precision::Single);
        assert_eq!(double, method.max_error());
        assert!(double > 0.0 && double < 0.05, "{}", method);
        assert!(single >= double, "{}", method);
    }
    assert_eq!(Method::default(), Method::Reference);
}

/// Test native precision support.
#[test]
fn test_precision_support() {
    assert!(!Method::Sun.supports(Precision::Single));
    assert!(!Method::Reference.supports(Precision::Single));
    assert!(Method::Winitzki.supports(Precision::Single));
    for method in Method::ALL {
        assert!(method.supports(Precision::Double));
    }

    assert_eq!(Precision::of::<f32>(), Precision::Single);
    assert_eq!(Precision::of::<f64>(), Precision::Double);
    assert_eq!(Precision::Single.name(), "single");
    assert_eq!(Precision::Double.epsilon(), f64::EPSILON);
}

// ============================================================================
// Dispatch Tests
// ============================================================================

/// Test double-only methods are promoted for single precision.
#[test]
fn test_single_precision_promotion() {
    for &x in &[-2.5_f32, -0.3, 0.7, 1.9] {
        assert_eq!(Method::Sun.erf(x), erf_sun(x as f64) as f32);
        assert_eq!(Method::Reference.erfc(x), erfc_sun(x as f64) as f32);
    }
}

/// Test dispatch reaches the right algorithm.
#[test]
fn test_dispatch() {
    assert_eq!(Method::Winitzki.evaluate(Function::Erf, 0.4_f64), erf_winitzki(0.4_f64));
    assert_eq!(Method::Sun.evaluate(Function::Erfc, 0.4_f64), erfc_sun(0.4));
    assert_eq!(Function::default(), Function::Erf);
    assert_eq!(Function::Erfc.name(), "erfc");
}

// ============================================================================
// Validator Tests
// ============================================================================

/// Test validation rules.
#[test]
fn test_validator() {
    let empty: [f64; 0] = [];
    assert_eq!(Validator::validate_non_empty(&empty), Err(ErfError::EmptyInput));
    assert!(Validator::validate_non_empty(&[1.0]).is_ok());

    assert_eq!(
        Validator::validate_buffers(&[1.0, 2.0], &[0.0]),
        Err(ErfError::MismatchedLengths {
            input: 2,
            output: 1
        })
    );
    assert_eq!(
        Validator::validate_buffers::<f64, f64>(&[], &[]),
        Err(ErfError::EmptyInput)
    );

    assert!(Validator::validate_ndim(1).is_ok());
    assert_eq!(
        Validator::validate_ndim(2),
        Err(ErfError::NotOneDimensional { ndim: 2 })
    );
    assert_eq!(
        Validator::validate_ndim(0),
        Err(ErfError::NotOneDimensional { ndim: 0 })
    );

    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("method")),
        Err(ErfError::DuplicateParameter { parameter: "method" })
    );
}

// ============================================================================
// Executor Tests
// ============================================================================

fn executor(method: Method, function: Function) -> ErfExecutor {
    ErfExecutor::new(ErfConfig { method, function })
}

/// Test slice evaluation preserves order and values.
#[test]
fn test_executor_slices() {
    let exec = executor(Method::Sun, Function::Erf);
    let xs = [-1.0, 0.0, 0.5, 2.0];

    let ys = exec.eval_slice(&xs).unwrap();
    assert_eq!(ys.len(), xs.len());
    for (y, &x) in ys.iter().zip(&xs) {
        assert_eq!(*y, erf_sun(x));
    }

    let mut out = [0.0; 4];
    exec.eval_into(&xs, &mut out).unwrap();
    assert_eq!(out.to_vec(), ys);

    let mut short = [0.0; 3];
    assert!(matches!(
        exec.eval_into(&xs, &mut short),
        Err(ErfError::MismatchedLengths { input: 4, output: 3 })
    ));
    assert_eq!(exec.eval_slice::<f32>(&[]), Err(ErfError::EmptyInput));
}

/// Test integer inputs are widened to double.
#[test]
fn test_executor_integers() {
    let exec = executor(Method::Reference, Function::Erfc);
    let ys = exec.eval_integers(&[-2, 0, 3]).unwrap();
    assert_relative_eq!(ys[0], 1.9953222650189527, max_relative = 1e-15);
    assert_eq!(ys[1], 1.0);
    assert_relative_eq!(ys[2], 2.2090496998585438e-05, max_relative = 1e-14);
    assert_eq!(exec.eval_integers(&[]), Err(ErfError::EmptyInput));
}

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(ErfError::EmptyInput.to_string(), "Input array is empty");
    assert_eq!(
        ErfError::NotOneDimensional { ndim: 3 }.to_string(),
        "Input is not 1-dimensional (got 3 dimensions)"
    );
    assert_eq!(
        ErfError::InvalidListElement {
            index: 1,
            found: "str"
        }
        .to_string(),
        "Input list must contain real numbers only (element 1 is str)"
    );
    assert_eq!(
        ErfError::UnknownMethod("x".into()).to_string(),
        "Unknown method: x"
    );
}
