#![cfg(feature = "dev")]
//! Tests for dynamically-typed inputs.
//!
//! ## Test Organization
//!
//! 1. **Scalars** - Integers and reals
//! 2. **Lists** - Mixed numbers, invalid elements, empty lists
//! 3. **Arrays** - Typed arrays and their output types

use approx::assert_relative_eq;

use error_function::internals::adapters::dynamic::{
    DynamicInput, DynamicOutput, Value, eval_dynamic, eval_list,
};
use error_function::internals::algorithms::sun::erf_sun;
use error_function::internals::engine::executor::{ErfConfig, ErfExecutor};
use error_function::internals::engine::method::{Function, Method};
use error_function::internals::primitives::errors::ErfError;

fn executor(method: Method) -> ErfExecutor {
    ErfExecutor::new(ErfConfig {
        method,
        function: Function::Erf,
    })
}

// ============================================================================
// Scalar Tests
// ============================================================================

/// Test scalars produce a real.
#[test]
fn test_scalars() {
    let exec = executor(Method::Reference);

    assert_eq!(
        eval_dynamic(&exec, DynamicInput::Integer(1)).unwrap(),
        DynamicOutput::Real(erf_sun(1.0))
    );
    assert_eq!(
        eval_dynamic(&exec, DynamicInput::Real(-0.5)).unwrap(),
        DynamicOutput::Real(erf_sun(-0.5))
    );
    assert_eq!(DynamicOutput::Real(0.0).len(), 1);
}

// ============================================================================
// List Tests
// ============================================================================

/// Test lists of integers and reals.
#[test]
fn test_mixed_list() {
    let exec = executor(Method::Winitzki);
    let values = [Value::Integer(2), Value::Real(0.25), Value::Integer(-1)];

    let out = eval_dynamic(&exec, DynamicInput::List(&values)).unwrap();
    match out {
        DynamicOutput::List(ys) => {
            assert_eq!(ys.len(), 3);
            assert_relative_eq!(ys[0], Method::Winitzki.erf(2.0));
            assert_relative_eq!(ys[1], Method::Winitzki.erf(0.25));
            assert_relative_eq!(ys[2], -Method::Winitzki.erf(1.0));
        }
        other => panic!("expected a list, got {:?}", other),
    }
}

/// Test the first non-number in a list is reported.
#[test]
fn test_invalid_list_element() {
    let exec = executor(Method::Reference);
    let values = [
        Value::Real(0.5),
        Value::Other("str"),
        Value::Other("NoneType"),
    ];

    assert_eq!(
        eval_dynamic(&exec, DynamicInput::List(&values)),
        Err(ErfError::InvalidListElement {
            index: 1,
            found: "str"
        })
    );
    assert_eq!(Value::Other("str").as_f64(), None);
    assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
}

/// Test an empty list yields an empty list.
#[test]
fn test_empty_list() {
    let exec = executor(Method::Reference);
    assert_eq!(eval_list(&exec, &[]), Ok(Vec::new()));

    let out = eval_dynamic(&exec, DynamicInput::List(&[])).unwrap();
    assert!(out.is_empty());
}

// ============================================================================
// Array Tests
// ============================================================================

/// Test typed arrays keep (or widen) their element type.
#[test]
fn test_typed_arrays() {
    let exec = executor(Method::NumericalRecipes);

    let out = eval_dynamic(&exec, DynamicInput::Float32(&[0.5, -0.5])).unwrap();
    match out {
        DynamicOutput::Float32(ys) => assert_eq!(ys[0], -ys[1]),
        other => panic!("expected float32, got {:?}", other),
    }

    let out = eval_dynamic(&exec, DynamicInput::Float64(&[0.5])).unwrap();
    assert_eq!(
        out,
        DynamicOutput::Float64(vec![Method::NumericalRecipes.erf(0.5)])
    );

    let out = eval_dynamic(&exec, DynamicInput::Int64(&[0, 1])).unwrap();
    assert_eq!(
        out,
        DynamicOutput::Float64(vec![0.0, Method::NumericalRecipes.erf(1.0)])
    );
}

/// Test empty arrays are rejected.
#[test]
fn test_empty_arrays() {
    let exec = executor(Method::Reference);
    assert_eq!(
        eval_dynamic(&exec, DynamicInput::Float64(&[])),
        Err(ErfError::EmptyInput)
    );
    assert_eq!(
        eval_dynamic(&exec, DynamicInput::Int64(&[])),
        Err(ErfError::EmptyInput)
    );
}

/// Test input kind names.
#[test]
fn test_input_kinds() {
    assert_eq!(DynamicInput::Integer(0).kind(), "int");
    assert_eq!(DynamicInput::List(&[]).kind(), "list");
    assert_eq!(DynamicInput::Float32(&[]).kind(), "float32 array");
}
