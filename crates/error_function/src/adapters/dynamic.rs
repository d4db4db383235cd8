//! Dynamically-typed inputs.
//!
//! ## Purpose
//!
//! Host runtimes (the Python extension in particular) hand over values whose
//! type is only known at run time: an integer, a float, a list of numbers or
//! a typed one-dimensional array. This adapter models that calling convention
//! so it can be implemented and tested without the host.
//!
//! ## Key concepts
//!
//! | Input                 | Evaluated in | Output            |
//! |-----------------------|--------------|-------------------|
//! | `Integer` / `Real`    | double       | `Real`            |
//! | `List`                | double       | `List`            |
//! | `Float32` array       | single       | `Float32` array   |
//! | `Float64` array       | double       | `Float64` array   |
//! | `Int64` array         | double       | `Float64` array   |
//!
//! ## Invariants
//!
//! * Arrays must be non-empty; lists may be empty.
//! * A list fails on its first non-numeric element.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;

// Internal dependencies
use crate::engine::executor::ErfExecutor;
use crate::primitives::errors::ErfError;

// ============================================================================
// Value Types
// ============================================================================

/// A single element of a dynamically-typed list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer, widened to `f64` for evaluation.
    Integer(i64),

    /// A real number.
    Real(f64),

    /// Anything else, tagged with its type name.
    Other(&'static str),
}

impl Value {
    /// Numeric value, if any.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Integer(n) => Some(n as f64),
            Value::Real(x) => Some(x),
            Value::Other(_) => None,
        }
    }
}

/// Dynamically-typed evaluation input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DynamicInput<'a> {
    /// Integer scalar.
    Integer(i64),

    /// Real scalar.
    Real(f64),

    /// Heterogeneous list.
    List(&'a [Value]),

    /// Single-precision array.
    Float32(&'a [f32]),

    /// Double-precision array.
    Float64(&'a [f64]),

    /// Integer array.
    Int64(&'a [i64]),
}

impl DynamicInput<'_> {
    /// Short name of the input kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            DynamicInput::Integer(_) => "int",
            DynamicInput::Real(_) => "float",
            DynamicInput::List(_) => "list",
            DynamicInput::Float32(_) => "float32 array",
            DynamicInput::Float64(_) => "float64 array",
            DynamicInput::Int64(_) => "int64 array",
        }
    }
}

/// Dynamically-typed evaluation output.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicOutput {
    /// Real scalar.
    Real(f64),

    /// List of reals.
    List(Vec<f64>),

    /// Single-precision array.
    Float32(Vec<f32>),

    /// Double-precision array.
    Float64(Vec<f64>),
}

impl DynamicOutput {
    /// Number of values held.
    pub fn len(&self) -> usize {
        match self {
            DynamicOutput::Real(_) => 1,
            DynamicOutput::List(v) | DynamicOutput::Float64(v) => v.len(),
            DynamicOutput::Float32(v) => v.len(),
        }
    }

    /// Returns `true` if no values are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Evaluate a dynamically-typed input.
pub fn eval_dynamic(
    executor: &ErfExecutor,
    input: DynamicInput<'_>,
) -> Result<DynamicOutput, ErfError> {
    debug!(
        "{}: evaluating {} input with {}",
        executor.config().function.name(),
        input.kind(),
        executor.config().method
    );

    match input {
        DynamicInput::Integer(n) => Ok(DynamicOutput::Real(executor.eval(n as f64))),
        DynamicInput::Real(x) => Ok(DynamicOutput::Real(executor.eval(x))),
        DynamicInput::List(values) => eval_list(executor, values).map(DynamicOutput::List),
        DynamicInput::Float32(xs) => executor.eval_slice(xs).map(DynamicOutput::Float32),
        DynamicInput::Float64(xs) => executor.eval_slice(xs).map(DynamicOutput::Float64),
        DynamicInput::Int64(ns) => executor.eval_integers(ns).map(DynamicOutput::Float64),
    }
}

/// Evaluate each element of a list, failing on the first non-number.
pub fn eval_list(executor: &ErfExecutor, values: &[Value]) -> Result<Vec<f64>, ErfError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match *value {
            Value::Other(found) => Err(ErfError::InvalidListElement { index, found }),
            Value::Integer(n) => Ok(executor.eval(n as f64)),
            Value::Real(x) => Ok(executor.eval(x)),
        })
        .collect()
}
