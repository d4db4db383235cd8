//! High-level API for erf evaluation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! selects the algorithm and function, producing an evaluator that works on
//! scalars, slices, integer slices and dynamically-typed inputs.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every parameter has a default (`Reference`, `Erf`).
//! * **Validated**: Misuse (duplicates, unknown names) is deferred to `build()`.
//! * **Type-Safe**: Evaluation is generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`ErfBuilder`] via `Erf::new()`.
//! 2. Chain configuration methods (`.method()`, `.function()`).
//! 3. Call `.build()` to get an [`ErfEvaluator`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::adapters::dynamic::eval_dynamic;
use crate::engine::executor::ErfExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::dynamic::{DynamicInput, DynamicOutput, Value};
pub use crate::engine::executor::ErfConfig;
pub use crate::engine::method::{Function, Method};
pub use crate::primitives::errors::ErfError;
pub use crate::primitives::precision::Precision;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an erf evaluator.
#[derive(Debug, Clone, Default)]
pub struct ErfBuilder {
    /// Algorithm (default: `Reference`).
    pub method: Option<Method>,

    /// erf or erfc (default: `Erf`).
    pub function: Option<Function>,

    /// Deferred error from name lookup.
    #[doc(hidden)]
    pub deferred_error: Option<ErfError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl ErfBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm.
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the algorithm by name (see [`Method::from_name`]).
    pub fn method_name(self, name: &str) -> Self {
        match Method::from_name(name) {
            Ok(method) => self.method(method),
            Err(err) => {
                let mut builder = self;
                builder.deferred_error = Some(err);
                builder
            }
        }
    }

    /// Set whether erf or erfc is evaluated.
    pub fn function(mut self, function: Function) -> Self {
        if self.function.is_some() {
            self.duplicate_param = Some("function");
        }
        self.function = Some(function);
        self
    }

    /// Evaluate the complementary error function.
    pub fn complementary(self) -> Self {
        self.function(Function::Erfc)
    }

    /// Validate the configuration and create the evaluator.
    pub fn build(self) -> Result<ErfEvaluator, ErfError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = ErfConfig {
            method: self.method.unwrap_or_default(),
            function: self.function.unwrap_or_default(),
        };
        debug!(
            "built {} evaluator using {}",
            config.function.name(),
            config.method
        );

        Ok(ErfEvaluator {
            executor: ErfExecutor::new(config),
        })
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Configured erf/erfc evaluator.
#[derive(Debug, Clone, Copy)]
pub struct ErfEvaluator {
    executor: ErfExecutor,
}

impl ErfEvaluator {
    /// Algorithm in use.
    #[inline]
    pub fn method(&self) -> Method {
        self.executor.config().method
    }

    /// Function in use.
    #[inline]
    pub fn function(&self) -> Function {
        self.executor.config().function
    }

    /// Evaluation configuration.
    #[inline]
    pub fn config(&self) -> ErfConfig {
        self.executor.config()
    }

    /// Evaluate at a single point.
    #[inline]
    pub fn eval<T: Float>(&self, x: T) -> T {
        self.executor.eval(x)
    }

    /// Evaluate every element of a non-empty slice.
    pub fn eval_slice<T: Float>(&self, input: &[T]) -> Result<Vec<T>, ErfError> {
        self.executor.eval_slice(input)
    }

    /// Evaluate into a caller-supplied buffer of the same length.
    pub fn eval_into<T: Float>(&self, input: &[T], output: &mut [T]) -> Result<(), ErfError> {
        self.executor.eval_into(input, output)
    }

    /// Evaluate integers, widened to `f64`.
    pub fn eval_integers(&self, input: &[i64]) -> Result<Vec<f64>, ErfError> {
        self.executor.eval_integers(input)
    }

    /// Evaluate a dynamically-typed input.
    pub fn eval_dynamic(&self, input: DynamicInput<'_>) -> Result<DynamicOutput, ErfError> {
        eval_dynamic(&self.executor, input)
    }
}
