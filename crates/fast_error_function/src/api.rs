//! High-level API for erf evaluation with parallel execution support.
//!
//! ## Purpose
//!
//! This module wraps the `error_function` builder with the knobs needed for
//! multi-threaded evaluation of large arrays.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `ErfBuilder` for method and function.
//! * **Parallel-First**: Defaults to parallel execution for large inputs.
//! * **Threshold**: Inputs shorter than `min_parallel_len` stay serial.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FastErfBuilder`] via `FastErf::new()`.
//! 2. Chain configuration methods (`.method()`, `.parallel()`, ...).
//! 3. Call `.build()` to get a [`FastErfEvaluator`].

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::{eval_integers_parallel, eval_into_parallel, eval_slice_parallel};

// External dependencies
use log::debug;
use ndarray::{Array1, ArrayBase, Data, IxDyn};
use num_traits::Float;

// Export dependencies from error_function crate
use error_function::internals::engine::executor::ErfExecutor;
use error_function::internals::engine::validator::Validator;

// Internal dependencies
use crate::input::ErfInput;

// Publicly re-exported types
pub use error_function::internals::api::{
    DynamicInput, DynamicOutput, ErfBuilder, ErfConfig, ErfError, ErfEvaluator, Function, Method,
    Precision, Value,
};

/// Default input length below which evaluation stays serial.
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 4096;

// ============================================================================
// Builder
// ============================================================================

/// Builder for an erf evaluator with parallel support.
#[derive(Debug, Clone, Default)]
pub struct FastErfBuilder {
    /// Base builder from the error_function crate.
    pub base: ErfBuilder,

    /// Whether large inputs are evaluated in parallel (default: `true`).
    pub parallel: Option<bool>,

    /// Minimum input length for parallel evaluation (default: 4096).
    pub min_parallel_len: Option<usize>,
}

impl FastErfBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm.
    pub fn method(mut self, method: Method) -> Self {
        self.base = self.base.method(method);
        self
    }

    /// Set the algorithm by name.
    pub fn method_name(mut self, name: &str) -> Self {
        self.base = self.base.method_name(name);
        self
    }

    /// Set whether erf or erfc is evaluated.
    pub fn function(mut self, function: Function) -> Self {
        self.base = self.base.function(function);
        self
    }

    /// Evaluate the complementary error function.
    pub fn complementary(mut self) -> Self {
        self.base = self.base.complementary();
        self
    }

    /// Enable or disable parallel execution.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Set the minimum input length for parallel execution.
    pub fn min_parallel_len(mut self, len: usize) -> Self {
        if self.min_parallel_len.is_some() {
            self.base.duplicate_param = Some("min_parallel_len");
        }
        self.min_parallel_len = Some(len);
        self
    }

    /// Validate the configuration and create the evaluator.
    pub fn build(self) -> Result<FastErfEvaluator, ErfError> {
        let base = self.base.build()?;

        let parallel = self.parallel.unwrap_or(cfg!(feature = "cpu"));
        let min_parallel_len = self.min_parallel_len.unwrap_or(DEFAULT_MIN_PARALLEL_LEN);
        debug!(
            "parallel: {}, min_parallel_len: {}",
            parallel, min_parallel_len
        );

        Ok(FastErfEvaluator {
            base,
            executor: ErfExecutor::new(base.config()),
            parallel,
            min_parallel_len,
        })
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Configured erf/erfc evaluator with parallel execution.
#[derive(Debug, Clone, Copy)]
pub struct FastErfEvaluator {
    base: ErfEvaluator,
    executor: ErfExecutor,
    parallel: bool,
    min_parallel_len: usize,
}

impl FastErfEvaluator {
    /// Algorithm in use.
    #[inline]
    pub fn method(&self) -> Method {
        self.base.method()
    }

    /// Function in use.
    #[inline]
    pub fn function(&self) -> Function {
        self.base.function()
    }

    /// Whether large inputs are evaluated in parallel.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Minimum input length for parallel evaluation.
    #[inline]
    pub fn min_parallel_len(&self) -> usize {
        self.min_parallel_len
    }

    /// Returns `true` if an input of `len` elements is split across threads.
    #[inline]
    pub fn runs_parallel(&self, len: usize) -> bool {
        cfg!(feature = "cpu") && self.parallel && len >= self.min_parallel_len
    }

    /// Evaluate at a single point.
    #[inline]
    pub fn eval<T: Float>(&self, x: T) -> T {
        self.base.eval(x)
    }

    /// Evaluate every element of a slice, vector or 1-D array.
    pub fn eval_slice<T, I>(&self, input: &I) -> Result<Vec<T>, ErfError>
    where
        T: Float + Send + Sync,
        I: ErfInput<T> + ?Sized,
    {
        let xs = input.as_erf_slice()?;
        Validator::validate_non_empty(xs)?;

        #[cfg(feature = "cpu")]
        if self.runs_parallel(xs.len()) {
            return Ok(eval_slice_parallel(&self.executor, xs));
        }

        self.executor.eval_slice(xs)
    }

    /// Evaluate into a caller-supplied buffer of the same length.
    pub fn eval_into<T>(&self, input: &[T], output: &mut [T]) -> Result<(), ErfError>
    where
        T: Float + Send + Sync,
    {
        Validator::validate_buffers(input, output)?;

        #[cfg(feature = "cpu")]
        if self.runs_parallel(input.len()) {
            eval_into_parallel(&self.executor, input, output);
            return Ok(());
        }

        self.executor.eval_into(input, output)
    }

    /// Evaluate a dynamically-dimensioned array, which must be 1-D.
    ///
    /// Strided arrays are copied into a contiguous buffer first.
    pub fn eval_array_dyn<T, S>(&self, input: &ArrayBase<S, IxDyn>) -> Result<Array1<T>, ErfError>
    where
        T: Float + Send + Sync,
        S: Data<Elem = T>,
    {
        Validator::validate_ndim(input.ndim())?;

        let ys = match input.as_slice() {
            Some(xs) => self.eval_slice(xs)?,
            None => {
                let xs: Vec<T> = input.iter().copied().collect();
                self.eval_slice(&xs)?
            }
        };
        Ok(Array1::from_vec(ys))
    }

    /// Evaluate a dynamically-dimensioned integer array, which must be 1-D.
    pub fn eval_integer_array_dyn<S>(&self, input: &ArrayBase<S, IxDyn>) -> Result<Array1<f64>, ErfError>
    where
        S: Data<Elem = i64>,
    {
        Validator::validate_ndim(input.ndim())?;

        let ys = match input.as_slice() {
            Some(ns) => self.eval_integers(ns)?,
            None => {
                let ns: Vec<i64> = input.iter().copied().collect();
                self.eval_integers(&ns)?
            }
        };
        Ok(Array1::from_vec(ys))
    }

    /// Evaluate integers, widened to `f64`.
    pub fn eval_integers(&self, input: &[i64]) -> Result<Vec<f64>, ErfError> {
        Validator::validate_non_empty(input)?;

        #[cfg(feature = "cpu")]
        if self.runs_parallel(input.len()) {
            return Ok(eval_integers_parallel(&self.executor, input));
        }

        self.executor.eval_integers(input)
    }

    /// Evaluate a dynamically-typed input; typed arrays may run in parallel.
    pub fn eval_dynamic(&self, input: DynamicInput<'_>) -> Result<DynamicOutput, ErfError> {
        match input {
            DynamicInput::Float32(xs) => {
                debug!("{}: evaluating {}", self.method(), input.kind());
                self.eval_slice(xs).map(DynamicOutput::Float32)
            }
            DynamicInput::Float64(xs) => {
                debug!("{}: evaluating {}", self.method(), input.kind());
                self.eval_slice(xs).map(DynamicOutput::Float64)
            }
            DynamicInput::Int64(ns) => {
                debug!("{}: evaluating {}", self.method(), input.kind());
                self.eval_integers(ns).map(DynamicOutput::Float64)
            }
            other => self.base.eval_dynamic(other),
        }
    }
}
