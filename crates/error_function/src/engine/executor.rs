//! Serial evaluation over slices.
//!
//! ## Purpose
//!
//! Element-wise evaluation of a method over contiguous inputs, either into a
//! fresh vector or into a caller-supplied buffer. Integer inputs are widened
//! to `f64` first.
//!
//! ## Design notes
//!
//! * **Validation first**: Every entry point validates before touching data.
//! * **Promotion logged once**: Single-precision evaluation of a double-only
//!   method is traced per call, not per element.
//!
//! ## Invariants
//!
//! * `output[i] = f(input[i])` for every i; output order matches input order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::engine::method::{Function, Method};
use crate::engine::validator::Validator;
use crate::primitives::errors::ErfError;
use crate::primitives::precision::Precision;

/// Configuration of a single evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErfConfig {
    /// Algorithm to run.
    pub method: Method,

    /// erf or erfc.
    pub function: Function,
}

/// Serial executor for an [`ErfConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ErfExecutor {
    config: ErfConfig,
}

impl ErfExecutor {
    /// Create an executor.
    pub fn new(config: ErfConfig) -> Self {
        Self { config }
    }

    /// The executor's configuration.
    #[inline]
    pub fn config(&self) -> ErfConfig {
        self.config
    }

    /// Evaluate a single value.
    #[inline]
    pub fn eval<T: Float>(&self, x: T) -> T {
        self.config.method.evaluate(self.config.function, x)
    }

    /// Evaluate every element of `input` into a new vector.
    pub fn eval_slice<T: Float>(&self, input: &[T]) -> Result<Vec<T>, ErfError> {
        Validator::validate_non_empty(input)?;
        self.trace_promotion::<T>(input.len());
        Ok(input.iter().map(|&x| self.eval(x)).collect())
    }

    /// Evaluate every element of `input` into `output`.
    pub fn eval_into<T: Float>(&self, input: &[T], output: &mut [T]) -> Result<(), ErfError> {
        Validator::validate_buffers(input, output)?;
        self.trace_promotion::<T>(input.len());
        for (out, &x) in output.iter_mut().zip(input) {
            *out = self.eval(x);
        }
        Ok(())
    }

    /// Evaluate integers, widened to `f64`.
    pub fn eval_integers(&self, input: &[i64]) -> Result<Vec<f64>, ErfError> {
        Validator::validate_non_empty(input)?;
        Ok(input.iter().map(|&n| self.eval(n as f64)).collect())
    }

    /// Trace when `T` forces a double-only method through promotion.
    pub fn trace_promotion<T: Float>(&self, len: usize) {
        let precision = Precision::of::<T>();
        if !self.config.method.supports(precision) {
            trace!(
                "{}: no {} precision implementation, promoting {} values to double",
                self.config.method,
                precision.name(),
                len
            );
        }
    }
}
