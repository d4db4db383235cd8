//! Input abstractions for parallel erf evaluation.
//!
//! ## Purpose
//!
//! This module lets `eval_slice` accept slices, vectors and one-dimensional
//! ndarray arrays through a single trait.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Implementations hand out a view of the existing buffer.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the container, in order.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from error_function crate
use error_function::internals::primitives::errors::ErfError;

/// Trait for containers that can be evaluated element-wise.
pub trait ErfInput<T: Float> {
    /// View the input as a contiguous slice.
    fn as_erf_slice(&self) -> Result<&[T], ErfError>;
}

impl<T: Float> ErfInput<T> for [T] {
    fn as_erf_slice(&self) -> Result<&[T], ErfError> {
        Ok(self)
    }
}

impl<T: Float> ErfInput<T> for Vec<T> {
    fn as_erf_slice(&self) -> Result<&[T], ErfError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> ErfInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_erf_slice(&self) -> Result<&[T], ErfError> {
        self.as_slice().ok_or_else(|| {
            ErfError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
