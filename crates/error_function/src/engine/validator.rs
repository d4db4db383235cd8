//! Input validation for erf evaluation.
//!
//! ## Purpose
//!
//! This module checks container inputs and builder state before evaluation:
//! non-empty arrays, matching output buffers, one-dimensional shapes and
//! single assignment of builder parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Values are not checked**: NaN and infinities are valid arguments.
//!
//! ## Non-goals
//!
//! * This module does not evaluate anything.

// Internal dependencies
use crate::primitives::errors::ErfError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for erf inputs and configuration.
pub struct Validator;

impl Validator {
    /// Validate that an array input holds at least one element.
    #[inline]
    pub fn validate_non_empty<T>(input: &[T]) -> Result<(), ErfError> {
        if input.is_empty() {
            return Err(ErfError::EmptyInput);
        }
        Ok(())
    }

    /// Validate an input slice against a caller-supplied output buffer.
    pub fn validate_buffers<T, U>(input: &[T], output: &[U]) -> Result<(), ErfError> {
        Self::validate_non_empty(input)?;
        if input.len() != output.len() {
            return Err(ErfError::MismatchedLengths {
                input: input.len(),
                output: output.len(),
            });
        }
        Ok(())
    }

    /// Validate that an array has exactly one dimension.
    #[inline]
    pub fn validate_ndim(ndim: usize) -> Result<(), ErfError> {
        if ndim != 1 {
            return Err(ErfError::NotOneDimensional { ndim });
        }
        Ok(())
    }

    /// Report a parameter set more than once on a builder.
    #[inline]
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), ErfError> {
        match duplicate {
            Some(parameter) => Err(ErfError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
