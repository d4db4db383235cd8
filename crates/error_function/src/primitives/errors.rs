//! Error types for error-function evaluation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when evaluating
//! erf/erfc over containers or dynamically-typed inputs, and when configuring
//! an evaluator through the builder.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending lengths, indices or names.
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **No-std**: Dynamic messages use `alloc` when `std` is disabled.
//!
//! ## Invariants
//!
//! * Scalar evaluation never fails; only container and configuration paths
//!   produce errors.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for erf evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ErfError {
    /// An array input holds no elements.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Output buffer length does not match the input length.
    MismatchedLengths {
        /// Number of input elements.
        input: usize,
        /// Number of output slots.
        output: usize,
    },

    /// Array input has more (or fewer) than one dimension.
    NotOneDimensional {
        /// Number of dimensions found.
        ndim: usize,
    },

    /// A list element is not a real number.
    InvalidListElement {
        /// Position of the offending element.
        index: usize,
        /// Type name of the offending element.
        found: &'static str,
    },

    /// The element type of an input is not supported.
    UnsupportedType(String),

    /// No method is registered under the given name.
    UnknownMethod(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ErfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input array is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::MismatchedLengths { input, output } => {
                write!(
                    f,
                    "Length mismatch: input has {input} elements, output has {output}"
                )
            }
            Self::NotOneDimensional { ndim } => {
                write!(f, "Input is not 1-dimensional (got {ndim} dimensions)")
            }
            Self::InvalidListElement { index, found } => {
                write!(
                    f,
                    "Input list must contain real numbers only (element {index} is {found})"
                )
            }
            Self::UnsupportedType(name) => write!(f, "Unsupported input type: {name}"),
            Self::UnknownMethod(name) => write!(f, "Unknown method: {name}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ErfError {}
