//! Floating-point precision tags.
//!
//! ## Purpose
//!
//! Identifies the float format a value is evaluated in, so that methods can
//! advertise which formats they implement natively and the dispatcher can
//! promote the rest.
//!
//! ## Invariants
//!
//! * `Precision::of::<T>()` is `Single` for 32-bit floats and `Double`
//!   for every wider format.
//!
//! ## Non-goals
//!
//! * Extended (80/128-bit) formats are not represented; they evaluate as `Double`.

// External dependencies
use core::mem::size_of;
use num_traits::Float;

/// Floating-point format used for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// IEEE-754 binary32 (`f32`).
    Single,

    /// IEEE-754 binary64 (`f64`).
    #[default]
    Double,
}

impl Precision {
    /// Precision of the float type `T`.
    #[inline]
    pub fn of<T: Float>() -> Self {
        if size_of::<T>() <= size_of::<f32>() {
            Precision::Single
        } else {
            Precision::Double
        }
    }

    /// Get the name of the precision.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Precision::Single => "single",
            Precision::Double => "double",
        }
    }

    /// Machine epsilon of the format.
    #[inline]
    pub const fn epsilon(&self) -> f64 {
        match self {
            Precision::Single => f32::EPSILON as f64,
            Precision::Double => f64::EPSILON,
        }
    }
}
