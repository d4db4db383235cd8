//! Abramowitz & Stegun rational approximation (formula 7.1.28).
//!
//! ```text
//! erfc(x) = 1 / (1 + a1 x + a2 x^2 + a3 x^3 + a4 x^4 + a5 x^5 + a6 x^6)^16
//! ```
//!
//! No exponential is evaluated; the sixteenth power is taken by four
//! successive squarings.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::polynomial::horner_monic;
use crate::math::symmetry::{erf_from_tail, erfc_from_tail};

const A: [f64; 6] = [
    0.070_523_078_4,
    0.042_282_012_3,
    0.009_270_527_2,
    0.000_152_014_3,
    0.000_276_567_2,
    0.000_043_063_8,
];

/// Documented maximum absolute error.
pub const MAX_ERROR: f64 = 3e-7;

#[inline]
fn tail<T: Float>(x: T) -> T {
    let mut d = horner_monic(x, &A);
    for _ in 0..4 {
        d = d * d;
    }
    T::one() / d
}

/// erf(x) via A&S 7.1.28.
#[inline]
pub fn erf_abramowitz_stegun_rational<T: Float>(x: T) -> T {
    erf_from_tail(x, tail)
}

/// erfc(x) via A&S 7.1.28.
#[inline]
pub fn erfc_abramowitz_stegun_rational<T: Float>(x: T) -> T {
    erfc_from_tail(x, tail)
}
