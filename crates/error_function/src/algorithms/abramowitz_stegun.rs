//! Abramowitz & Stegun exponential approximation (formula 7.1.26).
//!
//! ## Purpose
//!
//! Classic five-term approximation of erfc on [0, inf):
//!
//! ```text
//! erfc(x) = (a1 t + a2 t^2 + a3 t^3 + a4 t^4 + a5 t^5) e^{-x^2},  t = 1 / (1 + p x)
//! ```
//!
//! ## Invariants
//!
//! * |erf(x) - approx(x)| <= 1.5e-7 for all real x (in double precision).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constants::constant;
use crate::math::polynomial::horner;
use crate::math::symmetry::{erf_from_tail, erfc_from_tail};

/// Scale factor in t = 1 / (1 + p x).
const P: f64 = 0.327_591_1;

/// Coefficients a1..a5, applied as t (a1 + t (a2 + ...)).
const A: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

/// Documented maximum absolute error.
pub const MAX_ERROR: f64 = 1.5e-7;

#[inline]
fn tail<T: Float>(x: T) -> T {
    let t = T::one() / (T::one() + constant::<T>(P) * x);
    t * horner(t, &A) * (-x * x).exp()
}

/// erf(x) via A&S 7.1.26.
#[inline]
pub fn erf_abramowitz_stegun<T: Float>(x: T) -> T {
    erf_from_tail(x, tail)
}

/// erfc(x) via A&S 7.1.26.
#[inline]
pub fn erfc_abramowitz_stegun<T: Float>(x: T) -> T {
    erfc_from_tail(x, tail)
}
