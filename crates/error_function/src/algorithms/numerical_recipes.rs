//! Numerical Recipes `erfcc` (Chebyshev fit).
//!
//! ```text
//! t = 1 / (1 + x / 2)
//! erfc(x) = t exp(-x^2 - 1.26551223 + t (1.00002368 + t (0.37409196 + ...)))
//! ```
//!
//! The published fractional error is below 1.2e-7 everywhere.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constants::constant;
use crate::math::polynomial::horner;
use crate::math::symmetry::{erf_from_tail, erfc_from_tail};

/// Exponent polynomial in t, ascending order.
const C: [f64; 10] = [
    -1.265_512_23,
    1.000_023_68,
    0.374_091_96,
    0.096_784_18,
    -0.186_288_06,
    0.278_868_07,
    -1.135_203_98,
    1.488_515_87,
    -0.822_152_23,
    0.170_872_77,
];

/// Documented maximum absolute error.
pub const MAX_ERROR: f64 = 1.2e-7;

#[inline]
fn tail<T: Float>(x: T) -> T {
    let t = T::one() / (T::one() + constant::<T>(0.5) * x);
    t * (-x * x + horner(t, &C)).exp()
}

/// erf(x) via Numerical Recipes.
#[inline]
pub fn erf_numerical_recipes<T: Float>(x: T) -> T {
    erf_from_tail(x, tail)
}

/// erfc(x) via Numerical Recipes.
#[inline]
pub fn erfc_numerical_recipes<T: Float>(x: T) -> T {
    erfc_from_tail(x, tail)
}
