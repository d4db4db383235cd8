//! Polynomial evaluation.
//!
//! ## Purpose
//!
//! Horner-scheme evaluation of polynomials whose coefficients are stored in
//! ascending order of degree, as tabulated in the references the algorithms
//! come from.
//!
//! ## Invariants
//!
//! * `horner(x, &[]) == 0`.
//! * `horner(x, &[c0]) == c0`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constants::constant;

/// Evaluate `c[0] + c[1] x + ... + c[n] x^n` with Horner's scheme.
#[inline]
pub fn horner<T: Float>(x: T, coeffs: &[f64]) -> T {
    coeffs
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + constant::<T>(c))
}

/// Evaluate `1 + c[0] x + c[1] x^2 + ... + c[n] x^(n+1)`.
///
/// Denominators in the Sun and A&S rational forms carry an implicit leading 1.
#[inline]
pub fn horner_monic<T: Float>(x: T, coeffs: &[f64]) -> T {
    T::one() + x * horner(x, coeffs)
}
