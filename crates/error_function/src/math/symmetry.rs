//! Symmetry and edge-case handling shared by every approximation.
//!
//! ## Purpose
//!
//! Most approximations are only defined (or only accurate) for positive,
//! finite, non-tiny arguments. The helpers here extend such a core to the
//! whole real line using erf(-x) = -erf(x) and erfc(-x) = 2 - erfc(x).
//!
//! ## Key concepts
//!
//! * **Core**: erf(x) for x in [sqrt(eps), SATURATION).
//! * **Tail**: erfc(x) for x >= sqrt(eps), finite or infinite.
//!
//! ## Invariants
//!
//! * NaN propagates unchanged.
//! * erf(+/-inf) = +/-1, erfc(+inf) = 0, erfc(-inf) = 2.
//! * |x| >= SATURATION gives erf(x) = +/-1 exactly.
//! * |x| < sqrt(eps) gives erf(x) = 2x/sqrt(pi), so erf(+/-0) = +/-0.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constants::{SATURATION, TWO_OVER_SQRT_PI, constant, small_argument};

/// Extend an erf core on positive arguments to an odd function on the real line.
#[inline]
pub fn odd_erf<T: Float, F>(x: T, core: F) -> T
where
    F: Fn(T) -> T,
{
    if x.is_nan() {
        return x;
    }

    let ax = x.abs();
    let y = if ax < small_argument::<T>() {
        constant::<T>(TWO_OVER_SQRT_PI) * ax
    } else if ax >= constant::<T>(SATURATION) {
        T::one()
    } else {
        core(ax)
    };

    if x.is_sign_negative() { -y } else { y }
}

/// Build erf from a tail function computing erfc on positive arguments.
#[inline]
pub fn erf_from_tail<T: Float, F>(x: T, tail: F) -> T
where
    F: Fn(T) -> T,
{
    odd_erf(x, |ax| T::one() - tail(ax))
}

/// Build erfc from a tail function computing erfc on positive arguments.
#[inline]
pub fn erfc_from_tail<T: Float, F>(x: T, tail: F) -> T
where
    F: Fn(T) -> T,
{
    if x.is_nan() {
        return x;
    }

    let ax = x.abs();
    if ax < small_argument::<T>() {
        return T::one() - constant::<T>(TWO_OVER_SQRT_PI) * x;
    }

    // Infinite arguments: e^{-x^2} vanishes in every tail formula.
    let upper = if ax.is_infinite() { T::zero() } else { tail(ax) };

    if x.is_sign_negative() {
        constant::<T>(2.0) - upper
    } else {
        upper
    }
}

/// Build erfc from an erf core when the method has no natural tail form.
#[inline]
pub fn erfc_from_core<T: Float, F>(x: T, core: F) -> T
where
    F: Fn(T) -> T,
{
    T::one() - odd_erf(x, core)
}
