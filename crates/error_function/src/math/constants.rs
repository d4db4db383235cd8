//! Mathematical constants shared by the erf algorithms.
//!
//! ## Purpose
//!
//! Central home for the constants every approximation needs, along with the
//! thresholds that define the shared edge-case policy.
//!
//! ## Design notes
//!
//! * Constants are stored as `f64` and converted into the working type with
//!   [`constant`]; conversion into `f32`/`f64` cannot fail.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Square root of pi.
pub const SQRT_PI: f64 = 1.772_453_850_905_516_027_298_167_483_341_145_182_8_f64;

/// 2 / sqrt(pi), the slope of erf at the origin.
pub const TWO_OVER_SQRT_PI: f64 = 1.128_379_167_095_512_573_896_158_903_121_545_171_7_f64;

/// 4 / pi.
pub const FOUR_OVER_PI: f64 = 1.273_239_544_735_162_686_151_070_106_980_114_896_3_f64;

/// Beyond this magnitude erf(x) rounds to +/-1 in double precision.
///
/// erf(6) = 1 - 2.15e-17, which is below half an ulp of 1.0.
pub const SATURATION: f64 = 6.0;

// ============================================================================
// Conversion
// ============================================================================

/// Convert an `f64` constant into the working float type.
///
/// Falls back to NaN for types that cannot represent the value.
#[inline]
pub fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Largest magnitude for which erf(x) = 2x/sqrt(pi) to working precision.
///
/// For |x| < sqrt(eps) the next Taylor term, 2x^3/(3 sqrt(pi)), is below
/// eps/3 relative to the leading one.
#[inline]
pub fn small_argument<T: Float>() -> T {
    T::epsilon().sqrt()
}
