//! Sun Microsystems' fdlibm erf/erfc.
//!
//! ## Purpose
//!
//! Full double-precision erf and erfc following the piecewise rational
//! scheme of fdlibm's `s_erf.c` (the basis of most C math libraries).
//!
//! ## Key concepts
//!
//! Let `ix` be the high 32 bits of |x|.
//!
//! | Range                  | Method                                                   |
//! |------------------------|----------------------------------------------------------|
//! | \|x\| < 2^-28          | erf = x + efx x                                          |
//! | \|x\| < 0.84375        | erf = x + x R(x^2), R = P/Q of degree 4/5                |
//! | 0.84375 <= \|x\| < 1.25| erf = erx + P(s)/Q(s), s = \|x\| - 1                      |
//! | 1.25 <= \|x\| < 1/0.35 | erfc = exp(-z^2 - 0.5625) exp((z - x)(z + x) + R/S) / x  |
//! | 1/0.35 <= \|x\| < 6    | same, second rational fit                                |
//! | \|x\| >= 6             | erf = sign(x), erfc underflows beyond 28                 |
//!
//! `z` is |x| with its low 32 bits cleared so that z^2 is exact.
//!
//! ## Invariants
//!
//! * Error below one ulp across the real line.
//! * Double precision only; single-precision callers are promoted by the engine.

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

// External dependencies
#[allow(unused_imports)]
use num_traits::Float;

// Internal dependencies
use crate::math::polynomial::{horner, horner_monic};

// ============================================================================
// Coefficients
// ============================================================================

/// erf(1) rounded to 24 bits: the constant term on [0.84375, 1.25).
const ERX: f64 = 8.45062911510467529297e-01;

/// 8 * (2/sqrt(pi) - 1), for the tiny-argument branch.
const EFX8: f64 = 1.02703333676410069053e+00;

/// erf on [0, 0.84375): numerator.
const PP: [f64; 5] = [
    1.28379167095512558561e-01,
    -3.25042107247001499370e-01,
    -2.84817495755985104766e-02,
    -5.77027029648944159157e-03,
    -2.37630166566501626084e-05,
];

/// erf on [0, 0.84375): denominator (monic).
const QQ: [f64; 5] = [
    3.97917223959155352819e-01,
    6.50222499887672944485e-02,
    5.08130628187576562776e-03,
    1.32494738004321644526e-04,
    -3.96022827877536812320e-06,
];

/// erf on [0.84375, 1.25): numerator.
const PA: [f64; 7] = [
    -2.36211856075265944077e-03,
    4.14856118683748331666e-01,
    -3.72207876035701323847e-01,
    3.18346619901161753674e-01,
    -1.10894694282396677476e-01,
    3.54783043256182359371e-02,
    -2.16637559486879084300e-03,
];

/// erf on [0.84375, 1.25): denominator (monic).
const QA: [f64; 6] = [
    1.06420880400844228286e-01,
    5.40397917702171048937e-01,
    7.18286544141962662868e-02,
    1.26171219808761642112e-01,
    1.36370839120290507362e-02,
    1.19844998467991074170e-02,
];

/// erfc on [1.25, 1/0.35): numerator.
const RA: [f64; 8] = [
    -9.86494403484714822705e-03,
    -6.93858572707181764372e-01,
    -1.05586262253232909814e+01,
    -6.23753324503260060396e+01,
    -1.62396669462573470355e+02,
    -1.84605092906711035994e+02,
    -8.12874355063065934246e+01,
    -9.81432934416914548592e+00,
];

/// erfc on [1.25, 1/0.35): denominator (monic).
const SA: [f64; 8] = [
    1.96512716674392571292e+01,
    1.37657754143519042600e+02,
    4.34565877475229228821e+02,
    6.45387271733267880336e+02,
    4.29008140027567833386e+02,
    1.08635005541779435134e+02,
    6.57024977031928170135e+00,
    -6.04244152148580987438e-02,
];

/// erfc on [1/0.35, 28): numerator.
const RB: [f64; 7] = [
    -9.86494292470009928597e-03,
    -7.99283237680523006574e-01,
    -1.77579549177547519889e+01,
    -1.60636384855821916062e+02,
    -6.37566443368389627722e+02,
    -1.02509513161107724954e+03,
    -4.83519191608651397019e+02,
];

/// erfc on [1/0.35, 28): denominator (monic).
const SB: [f64; 7] = [
    3.03380607434824582924e+01,
    3.25792512996573918826e+02,
    1.53672958608443695994e+03,
    3.19985821950859553908e+03,
    2.55305040643316442583e+03,
    4.74528541206955367215e+02,
    -2.24409524465858183362e+01,
];

/// Documented maximum absolute error.
pub const MAX_ERROR: f64 = 1e-15;

// ============================================================================
// Range Boundaries (high word of |x|)
// ============================================================================

const NOT_FINITE: u32 = 0x7ff0_0000;
const BELOW_0_84375: u32 = 0x3feb_0000;
const BELOW_2_POW_M28: u32 = 0x3e30_0000;
const BELOW_2_POW_M56: u32 = 0x3c70_0000;
const BELOW_0_25: u32 = 0x3fd0_0000;
const BELOW_1_25: u32 = 0x3ff4_0000;
const BELOW_1_OVER_0_35: u32 = 0x4006_db6d;
const BELOW_6: u32 = 0x4018_0000;
const BELOW_28: u32 = 0x403c_0000;

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn high_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

#[inline]
fn clear_low_word(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & 0xffff_ffff_0000_0000)
}

/// x + x R(x^2) on |x| < 0.84375, without the leading x.
#[inline]
fn small_ratio(x: f64) -> f64 {
    let z = x * x;
    horner(z, &PP) / horner_monic(z, &QQ)
}

/// erfc(|x|) for 0.84375 <= |x| < 28.
fn erfc_mid(ix: u32, x: f64) -> f64 {
    let ax = x.abs();

    if ix < BELOW_1_25 {
        let s = ax - 1.0;
        return 1.0 - ERX - horner(s, &PA) / horner_monic(s, &QA);
    }

    let s = 1.0 / (ax * ax);
    let (r, q) = if ix < BELOW_1_OVER_0_35 {
        (horner(s, &RA), horner_monic(s, &SA))
    } else {
        (horner(s, &RB), horner_monic(s, &SB))
    };

    let z = clear_low_word(ax);
    (-z * z - 0.5625).exp() * ((z - ax) * (z + ax) + r / q).exp() / ax
}

// ============================================================================
// Public Functions
// ============================================================================

/// erf(x) in double precision, fdlibm algorithm.
pub fn erf_sun(x: f64) -> f64 {
    let hx = high_word(x);
    let negative = hx >> 31 != 0;
    let ix = hx & 0x7fff_ffff;

    if ix >= NOT_FINITE {
        if x.is_nan() {
            return x;
        }
        return if negative { -1.0 } else { 1.0 };
    }

    if ix < BELOW_0_84375 {
        if ix < BELOW_2_POW_M28 {
            // Scaled by 8 to avoid underflow on subnormals.
            return 0.125 * (8.0 * x + EFX8 * x);
        }
        return x + x * small_ratio(x);
    }

    let y = if ix < BELOW_6 {
        1.0 - erfc_mid(ix, x)
    } else {
        1.0
    };

    if negative { -y } else { y }
}

/// erfc(x) in double precision, fdlibm algorithm.
pub fn erfc_sun(x: f64) -> f64 {
    let hx = high_word(x);
    let negative = hx >> 31 != 0;
    let ix = hx & 0x7fff_ffff;

    if ix >= NOT_FINITE {
        if x.is_nan() {
            return x;
        }
        return if negative { 2.0 } else { 0.0 };
    }

    if ix < BELOW_0_84375 {
        if ix < BELOW_2_POW_M56 {
            return 1.0 - x;
        }
        let y = small_ratio(x);
        if negative || ix < BELOW_0_25 {
            return 1.0 - (x + x * y);
        }
        return 0.5 - (x - 0.5 + x * y);
    }

    if ix < BELOW_28 {
        let tail = erfc_mid(ix, x);
        return if negative { 2.0 - tail } else { tail };
    }

    if negative { 2.0 } else { 0.0 }
}
