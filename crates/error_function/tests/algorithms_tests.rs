#![cfg(feature = "dev")]
//! Tests for the individual erf/erfc algorithms.
//!
//! These tests verify:
//! - Accuracy against tabulated values and the fdlibm routine
//! - The shared edge-case policy (NaN, infinities, signed zero, saturation)
//! - Odd symmetry and the erf/erfc relationship
//!
//! ## Test Organization
//!
//! 1. **Sun** - Tabulated values, branch boundaries, erfc tail accuracy
//! 2. **Approximations** - Documented error bounds in both precisions
//! 3. **Edge Cases** - NaN, infinities, zero, saturation
//! 4. **Identities** - Odd symmetry, erf + erfc = 1

use approx::{assert_abs_diff_eq, assert_relative_eq};

use error_function::internals::algorithms::abramowitz_stegun::erf_abramowitz_stegun;
use error_function::internals::algorithms::karagiannidis_lioumpas::erf_karagiannidis_lioumpas;
use error_function::internals::algorithms::numerical_recipes::erfc_numerical_recipes;
use error_function::internals::algorithms::sun::{erf_sun, erfc_sun};
use error_function::internals::algorithms::winitzki::erf_winitzki;
use error_function::internals::engine::method::{Function, Method};
use error_function::internals::primitives::precision::Precision;

// ============================================================================
// Helper Functions
// ============================================================================

/// (x, erf(x), erfc(x)) to double precision.
const TABLE: [(f64, f64, f64); 9] = [
    (0.1, 0.1124629160182849, 0.8875370839817152),
    (0.5, 0.5204998778130465, 0.4795001221869535),
    (0.84375, 0.7672256612323416, 0.23277433876765835),
    (1.0, 0.8427007929497149, 0.15729920705028513),
    (1.25, 0.9229001282564582, 0.07709987174354177),
    (1.5, 0.9661051464753108, 0.033894853524689274),
    (2.0, 0.9953222650189527, 0.004677734981047265),
    (3.0, 0.9999779095030014, 2.2090496998585438e-05),
    (5.0, 0.9999999999984626, 1.5374597944280351e-12),
];

fn grid(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let n = ((hi - lo) / step).round() as usize;
    (0..=n).map(|i| lo + i as f64 * step).collect()
}

fn approximations() -> Vec<Method> {
    Method::ALL
        .iter()
        .copied()
        .filter(|m| !matches!(m, Method::Sun | Method::Reference))
        .collect()
}

// ============================================================================
// Sun Tests
// ============================================================================

/// Test fdlibm erf against tabulated values.
#[test]
fn test_sun_erf_table() {
    for &(x, erf, _) in TABLE.iter() {
        assert_relative_eq!(erf_sun(x), erf, max_relative = 4e-16);
        assert_relative_eq!(erf_sun(-x), -erf, max_relative = 4e-16);
    }
}

/// Test fdlibm erfc against tabulated values, including the far tail.
#[test]
fn test_sun_erfc_table() {
    for &(x, _, erfc) in TABLE.iter() {
        assert_relative_eq!(erfc_sun(x), erfc, max_relative = 1e-15);
        assert_relative_eq!(erfc_sun(-x), 2.0 - erfc, max_relative = 1e-15);
    }
}

/// Test continuity across the fdlibm branch boundaries.
#[test]
fn test_sun_branch_boundaries() {
    for &b in &[0.84375, 1.25, 1.0 / 0.35, 6.0] {
        let below = erf_sun(b - 1e-12);
        let above = erf_sun(b + 1e-12);
        assert_abs_diff_eq!(below, above, epsilon = 1e-11);
    }

    // erfc underflows to zero past 28.
    assert!(erfc_sun(27.0) > 0.0);
    assert_eq!(erfc_sun(30.0), 0.0);
}

/// Test fdlibm on tiny and subnormal arguments.
#[test]
fn test_sun_tiny_arguments() {
    let x = 1e-300;
    assert_relative_eq!(erf_sun(x), 1.1283791670955126 * x, max_relative = 1e-15);

    let sub = f64::MIN_POSITIVE / 4.0;
    assert!(erf_sun(sub) > 0.0);
    assert_eq!(erfc_sun(1e-20), 1.0);
}

// ============================================================================
// Approximation Tests
// ============================================================================

/// Test every approximation stays within its documented bound (double).
#[test]
fn test_documented_bounds_double() {
    let xs = grid(-7.0, 7.0, 1e-3);
    for method in approximations() {
        let bound = method.max_error();
        for &x in &xs {
            let err = (method.erf(x) - erf_sun(x)).abs();
            assert!(
                err <= bound,
                "{} exceeds {} at x = {}: {}",
                method,
                bound,
                x,
                err
            );
        }
    }
}

/// Test every method stays within its single-precision bound.
#[test]
fn test_documented_bounds_single() {
    let xs = grid(-7.0, 7.0, 1e-3);
    for method in Method::ALL {
        let bound = method.max_error_in(Precision::Single);
        for &x in &xs {
            let xf = x as f32;
            let err = (method.erf(xf) as f64 - erf_sun(xf as f64)).abs();
            assert!(err <= bound, "{} (f32) at x = {}: {}", method, x, err);
        }
    }
}

/// Test tabulated values for the tail-based approximations.
#[test]
fn test_approximation_values() {
    assert_abs_diff_eq!(erf_abramowitz_stegun(0.5_f64), 0.5204998778130465, epsilon = 1.5e-7);
    assert_abs_diff_eq!(erf_winitzki(1.0_f64), 0.8427007929497149, epsilon = 1.3e-4);
    assert_abs_diff_eq!(erfc_numerical_recipes(2.0_f64), 0.004677734981047265, epsilon = 1.2e-7);
    assert_abs_diff_eq!(erf_karagiannidis_lioumpas(3.0_f64), 0.9999779095030014, epsilon = 1e-5);
}

/// Test Karagiannidis & Lioumpas is much more accurate in the tail than at the origin.
#[test]
fn test_karagiannidis_lioumpas_tail_accuracy() {
    let near_origin = (erf_karagiannidis_lioumpas(0.01_f64) - erf_sun(0.01)).abs();
    let tail = (erf_karagiannidis_lioumpas(2.5_f64) - erf_sun(2.5)).abs();
    assert!(tail < near_origin);
    assert!(tail < 1e-3);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test NaN propagation for every method and function.
#[test]
fn test_nan_propagates() {
    for method in Method::ALL {
        assert!(method.erf(f64::NAN).is_nan(), "{}", method);
        assert!(method.erfc(f64::NAN).is_nan(), "{}", method);
        assert!(method.erf(f32::NAN).is_nan(), "{}", method);
    }
}

/// Test infinities for every method.
#[test]
fn test_infinities() {
    for method in Method::ALL {
        assert_eq!(method.erf(f64::INFINITY), 1.0, "{}", method);
        assert_eq!(method.erf(f64::NEG_INFINITY), -1.0, "{}", method);
        assert_eq!(method.erfc(f64::INFINITY), 0.0, "{}", method);
        assert_eq!(method.erfc(f64::NEG_INFINITY), 2.0, "{}", method);
        assert_eq!(method.erf(f32::INFINITY), 1.0, "{}", method);
    }
}

/// Test signed zero is preserved.
#[test]
fn test_signed_zero() {
    for method in Method::ALL {
        let pos = method.erf(0.0_f64);
        let neg = method.erf(-0.0_f64);
        assert_eq!(pos, 0.0, "{}", method);
        assert!(pos.is_sign_positive(), "{}", method);
        assert_eq!(neg, 0.0, "{}", method);
        assert!(neg.is_sign_negative(), "{}", method);
        assert_eq!(method.erfc(0.0_f64), 1.0, "{}", method);
    }
}

/// Test saturation at and beyond |x| = 6.
#[test]
fn test_saturation() {
    for method in Method::ALL {
        for &x in &[6.0_f64, 10.0, 1e10, 1e300, f64::MAX] {
            assert_eq!(method.erf(x), 1.0, "{} at {}", method, x);
            assert_eq!(method.erf(-x), -1.0, "{} at {}", method, -x);
        }
        assert_eq!(method.erf(f32::MAX), 1.0_f32, "{}", method);
    }
}

/// Test small arguments follow the linear term.
#[test]
fn test_small_arguments() {
    for method in Method::ALL {
        let x = 1e-10_f64;
        assert_relative_eq!(method.erf(x), 1.1283791670955126e-10, max_relative = 1e-12);
    }
}

// ============================================================================
// Identity Tests
// ============================================================================

/// Test erf(-x) = -erf(x) exactly.
#[test]
fn test_odd_symmetry() {
    let xs = grid(0.0, 7.0, 0.013);
    for method in Method::ALL {
        for &x in &xs {
            assert_eq!(method.erf(-x), -method.erf(x), "{} at {}", method, x);
            assert_eq!(
                method.erf(-(x as f32)),
                -method.erf(x as f32),
                "{} (f32) at {}",
                method,
                x
            );
        }
    }
}

/// Test erf(x) + erfc(x) = 1 and erfc(-x) = 2 - erfc(x).
#[test]
fn test_complement_identity() {
    let xs = grid(-6.5, 6.5, 0.01);
    for method in Method::ALL {
        for &x in &xs {
            let sum = method.evaluate(Function::Erf, x) + method.evaluate(Function::Erfc, x);
            assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(method.erfc(-x), 2.0 - method.erfc(x), epsilon = 1e-12);
        }
    }
}

/// Test results stay inside [-1, 1] (erf) and [0, 2] (erfc).
#[test]
fn test_ranges() {
    let xs = grid(-30.0, 30.0, 0.05);
    for method in Method::ALL {
        for &x in &xs {
            let e = method.erf(x);
            let c = method.erfc(x);
            assert!((-1.0..=1.0).contains(&e), "{} erf({}) = {}", method, x, e);
            assert!((0.0..=2.0).contains(&c), "{} erfc({}) = {}", method, x, c);
        }
    }
}
