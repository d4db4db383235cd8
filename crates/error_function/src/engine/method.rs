//! Method selection and generic dispatch.
//!
//! ## Purpose
//!
//! This module names every available erf algorithm, records its documented
//! accuracy and native precisions, and dispatches a scalar evaluation to the
//! matching free function.
//!
//! ## Design notes
//!
//! * **Static table**: Per-method metadata lives in `const` property records.
//! * **Promotion**: Methods without a single-precision implementation are
//!   evaluated in double precision and rounded back.
//!
//! ## Key concepts
//!
//! | Method                    | Name                             | Max abs error (f64 / f32) | Native precisions |
//! |---------------------------|----------------------------------|---------------------------|-------------------|
//! | AbramowitzStegun          | abramowitz_and_stegun            | 1.5e-7 / 5e-7             | single, double    |
//! | AbramowitzStegunRational  | abramowitz_and_stegun_rational   | 3e-7 / 2e-6               | single, double    |
//! | KaragiannidisLioumpas     | karagiannidis_and_lioumpas       | 1.6e-2 / 1.6e-2           | single, double    |
//! | NumericalRecipes          | numerical_recipes                | 1.2e-7 / 4e-7             | single, double    |
//! | Sun                       | sun                              | 1e-15 / 1e-7              | double            |
//! | Winitzki                  | winitzki                         | 1.3e-4 / 1.3e-4           | single, double    |
//! | Reference                 | erf                              | 1e-15 / 1e-7              | double            |
//!
//! ## Invariants
//!
//! * Every method returns NaN for NaN and +/-1 for +/-inf (erf).
//! * `Method::from_name(m.name()) == Ok(m)` for every method.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::abramowitz_stegun::{self, erf_abramowitz_stegun, erfc_abramowitz_stegun};
use crate::algorithms::abramowitz_stegun_rational::{
    self, erf_abramowitz_stegun_rational, erfc_abramowitz_stegun_rational,
};
use crate::algorithms::karagiannidis_lioumpas::{
    self, erf_karagiannidis_lioumpas, erfc_karagiannidis_lioumpas,
};
use crate::algorithms::numerical_recipes::{self, erf_numerical_recipes, erfc_numerical_recipes};
use crate::algorithms::sun::{self, erf_sun, erfc_sun};
use crate::algorithms::winitzki::{self, erf_winitzki, erfc_winitzki};
use crate::primitives::errors::ErfError;
use crate::primitives::precision::Precision;

// ============================================================================
// Method Properties
// ============================================================================

/// Static metadata of an erf method.
struct MethodProperties {
    /// Name used by the Python module and `from_name`.
    name: &'static str,

    /// One-line description.
    description: &'static str,

    /// Documented maximum absolute error of erf in double precision.
    max_error: f64,

    /// Maximum absolute error of erf in single precision, rounding included.
    max_error_single: f64,

    /// Whether a single-precision implementation exists.
    single: bool,
}

const ABRAMOWITZ_STEGUN_PROPERTIES: MethodProperties = MethodProperties {
    name: "abramowitz_and_stegun",
    description: "Computes erf(x) using the exponential approximation in A&S.",
    max_error: abramowitz_stegun::MAX_ERROR,
    max_error_single: 5e-7,
    single: true,
};

const ABRAMOWITZ_STEGUN_RATIONAL_PROPERTIES: MethodProperties = MethodProperties {
    name: "abramowitz_and_stegun_rational",
    description: "Computes erf(x) using the rational approximation in A&S.",
    max_error: abramowitz_stegun_rational::MAX_ERROR,
    max_error_single: 2e-6,
    single: true,
};

const KARAGIANNIDIS_LIOUMPAS_PROPERTIES: MethodProperties = MethodProperties {
    name: "karagiannidis_and_lioumpas",
    description: "Computes erf(x) using the approximation in K&L.",
    max_error: karagiannidis_lioumpas::MAX_ERROR,
    max_error_single: 1.6e-2,
    single: true,
};

const NUMERICAL_RECIPES_PROPERTIES: MethodProperties = MethodProperties {
    name: "numerical_recipes",
    description: "Computes erf(x) using the algorithm in Numerical Recipes.",
    max_error: numerical_recipes::MAX_ERROR,
    max_error_single: 4e-7,
    single: true,
};

const SUN_PROPERTIES: MethodProperties = MethodProperties {
    name: "sun",
    description: "Computes erf(x) using the algorithm in Sun's libm.",
    max_error: sun::MAX_ERROR,
    max_error_single: 1e-7,
    single: false,
};

const WINITZKI_PROPERTIES: MethodProperties = MethodProperties {
    name: "winitzki",
    description: "Computes erf(x) using Winitzki's approximation.",
    max_error: winitzki::MAX_ERROR,
    max_error_single: 1.3e-4,
    single: true,
};

const REFERENCE_PROPERTIES: MethodProperties = MethodProperties {
    name: "erf",
    description: "Computes erf(x) using the library's most accurate routine.",
    max_error: sun::MAX_ERROR,
    max_error_single: 1e-7,
    single: false,
};

// ============================================================================
// Function Enum
// ============================================================================

/// Which of the pair erf / erfc to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Function {
    /// The error function.
    #[default]
    Erf,

    /// The complementary error function, 1 - erf(x).
    Erfc,
}

impl Function {
    /// Get the name of the function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Function::Erf => "erf",
            Function::Erfc => "erfc",
        }
    }
}

// ============================================================================
// Method Enum
// ============================================================================

/// Algorithm used to evaluate erf/erfc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Abramowitz & Stegun 7.1.26 (exponential form).
    AbramowitzStegun,

    /// Abramowitz & Stegun 7.1.28 (rational form).
    AbramowitzStegunRational,

    /// Karagiannidis & Lioumpas.
    KaragiannidisLioumpas,

    /// Numerical Recipes `erfcc`.
    NumericalRecipes,

    /// Sun Microsystems' fdlibm (double only).
    Sun,

    /// Winitzki's closed form.
    Winitzki,

    /// Most accurate routine available.
    ///
    /// This is the default.
    #[default]
    Reference,
}

impl Method {
    /// Every method, in registration order.
    pub const ALL: [Method; 7] = [
        Method::AbramowitzStegun,
        Method::AbramowitzStegunRational,
        Method::KaragiannidisLioumpas,
        Method::Reference,
        Method::NumericalRecipes,
        Method::Sun,
        Method::Winitzki,
    ];

    /// Every method, in registration order.
    #[inline]
    pub const fn all() -> &'static [Method] {
        &Self::ALL
    }

    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the properties record.
    const fn properties(&self) -> &'static MethodProperties {
        match self {
            Method::AbramowitzStegun => &ABRAMOWITZ_STEGUN_PROPERTIES,
            Method::AbramowitzStegunRational => &ABRAMOWITZ_STEGUN_RATIONAL_PROPERTIES,
            Method::KaragiannidisLioumpas => &KARAGIANNIDIS_LIOUMPAS_PROPERTIES,
            Method::NumericalRecipes => &NUMERICAL_RECIPES_PROPERTIES,
            Method::Sun => &SUN_PROPERTIES,
            Method::Winitzki => &WINITZKI_PROPERTIES,
            Method::Reference => &REFERENCE_PROPERTIES,
        }
    }

    /// Get the name of the method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.properties().name
    }

    /// Get a one-line description of the method.
    #[inline]
    pub const fn description(&self) -> &'static str {
        self.properties().description
    }

    /// Documented maximum absolute error of erf in double precision.
    #[inline]
    pub const fn max_error(&self) -> f64 {
        self.properties().max_error
    }

    /// Documented maximum absolute error of erf in `precision`.
    ///
    /// Single-precision bounds include rounding; the rational A&S form
    /// loses the most since its denominator is raised to the 16th power.
    #[inline]
    pub const fn max_error_in(&self, precision: Precision) -> f64 {
        match precision {
            Precision::Single => self.properties().max_error_single,
            Precision::Double => self.properties().max_error,
        }
    }

    /// Returns `true` if the method has a native implementation in `precision`.
    #[inline]
    pub const fn supports(&self, precision: Precision) -> bool {
        match precision {
            Precision::Double => true,
            Precision::Single => self.properties().single,
        }
    }

    /// Look a method up by name (case-insensitive, with common aliases).
    pub fn from_name(name: &str) -> core::result::Result<Method, ErfError> {
        let lower = name.trim().to_ascii_lowercase();
        match lower.as_str() {
            "abramowitz_and_stegun" | "abramowitz_stegun" | "as" => Ok(Method::AbramowitzStegun),
            "abramowitz_and_stegun_rational" | "abramowitz_stegun_rational" | "rational" => {
                Ok(Method::AbramowitzStegunRational)
            }
            "karagiannidis_and_lioumpas" | "karagiannidis_lioumpas" | "kl" => {
                Ok(Method::KaragiannidisLioumpas)
            }
            "numerical_recipes" | "nr" => Ok(Method::NumericalRecipes),
            "sun" | "fdlibm" => Ok(Method::Sun),
            "winitzki" => Ok(Method::Winitzki),
            "erf" | "reference" | "libm" => Ok(Method::Reference),
            _ => Err(ErfError::UnknownMethod(name.to_string())),
        }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate `function` at `x` in the precision of `T`.
    #[inline]
    pub fn evaluate<T: Float>(&self, function: Function, x: T) -> T {
        match (self, function) {
            (Method::AbramowitzStegun, Function::Erf) => erf_abramowitz_stegun(x),
            (Method::AbramowitzStegun, Function::Erfc) => erfc_abramowitz_stegun(x),
            (Method::AbramowitzStegunRational, Function::Erf) => erf_abramowitz_stegun_rational(x),
            (Method::AbramowitzStegunRational, Function::Erfc) => {
                erfc_abramowitz_stegun_rational(x)
            }
            (Method::KaragiannidisLioumpas, Function::Erf) => erf_karagiannidis_lioumpas(x),
            (Method::KaragiannidisLioumpas, Function::Erfc) => erfc_karagiannidis_lioumpas(x),
            (Method::NumericalRecipes, Function::Erf) => erf_numerical_recipes(x),
            (Method::NumericalRecipes, Function::Erfc) => erfc_numerical_recipes(x),
            (Method::Winitzki, Function::Erf) => erf_winitzki(x),
            (Method::Winitzki, Function::Erfc) => erfc_winitzki(x),
            (Method::Sun | Method::Reference, Function::Erf) => promote(x, erf_sun),
            (Method::Sun | Method::Reference, Function::Erfc) => promote(x, erfc_sun),
        }
    }

    /// Evaluate erf at `x`.
    #[inline]
    pub fn erf<T: Float>(&self, x: T) -> T {
        self.evaluate(Function::Erf, x)
    }

    /// Evaluate erfc at `x`.
    #[inline]
    pub fn erfc<T: Float>(&self, x: T) -> T {
        self.evaluate(Function::Erfc, x)
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

/// Run a double-precision routine on any float type.
///
/// Identity conversions for `f64`; `f32` is widened and the result rounded.
#[inline]
fn promote<T: Float, F>(x: T, f: F) -> T
where
    F: Fn(f64) -> f64,
{
    let wide = x.to_f64().unwrap_or(f64::NAN);
    T::from(f(wide)).unwrap_or_else(T::nan)
}
