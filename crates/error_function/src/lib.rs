//! # Approximations of the Real Error Function
//!
//! A collection of classic and modern algorithms for the real-valued error
//! function `erf(x) = 2/sqrt(pi) ∫_0^x e^{-t^2} dt` and its complement
//! `erfc(x) = 1 - erf(x)`, in single and double precision.
//!
//! ## Algorithms
//!
//! | Method                     | Source                              | Max abs error |
//! |----------------------------|-------------------------------------|---------------|
//! | `AbramowitzStegun`         | A&S 7.1.26 (exponential)            | 1.5e-7        |
//! | `AbramowitzStegunRational` | A&S 7.1.28 (rational)               | 3e-7          |
//! | `KaragiannidisLioumpas`    | Karagiannidis & Lioumpas (2007)     | 1.6e-2        |
//! | `NumericalRecipes`         | Numerical Recipes `erfcc`           | 1.2e-7        |
//! | `Sun`                      | Sun Microsystems fdlibm `s_erf.c`   | 1e-15         |
//! | `Winitzki`                 | Winitzki (2008), a = 0.147          | 1.3e-4        |
//! | `Reference`                | Most accurate available (default)   | 1e-15         |
//!
//! ## Quick Start
//!
//! ```rust
//! use error_function::prelude::*;
//!
//! let evaluator = Erf::new().method(Winitzki).build()?;
//!
//! let y = evaluator.eval(0.5_f64);
//! assert!((y - 0.520_499_877_813_046_5).abs() < 1.3e-4);
//!
//! let ys = evaluator.eval_slice(&[-1.0_f32, 0.0, 1.0])?;
//! assert_eq!(ys[1], 0.0);
//! assert_eq!(ys[0], -ys[2]);
//! # Result::<(), ErfError>::Ok(())
//! ```
//!
//! ### Complementary function and names
//!
//! ```rust
//! use error_function::prelude::*;
//!
//! let evaluator = Erf::new()
//!     .method_name("numerical_recipes")
//!     .function(Erfc)
//!     .build()?;
//!
//! assert!((evaluator.eval(1.0_f64) - 0.157_299_207_050_285_1).abs() < 1.2e-7);
//! # Result::<(), ErfError>::Ok(())
//! ```
//!
//! ### Free functions
//!
//! ```rust
//! use error_function::{erf_abramowitz_stegun, erf_sun};
//!
//! assert!((erf_abramowitz_stegun(1.0_f64) - erf_sun(1.0)).abs() < 1.5e-7);
//! ```
//!
//! ## Edge cases
//!
//! All methods share one policy: NaN propagates, `erf(±inf) = ±1`,
//! `|x| >= 6` saturates to `±1`, and `erf(±0) = ±0`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! error_function = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Abramowitz, M. & Stegun, I. A. (1964). *Handbook of Mathematical Functions*, 7.1.26 and 7.1.28.
//! - Karagiannidis, G. K. & Lioumpas, A. S. (2007). "An Improved Approximation for the Gaussian Q-Function".
//! - Press, W. H. et al. *Numerical Recipes*, section 6.2.
//! - Winitzki, S. (2008). "A handy approximation for the error function and its inverse".

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error type and precision tags.
mod primitives;

// Layer 2: Math - constants, polynomials, symmetry.
mod math;

// Layer 3: Algorithms - the individual approximations.
mod algorithms;

// Layer 4: Engine - dispatch, validation, execution.
mod engine;

// Layer 5: Adapters - dynamic host inputs.
mod adapters;

// High-level fluent API.
mod api;

// Free functions, one erf/erfc pair per algorithm.
pub use algorithms::abramowitz_stegun::{erf_abramowitz_stegun, erfc_abramowitz_stegun};
pub use algorithms::abramowitz_stegun_rational::{
    erf_abramowitz_stegun_rational, erfc_abramowitz_stegun_rational,
};
pub use algorithms::karagiannidis_lioumpas::{
    erf_karagiannidis_lioumpas, erfc_karagiannidis_lioumpas,
};
pub use algorithms::numerical_recipes::{erf_numerical_recipes, erfc_numerical_recipes};
pub use algorithms::sun::{erf_sun, erfc_sun};
pub use algorithms::winitzki::{erf_winitzki, erfc_winitzki};

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        DynamicInput, DynamicOutput, ErfBuilder as Erf, ErfConfig, ErfError, ErfEvaluator,
        Function::{self, Erf as ErfFn, Erfc},
        Method::{
            self, AbramowitzStegun, AbramowitzStegunRational, KaragiannidisLioumpas,
            NumericalRecipes, Reference, Sun, Winitzki,
        },
        Precision, Value,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
