//! # Fast Error Function (parallel erf evaluation)
//!
//! Extends [`error_function`] with multi-threaded evaluation over large
//! slices, vectors and [ndarray](https://docs.rs/ndarray) arrays using
//! [rayon](https://docs.rs/rayon).
//!
//! ## Quick Start
//!
//! ```rust
//! use fast_error_function::prelude::*;
//! use ndarray::Array1;
//!
//! let evaluator = FastErf::new()
//!     .method(AbramowitzStegun)
//!     .parallel(true)          // default
//!     .min_parallel_len(1_000) // split inputs of at least 1000 values
//!     .build()?;
//!
//! let x = Array1::linspace(-3.0_f64, 3.0, 10_000);
//! let y = evaluator.eval_slice(&x)?;
//!
//! assert_eq!(y.len(), 10_000);
//! assert!((y[9_999] - 0.999_977_909_503_001_4).abs() < 1.5e-7);
//! # Result::<(), ErfError>::Ok(())
//! ```
//!
//! Results are identical to serial evaluation; parallelism only changes
//! how the work is scheduled.
//!
//! ### Dynamically-dimensioned arrays
//!
//! ```rust
//! use fast_error_function::prelude::*;
//! use ndarray::{ArrayD, IxDyn};
//!
//! let evaluator = FastErf::new().complementary().build()?;
//!
//! let flat = ArrayD::<f64>::zeros(IxDyn(&[4]));
//! assert_eq!(evaluator.eval_array_dyn(&flat)?.to_vec(), vec![1.0; 4]);
//!
//! let grid = ArrayD::<f64>::zeros(IxDyn(&[2, 2]));
//! assert!(evaluator.eval_array_dyn(&grid).is_err());
//! # Result::<(), ErfError>::Ok(())
//! ```
//!
//! ## Features
//!
//! - `cpu` (default): rayon-backed parallel execution. Without it every
//!   evaluation is serial.
//! - `dev`: exposes `internals` for integration tests.

// Layer 4: Engine - parallel execution.
#[cfg(feature = "cpu")]
mod engine;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

pub use input::ErfInput;

// Standard fast_error_function prelude.
pub mod prelude {
    pub use crate::api::{
        DynamicInput, DynamicOutput, ErfError, FastErfBuilder as FastErf, FastErfEvaluator,
        Function::{self, Erf as ErfFn, Erfc},
        Method::{
            self, AbramowitzStegun, AbramowitzStegunRational, KaragiannidisLioumpas,
            NumericalRecipes, Reference, Sun, Winitzki,
        },
        Precision, Value,
    };
    pub use crate::input::ErfInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    #[cfg(feature = "cpu")]
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
