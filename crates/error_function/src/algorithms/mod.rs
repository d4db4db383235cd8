//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the individual erf/erfc approximations. Each one is
//! a pair of free functions; all but the Sun algorithm are generic over
//! `Float` and therefore available in single and double precision.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Abramowitz & Stegun 7.1.26.
pub mod abramowitz_stegun;

/// Abramowitz & Stegun 7.1.28.
pub mod abramowitz_stegun_rational;

/// Karagiannidis & Lioumpas.
pub mod karagiannidis_lioumpas;

/// Numerical Recipes `erfcc`.
pub mod numerical_recipes;

/// Sun fdlibm.
pub mod sun;

/// Winitzki.
pub mod winitzki;
