//! Layer 4: Engine
//!
//! # Purpose
//!
//! Parallel counterparts of the serial slice evaluation in `error_function`.

/// Rayon-backed slice evaluation.
pub mod executor;
