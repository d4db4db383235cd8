//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks used by every erf
//! algorithm:
//! - Shared constants and the working-type conversion
//! - Horner polynomial evaluation
//! - Odd/reflection symmetry and the edge-case policy
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mathematical constants and thresholds.
pub mod constants;

/// Polynomial evaluation.
pub mod polynomial;

/// Symmetry extension and edge cases.
pub mod symmetry;
