//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts host-runtime calling conventions to the engine.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dynamically-typed inputs (scalars, lists, typed arrays).
pub mod dynamic;
