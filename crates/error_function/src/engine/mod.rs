//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer selects the algorithm, validates container inputs and runs the
//! element-wise evaluation.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Method enumeration and dispatch.
pub mod method;

/// Input validation.
pub mod validator;

/// Serial slice evaluation.
pub mod executor;
