//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure arithmetic of the crate:
//! - Round-half-up integer division and midpoints
//! - Reducers (maximum, minimum, mean, median)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Round-half-up integer arithmetic.
pub mod rounding;

/// Maximum, minimum, mean, and median.
pub mod reducers;
