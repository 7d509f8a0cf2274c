//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared error type and the in-place sort used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Descending bubble sort.
pub mod sorting;

/// Shared error types.
pub mod errors;
