//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer validates configuration and input, and defines the
//! printable results (listings and reports).
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Output types for listings and reports.
pub mod output;
