//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type, key helpers and pivot sources used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Key widening, ranges and sortedness checks.
pub mod sorting;

/// Shared error types.
pub mod errors;

/// Injectable pivot sources.
pub mod random;
