//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer selects and runs an algorithm from a validated configuration
//! and packages the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Algorithm selector and property table.
pub mod catalog;

/// Dispatch to the selected algorithm.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sort runs.
pub mod output;
