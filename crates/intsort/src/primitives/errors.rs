//! Error types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while sorting or
//! while configuring a [`Sorter`](crate::api::Sorter). The comparison sorts
//! are infallible; only the distribution sorts (counting, radix, bucket) and
//! builder validation produce errors.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (range, cap, parameter).
//! * **No-std**: Only `&'static str` and integers are stored, no allocation.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Arithmetic faults**: Range, shift or width computations that do not fit.
//! 2. **Resource limits**: Counting arrays that cannot be allocated or exceed a cap.
//! 3. **Configuration**: Invalid, unsupported or repeated builder parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Checked integer arithmetic failed on extreme-magnitude input.
    Overflow {
        /// The computation that overflowed (e.g., "key widening").
        operation: &'static str,
    },

    /// The value range is too large for a counting array.
    RangeTooLarge {
        /// Number of distinct slots the range would need.
        range: u128,
        /// Configured cap, if one was set.
        max: Option<usize>,
    },

    /// The counting range cap must be at least 1.
    InvalidRangeCap(usize),

    /// An option was configured for an algorithm that does not use it.
    UnsupportedOption {
        /// Name of the selected algorithm.
        algorithm: &'static str,
        /// Name of the option.
        option: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Overflow { operation } => {
                write!(f, "Integer overflow during {operation}")
            }
            Self::RangeTooLarge { range, max } => match max {
                Some(max) => write!(
                    f,
                    "Value range too large: {range} slots (cap is {max})"
                ),
                None => write!(
                    f,
                    "Value range too large: {range} slots cannot be allocated"
                ),
            },
            Self::InvalidRangeCap(cap) => {
                write!(f, "Invalid max_counting_range: {cap} (must be >= 1)")
            }
            Self::UnsupportedOption { algorithm, option } => {
                write!(f, "Algorithm '{algorithm}' does not support option: {option}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
