//! Validation of sorter configuration.
//!
//! ## Purpose
//!
//! This module checks a [`SortBuilder`](crate::api::SortBuilder)'s settings
//! before a [`Sorter`](crate::api::Sorter) is created: repeated setters,
//! counting-range caps, and options that the chosen algorithm would ignore.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Static**: All checks are associated functions without state.
//!
//! ## Non-goals
//!
//! * This module does not validate input sequences; every finite integer
//!   sequence is valid input.

// Internal dependencies
use crate::engine::catalog::Algorithm;
use crate::primitives::errors::SortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sorter configuration.
pub struct Validator;

impl Validator {
    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SortError> {
        if let Some(param) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    /// Validate the counting-range cap.
    pub fn validate_range_cap(cap: usize) -> Result<(), SortError> {
        if cap == 0 {
            return Err(SortError::InvalidRangeCap(cap));
        }
        Ok(())
    }

    /// Validate that a seed is only given to a randomized algorithm.
    pub fn validate_seed(algorithm: Algorithm, seed: Option<u64>) -> Result<(), SortError> {
        if seed.is_some() && !algorithm.is_randomized() {
            return Err(SortError::UnsupportedOption {
                algorithm: algorithm.name(),
                option: "seed",
            });
        }
        Ok(())
    }

    /// Validate that a range cap is only given to counting sort.
    pub fn validate_range_cap_usage(
        algorithm: Algorithm,
        cap: Option<usize>,
    ) -> Result<(), SortError> {
        if cap.is_some() && !algorithm.uses_value_range() {
            return Err(SortError::UnsupportedOption {
                algorithm: algorithm.name(),
                option: "max_counting_range",
            });
        }
        Ok(())
    }
}
