//! Pivot sources for randomized quicksort.
//!
//! ## Purpose
//!
//! This module defines the injectable source of pivot indices consumed by
//! randomized quicksort. Production callers wrap a `rand` generator in
//! [`RandomPivot`]; tests can script exact pivot sequences by implementing
//! [`PivotSource`] directly.
//!
//! ## Design notes
//!
//! * **Injectable**: Partitioning only sees `&mut dyn PivotSource`.
//! * **Reproducible**: `RandomPivot::seeded` uses `SmallRng`, so a seed fixes
//!   the whole pivot sequence.
//!
//! ## Invariants
//!
//! * Callers clamp returned indices to `[low, high]`, so a misbehaving source
//!   can degrade performance but never correctness.

// External dependencies
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Pivot Source
// ============================================================================

/// Source of pivot indices for randomized partitioning.
pub trait PivotSource {
    /// Pick an index in the inclusive range `[low, high]`.
    fn pick(&mut self, low: usize, high: usize) -> usize;
}

impl<P: PivotSource + ?Sized> PivotSource for &mut P {
    fn pick(&mut self, low: usize, high: usize) -> usize {
        (**self).pick(low, high)
    }
}

// ============================================================================
// Random Pivot
// ============================================================================

/// Uniform pivot choice backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPivot<R> {
    rng: R,
}

impl<R: Rng> RandomPivot<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomPivot<SmallRng> {
    /// Deterministic pivot sequence derived from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

#[cfg(feature = "std")]
impl RandomPivot<rand::rngs::ThreadRng> {
    /// Pivot source over the thread-local generator.
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> PivotSource for RandomPivot<R> {
    #[inline]
    fn pick(&mut self, low: usize, high: usize) -> usize {
        self.rng.random_range(low..=high)
    }
}
