//! Rayon-based parallelisation utilities.
//!
//! This module provides helpers for evaluating independent sweep points
//! in parallel. Every helper preserves input order in its output.

use rayon::prelude::*;

/// Batch size for parallel processing.
///
/// Empirically tuned for cache efficiency.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Sweep length from which parallel evaluation pays for itself.
///
/// One Black-Scholes evaluation costs well under a microsecond, so short
/// sweeps are faster on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Processes items in parallel batches.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `batch_size` - Number of items per batch
/// * `processor` - Function to apply to each batch
///
/// # Returns
///
/// Vector of results from each batch, in batch order.
pub fn process_in_batches<T, R, F>(items: &[T], batch_size: usize, processor: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync + Send,
{
    items.par_chunks(batch_size.max(1)).map(processor).collect()
}

/// Maps each item through a fallible function in parallel batches.
///
/// Results keep the input order. The first error in input order is returned
/// if any item fails.
pub fn try_map_in_batches<T, R, E, F>(items: &[T], batch_size: usize, mapper: F) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    let batches = process_in_batches(items, batch_size, |batch| {
        batch.iter().map(&mapper).collect::<Result<Vec<R>, E>>()
    });

    let mut out = Vec::with_capacity(items.len());
    for batch in batches {
        out.extend(batch?);
    }
    Ok(out)
}

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParallelConfig {
    /// Batch size for chunked processing
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// A configuration that never parallelises.
    pub fn sequential() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}
