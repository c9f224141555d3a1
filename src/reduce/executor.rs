//! Strategy execution.
//!
//! This module orchestrates the Partitioner → Worker → merge pipeline
//! under one of two concurrency disciplines:
//!
//! * **Divide-and-conquer** — concurrency derived from a split exponent;
//!   the pool is sized to the (capped) partition count, so every partition
//!   gets a dedicated logical worker.
//! * **Thread pool** — an explicit worker count bounds concurrency
//!   independently of how many partition tasks are queued.
//!
//! ## Scheduling model
//!
//! Both variants run atop a single bounded rayon pool. Each partition
//! becomes one task; tasks return their [`Aggregate`] by value, and a
//! single-threaded fold merges the results **in partition order**.
//! Because partitions are disjoint and the merge operators are
//! associative and commutative, the final aggregate is deterministic
//! regardless of thread interleaving, bitwise identical across runs and
//! thread counts for the same partitioning.
//!
//! A run with a single partition executes synchronously on the calling
//! thread; no pool is built.

use rayon::prelude::*;

use crate::profiling::profiler;
use crate::reduce::aggregate::Aggregate;
use crate::reduce::error::{
    PoolRangeError, ReduceResult, SelectionError, SplitRangeError,
};
use crate::reduce::partition::{plan_partitions, DIVIDE_PARTITION_CAP};
use crate::reduce::worker::reduce_partition;

/// Largest accepted divide-and-conquer split exponent (inclusive).
pub const MAX_SPLIT_EXPONENT: u32 = 5;

/// Largest accepted thread-pool worker count (inclusive; minimum is 1).
pub const MAX_POOL_WORKERS: usize = 32;

/// Concurrency discipline for one reduction run.
///
/// ## Invariants
/// * A validated `DivideAndConquer` carries `splits <= MAX_SPLIT_EXPONENT`.
/// * A validated `ThreadPool` carries `workers` in `1..=MAX_POOL_WORKERS`.
///
/// Construct from CLI-style flags with [`Strategy::from_flags`], or
/// directly and then check with [`Strategy::validate`].

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One logical worker per partition; partition count is `2^splits`.
    DivideAndConquer {
        /// Split exponent; partition count is `2^splits` (`1` when 0).
        splits: u32,
    },

    /// Bounded pool with a fixed maximum concurrency.
    ThreadPool {
        /// Maximum concurrent workers; also the partition count.
        workers: usize,
    },
}

impl Strategy {
    /// Builds a strategy from mutually exclusive selection flags.
    ///
    /// ## Behavior
    /// Exactly one of `divide` / `pool` must be supplied. Range
    /// validation is left to [`Strategy::validate`] so that selection
    /// and range failures stay distinguishable.
    pub fn from_flags(divide: Option<u32>, pool: Option<usize>) -> Result<Self, SelectionError> {
        match (divide, pool) {
            (Some(splits), None) => Ok(Strategy::DivideAndConquer { splits }),
            (None, Some(workers)) => Ok(Strategy::ThreadPool { workers }),
            (Some(_), Some(_)) => Err(SelectionError::Conflicting),
            (None, None) => Err(SelectionError::Missing),
        }
    }

    /// Checks the concurrency parameter against its allowed range.
    pub fn validate(&self) -> ReduceResult<()> {
        match *self {
            Strategy::DivideAndConquer { splits } => {
                if splits > MAX_SPLIT_EXPONENT {
                    return Err(SplitRangeError {
                        requested: splits,
                        max: MAX_SPLIT_EXPONENT,
                    }
                    .into());
                }
            }
            Strategy::ThreadPool { workers } => {
                if workers < 1 || workers > MAX_POOL_WORKERS {
                    return Err(PoolRangeError {
                        requested: workers,
                        min: 1,
                        max: MAX_POOL_WORKERS,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    /// Strategy name as reported in the console and the results log.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DivideAndConquer { .. } => "DivideConquer",
            Strategy::ThreadPool { .. } => "ThreadPool",
        }
    }

    /// Effective concurrency reported for this strategy.
    ///
    /// For divide-and-conquer this is `2^splits` (the requested worker
    /// count, even when the partition cap reduces actual parallelism);
    /// for the pool it is the configured worker count.
    pub fn worker_count(&self) -> usize {
        match *self {
            Strategy::DivideAndConquer { splits } => 1usize << splits,
            Strategy::ThreadPool { workers } => workers,
        }
    }

    /// Partition-count ceiling applied when partitions would be empty.
    fn partition_cap(&self) -> usize {
        match self {
            Strategy::DivideAndConquer { .. } => DIVIDE_PARTITION_CAP,
            Strategy::ThreadPool { .. } => usize::MAX,
        }
    }
}

/// Runs one full reduction over `data` under the given strategy.
///
/// ## Behavior
/// Validates the strategy, plans partitions, reduces each partition to a
/// local [`Aggregate`], and merges the results with
/// [`Aggregate::combine`].
///
/// * An empty dataset yields `Aggregate::default()` without scheduling
///   any work.
/// * A single partition is reduced synchronously on the calling thread.
/// * Otherwise a bounded rayon pool executes one task per partition and
///   drains them all before the merged aggregate is returned.
///
/// ## Guarantees
/// Given the same dataset and the same effective partitioning, both
/// strategies produce an identical final aggregate: partials are merged
/// in partition order with associative, commutative operators.
///
/// ## Errors
/// * [`ReduceError::SplitRange`] / [`ReduceError::PoolRange`] for
///   out-of-range concurrency parameters.
/// * [`ReduceError::PoolBuild`] if the worker pool cannot be created.
///
/// [`ReduceError::SplitRange`]: crate::reduce::error::ReduceError::SplitRange
/// [`ReduceError::PoolRange`]: crate::reduce::error::ReduceError::PoolRange
/// [`ReduceError::PoolBuild`]: crate::reduce::error::ReduceError::PoolBuild

pub fn run_reduction(data: &[f64], strategy: Strategy) -> ReduceResult<Aggregate> {
    strategy.validate()?;

    if data.is_empty() {
        return Ok(Aggregate::default());
    }

    let partitions = plan_partitions(data.len(), strategy.worker_count(), strategy.partition_cap());

    if partitions.len() == 1 {
        // Degenerate case: nothing to schedule, stay on the calling thread.
        return Ok(reduce_partition(data, partitions[0]));
    }

    let threads = match strategy {
        Strategy::DivideAndConquer { .. } => partitions.len(),
        Strategy::ThreadPool { workers } => workers,
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("parstat-worker-{i}"))
        .build()?;

    let _span = profiler::span("executor::reduce");

    let locals: Vec<Aggregate> = pool.install(|| {
        partitions
            .par_iter()
            .map(|&p| reduce_partition(data, p))
            .collect()
    });

    // Folding in partition order keeps the merged value bitwise stable
    // across thread counts and work-stealing schedules.
    Ok(locals.into_iter().fold(Aggregate::default(), Aggregate::combine))
}
