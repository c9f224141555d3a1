//! # parstat
//!
//! Micro-benchmark harness comparing two strategies for parallelizing a
//! statistical reduction over a fixed numeric dataset:
//!
//! - **Divide-and-conquer** — concurrency derived from a split exponent,
//!   one partition per logical worker (capped),
//! - **Thread pool** — a bounded pool with an explicit worker count.
//!
//! ## Design Goals
//! - Pure, value-returning partition workers (no shared mutable state)
//! - Deterministic partitioning: exact cover of the index range
//! - Commutative, associative merge so the final aggregate is independent
//!   of scheduling order (up to floating-point rounding)
//! - Minimum-of-N timing to filter scheduler noise out of measurements
//!
//! Both strategies run on a single bounded worker-pool abstraction and
//! converge on an identical global aggregate for the same partitioning.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bench;
pub mod dataset;
pub mod profiling;
pub mod reduce;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (Public API)
// ─────────────────────────────────────────────────────────────────────────────

// Reduction pipeline

pub use reduce::partition::{
    plan_partitions,
    Partition,
    DIVIDE_PARTITION_CAP,
};

pub use reduce::aggregate::Aggregate;

pub use reduce::worker::reduce_partition;

pub use reduce::executor::{
    run_reduction,
    Strategy,
    MAX_POOL_WORKERS,
    MAX_SPLIT_EXPONENT,
};

pub use reduce::metrics::DerivedMetrics;

pub use reduce::error::{
    PoolRangeError,
    ReduceError,
    ReduceResult,
    SelectionError,
    SplitRangeError,
};

// Benchmarking

pub use bench::harness::{
    fastest,
    run_benchmark,
    BenchmarkResult,
    TRIALS,
};

pub use bench::sink::append_result;

// Dataset provider

pub use dataset::{
    Dataset,
    DEFAULT_LEN,
    DEFAULT_SEED,
};

// Profiling (no-op unless the `profiling` feature is enabled)

pub use profiling::profiler;

// ─────────────────────────────────────────────────────────────────────────────
// Prelude (Optional but recommended)
// ─────────────────────────────────────────────────────────────────────────────

/// Commonly used types and entry points.
///
/// Import with:
/// ```rust
/// use parstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        run_benchmark,
        run_reduction,
        Aggregate,
        BenchmarkResult,
        Dataset,
        DerivedMetrics,
        Strategy,
    };
}
