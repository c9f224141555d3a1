//! Benchmark harness.
//!
//! Repeats the full reduction pipeline a fixed number of trials and
//! retains the **minimum** wall-clock duration. The minimum, not the
//! mean, is reported: scheduler preemption and cache warm-up only ever
//! add time, so the fastest trial is the best estimate of the work
//! itself.
//!
//! ## Measurement discipline
//!
//! * A full `SeqCst` fence brackets each timed region, preventing the
//!   optimizer from moving timed work out of the measured window.
//! * The reduction result passes through [`std::hint::black_box`] so the
//!   computation cannot be elided.
//! * Elapsed time comes from [`Instant`], a monotonic clock.

use std::hint::black_box;
use std::sync::atomic::{fence, Ordering};
use std::time::{Duration, Instant};

use crate::profiling::profiler;
use crate::reduce::error::ReduceResult;
use crate::reduce::executor::{run_reduction, Strategy};
use crate::reduce::metrics::DerivedMetrics;

/// Number of timed trials per benchmark run.
pub const TRIALS: usize = 5;

/// Outcome of one benchmark run (one strategy, one dataset).

#[derive(Clone, Copy, Debug)]
pub struct BenchmarkResult {
    /// Strategy name as reported to the console and the results log.
    pub strategy: &'static str,

    /// Effective concurrency (thread or pool-worker count).
    pub threads: usize,

    /// Metrics derived from the final trial's global aggregate.
    pub metrics: DerivedMetrics,

    /// Minimum wall-clock duration across all trials.
    pub min_duration: Duration,
}

/// Returns the minimum of a set of trial durations.
///
/// ## Behavior
/// An empty slice yields `Duration::ZERO`. Ties keep the shared minimum
/// (e.g. trials of 50, 30, 70, 30 and 90 µs report 30 µs).
pub fn fastest(samples: &[Duration]) -> Duration {
    samples.iter().copied().min().unwrap_or(Duration::ZERO)
}

/// Runs [`TRIALS`] timed reductions and reports the fastest.
///
/// ## Behavior
/// Each trial executes the complete Partitioner → Worker → merge →
/// metric-derivation pipeline under `strategy`, bracketed by `SeqCst`
/// fences and timed with a monotonic clock. The derived metrics are
/// identical across trials (same dataset, same partitioning), so the
/// result carries the last trial's metrics alongside the minimum
/// duration.
///
/// ## Errors
/// Propagates any [`ReduceError`] from the first failing trial; no
/// partial result is produced. Range validation therefore rejects an
/// invalid strategy before any timing is reported.
///
/// [`ReduceError`]: crate::reduce::error::ReduceError

pub fn run_benchmark(data: &[f64], strategy: Strategy) -> ReduceResult<BenchmarkResult> {
    let mut durations = Vec::with_capacity(TRIALS);
    let mut metrics = DerivedMetrics {
        mode: 0.0,
        stddev: 0.0,
        sum: 0.0,
    };

    for trial in 0..TRIALS {
        let _span = profiler::span_fmt(format!("harness::trial_{trial}"));

        fence(Ordering::SeqCst);
        let started = Instant::now();
        let aggregate = black_box(run_reduction(black_box(data), strategy)?);
        fence(Ordering::SeqCst);
        durations.push(started.elapsed());

        metrics = DerivedMetrics::derive(&aggregate);
    }

    Ok(BenchmarkResult {
        strategy: strategy.name(),
        threads: strategy.worker_count(),
        metrics,
        min_duration: fastest(&durations),
    })
}
