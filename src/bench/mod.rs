//! # Benchmark Module
//!
//! Timed-trial orchestration and result output.
//!
//! - [`harness`] repeats the reduction pipeline over fixed trials and
//!   retains the minimum wall-clock duration,
//! - [`sink`] appends one row per run to a persistent results log.
//!
//! Public API exposure is controlled by `lib.rs`.

pub mod harness;
pub mod sink;
