//! # Reduction Engine
//!
//! Core parallel-reduction pipeline.
//!
//! The pipeline runs in four steps:
//! - partitioning the dataset index range ([`partition`]),
//! - per-partition local accumulation ([`worker`]),
//! - merging partial aggregates into one global aggregate ([`aggregate`]),
//! - deriving the reported metrics from it ([`metrics`]).
//!
//! [`executor`] orchestrates the steps under one of two concurrency
//! disciplines; [`error`] carries the failure modes of that orchestration.
//!
//! Public API exposure is controlled by `lib.rs`.

pub mod aggregate;
pub mod error;
pub mod executor;
pub mod metrics;
pub mod partition;
pub mod worker;
