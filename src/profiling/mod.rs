//! # Profiling Module
//!
//! Feature-gated Chrome-trace span profiling for the reduction pipeline.
//!
//! When the `profiling` feature is disabled (the default), every call in
//! [`profiler`] compiles to a no-op. When enabled, spans recorded around
//! benchmark trials and executor runs are buffered in memory and written
//! as Chrome Trace Event JSON at shutdown, for inspection in
//! `chrome://tracing` or Perfetto.

pub mod profiler;
