//! Error types for strategy selection and reduction execution.
//!
//! This module declares focused, composable error types for the reduction
//! pipeline. Each error carries enough context to make failures actionable
//! while remaining small and cheap to pass around or convert into the
//! aggregate [`ReduceError`].
//!
//! ## Goals
//! * **Specificity:** Each error type models a single failure mode (split
//!   exponent out of range, pool size out of range, conflicting strategy
//!   selection).
//! * **Ergonomics:** All errors implement [`std::error::Error`] and
//!   [`fmt::Display`], and provide `From<T>` conversions into
//!   [`ReduceError`].
//! * **Actionability:** Structured fields (requested vs. allowed values)
//!   make messages useful without reproducing the failure.
//!
//! ## Typical flow
//! Validation helpers return the dedicated error types; orchestration code
//! uses `?` to bubble failures into [`ReduceError`], which the CLI turns
//! into a non-zero exit.
//!
//! ## Display vs. Debug
//! * [`fmt::Display`] is optimized for operator-facing messages (short,
//!   imperative phrasing).
//! * [`fmt::Debug`] (derived) retains full structure for diagnostics.

use std::fmt;

use rayon::ThreadPoolBuildError;

/// Convenience alias for results in the reduction pipeline.
pub type ReduceResult<T> = Result<T, ReduceError>;

/// Returned when a divide-and-conquer split exponent falls outside its
/// allowed range.
///
/// ### Fields
/// * `requested` — The exponent that was supplied.
/// * `max` — The largest accepted exponent (inclusive; minimum is 0).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRangeError {
    /// Exponent supplied by the caller.
    pub requested: u32,

    /// Largest accepted exponent (inclusive).
    pub max: u32,
}

impl fmt::Display for SplitRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "split exponent {} out of range (0..={})",
            self.requested, self.max
        )
    }
}

impl std::error::Error for SplitRangeError {}

/// Returned when a thread-pool worker count falls outside its allowed
/// range.
///
/// ### Fields
/// * `requested` — The worker count that was supplied.
/// * `min` / `max` — The accepted bounds (inclusive).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolRangeError {
    /// Worker count supplied by the caller.
    pub requested: usize,

    /// Smallest accepted worker count (inclusive).
    pub min: usize,

    /// Largest accepted worker count (inclusive).
    pub max: usize,
}

impl fmt::Display for PoolRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pool size {} out of range ({}..={})",
            self.requested, self.min, self.max
        )
    }
}

impl std::error::Error for PoolRangeError {}

/// Returned when strategy selection is ambiguous or missing.
///
/// Exactly one strategy parameter must be supplied per run; both or
/// neither is an input error.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Both the split exponent and the pool size were supplied.
    Conflicting,

    /// Neither strategy parameter was supplied.
    Missing,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::Conflicting => {
                write!(f, "split exponent and pool size are mutually exclusive")
            }
            SelectionError::Missing => {
                write!(f, "either a split exponent or a pool size is required")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Aggregate error for the reduction pipeline.
///
/// Callers can match on the variants for control flow or display the
/// error directly for user-readable messages.

#[derive(Debug)]
pub enum ReduceError {
    /// Split exponent outside its allowed range.
    SplitRange(SplitRangeError),

    /// Pool worker count outside its allowed range.
    PoolRange(PoolRangeError),

    /// Conflicting or missing strategy selection.
    Selection(SelectionError),

    /// The bounded worker pool could not be constructed.
    PoolBuild(ThreadPoolBuildError),
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::SplitRange(e) => e.fmt(f),
            ReduceError::PoolRange(e) => e.fmt(f),
            ReduceError::Selection(e) => e.fmt(f),
            ReduceError::PoolBuild(e) => write!(f, "failed to build worker pool: {e}"),
        }
    }
}

impl std::error::Error for ReduceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReduceError::SplitRange(e) => Some(e),
            ReduceError::PoolRange(e) => Some(e),
            ReduceError::Selection(e) => Some(e),
            ReduceError::PoolBuild(e) => Some(e),
        }
    }
}

impl From<SplitRangeError> for ReduceError {
    fn from(e: SplitRangeError) -> Self {
        ReduceError::SplitRange(e)
    }
}

impl From<PoolRangeError> for ReduceError {
    fn from(e: PoolRangeError) -> Self {
        ReduceError::PoolRange(e)
    }
}

impl From<SelectionError> for ReduceError {
    fn from(e: SelectionError) -> Self {
        ReduceError::Selection(e)
    }
}

impl From<ThreadPoolBuildError> for ReduceError {
    fn from(e: ThreadPoolBuildError) -> Self {
        ReduceError::PoolBuild(e)
    }
}
