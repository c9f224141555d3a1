//! Reduction accumulator.
//!
//! This module defines the **pure, worker-local accumulator type** used by
//! the reduction pipeline.
//!
//! ## Execution model
//! A reduction proceeds in two phases:
//!
//! 1. **Parallel accumulation**
//!    * Each worker processes one disjoint partition of the dataset.
//!    * Each worker folds its elements into its own [`Aggregate`].
//!
//! 2. **Commutative combination**
//!    * Worker-local aggregates are merged with [`Aggregate::combine`].
//!    * All merge operators are associative and commutative (sums and
//!      logical OR), so the final value does not depend on merge order,
//!      up to floating-point rounding.
//!
//! The same value type serves as the partition-local partial aggregate
//! and, once fully merged, as the run-wide global aggregate.
//!
//! ## Design principles
//! The accumulator is intentionally:
//!
//! * a **plain data container** — no dataset references, no side effects,
//! * **Copy / Clone** — easy to move between threads,
//! * **execution-agnostic** — the same type works for the synchronous
//!   single-partition path and for pool-scheduled workers.

/// Worker-local (and, after merging, run-wide) reduction state.
///
/// ## Semantics
/// Five fields accumulate over dataset elements (see
/// [`Aggregate::observe`]):
///
/// * `log_sum_abs` — `Σ ln(|v|)` over **nonzero** elements,
/// * `raw_sum` — `Σ v` over all elements,
/// * `diff_sum` — `Σ (v - i)` where `i` is the element's **global** index,
/// * `count` — number of elements processed,
/// * `has_zero` — whether any element equals zero.
///
/// `diff_sum` uses the global dataset index, never a partition-local
/// offset: moving an element to a different partition must not change
/// its contribution.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aggregate {
    /// Sum of `ln(|v|)` over nonzero elements.
    pub log_sum_abs: f64,

    /// Sum of raw element values.
    pub raw_sum: f64,

    /// Sum of `v - i` using the element's global dataset index `i`.
    pub diff_sum: f64,

    /// Number of elements folded into this aggregate.
    pub count: u64,

    /// True if any observed element was exactly zero.
    pub has_zero: bool,
}

impl Aggregate {
    /// Folds one dataset element into the accumulator.
    ///
    /// ## Behavior
    /// * `value == 0` sets `has_zero` and contributes nothing to
    ///   `log_sum_abs`; all other fields still update.
    /// * `index` is the element's absolute position in the dataset.
    #[inline]
    pub fn observe(&mut self, index: usize, value: f64) {
        if value == 0.0 {
            self.has_zero = true;
        } else {
            self.log_sum_abs += value.abs().ln();
        }
        self.raw_sum += value;
        self.diff_sum += value - index as f64;
        self.count += 1;
    }

    /// Merges another aggregate into this one, returning the result.
    ///
    /// ## Guarantees
    /// * **Associative and commutative:** field-wise addition plus
    ///   logical OR, so merge order never affects the result beyond
    ///   floating-point rounding.
    /// * **Pure:** consumes both inputs by value; no shared state.
    ///
    /// `Aggregate::default()` is the identity element, which makes this
    /// directly usable as a fold/reduce combinator.
    #[inline]
    #[must_use]
    pub fn combine(mut self, other: Self) -> Self {
        self.log_sum_abs += other.log_sum_abs;
        self.raw_sum += other.raw_sum;
        self.diff_sum += other.diff_sum;
        self.count += other.count;
        self.has_zero = self.has_zero || other.has_zero;
        self
    }
}
