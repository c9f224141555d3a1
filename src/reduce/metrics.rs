//! Derived metrics.
//!
//! Computes the three reported output values from a finalized
//! [`Aggregate`]. The formulas are the system's observable contract and
//! are intentionally non-standard:
//!
//! * `mode` — mean of `v - i` differences, not a statistical mode,
//! * `stddev` — half the raw sum, not a standard deviation,
//! * `sum` — the product of absolute values, reconstructed from
//!   log-domain accumulation (which avoids overflow for large products,
//!   discards sign, and collapses to zero whenever any element is zero).

use crate::reduce::aggregate::Aggregate;

/// The three reported output metrics of one reduction run.
///
/// Pure function of a finalized [`Aggregate`]; immutable after creation.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedMetrics {
    /// `diff_sum / count`, or 0 for an empty dataset.
    pub mode: f64,

    /// `raw_sum / 2`.
    pub stddev: f64,

    /// `exp(log_sum_abs)`, or 0 when any element was zero.
    pub sum: f64,
}

impl DerivedMetrics {
    /// Derives the output metrics from a finalized aggregate.
    ///
    /// ## Behavior
    /// An aggregate with `count == 0` (empty dataset) yields all-zero
    /// metrics; in particular `sum` is 0, not `exp(0)`.
    pub fn derive(aggregate: &Aggregate) -> Self {
        if aggregate.count == 0 {
            return DerivedMetrics {
                mode: 0.0,
                stddev: 0.0,
                sum: 0.0,
            };
        }

        DerivedMetrics {
            mode: aggregate.diff_sum / aggregate.count as f64,
            stddev: aggregate.raw_sum / 2.0,
            sum: if aggregate.has_zero {
                0.0
            } else {
                aggregate.log_sum_abs.exp()
            },
        }
    }
}

impl From<&Aggregate> for DerivedMetrics {
    fn from(aggregate: &Aggregate) -> Self {
        DerivedMetrics::derive(aggregate)
    }
}
