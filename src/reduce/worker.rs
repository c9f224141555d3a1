//! Partition worker.
//!
//! A worker reduces one partition of the dataset into an owned
//! [`Aggregate`]. Workers touch no shared state while computing: each
//! reads a disjoint sub-range of the dataset and returns its result by
//! value, leaving all merging to the caller.

use crate::reduce::aggregate::Aggregate;
use crate::reduce::partition::Partition;

/// Reduces one partition to a local aggregate.
///
/// ## Behavior
/// Folds every element in `[partition.start, partition.end)` into a fresh
/// [`Aggregate`] via [`Aggregate::observe`], passing the element's global
/// dataset index.
///
/// ## Guarantees
/// * **Pure:** reads only the partition's sub-range of `data`; no locks,
///   no shared mutable state.
/// * **Position-stable:** contributions depend on global indices, so the
///   same element produces the same contribution under any partitioning.

pub fn reduce_partition(data: &[f64], partition: Partition) -> Aggregate {
    let mut local = Aggregate::default();
    for (offset, &value) in data[partition.start..partition.end].iter().enumerate() {
        local.observe(partition.start + offset, value);
    }
    local
}
