//! Dataset partitioning.
//!
//! This module splits the index range `[0, len)` of a dataset into
//! contiguous, non-overlapping partitions, one per logical worker.
//!
//! ## Partitioning model
//!
//! Given a requested partition count `P`:
//! * the chunk size is `len / P` (integer division),
//! * partition `i` spans `[i * chunk, (i + 1) * chunk)`,
//! * the last partition extends to `len`, absorbing the remainder.
//!
//! If the chunk size rounds to zero (more partitions requested than
//! elements), the partition count is reduced to `min(len, cap)` and the
//! chunk size recomputed, so every partition holds at least one element.
//!
//! ## Invariants
//!
//! The returned partitions:
//! * exactly cover `[0, len)` — no gaps, no overlaps, no duplicates,
//! * are ordered by starting index,
//! * are never empty.
//!
//! The single degenerate case is `len == 0`, which yields zero partitions
//! and leads to a trivial all-zero result downstream.

/// Hard ceiling on partition count for the divide-and-conquer family when
/// the requested count exceeds the element count.
pub const DIVIDE_PARTITION_CAP: usize = 16;

/// A half-open index range `[start, end)` into the dataset.
///
/// ## Guarantees
/// * `start < end` for every partition produced by [`plan_partitions`].
/// * Partitions produced for one run are disjoint, so workers holding
///   read access to their sub-slices never alias.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition {
    /// First dataset index covered by this partition (inclusive).
    pub start: usize,

    /// One past the last dataset index covered (exclusive).
    pub end: usize,
}

impl Partition {
    /// Number of elements in this partition.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the partition covers no elements.
    ///
    /// Never true for partitions produced by [`plan_partitions`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `[0, len)` into at most `requested` contiguous partitions.
///
/// ## Behavior
/// Computes `chunk = len / requested`. When `chunk == 0` the requested
/// count exceeds the element count and is reduced to `min(len, cap)`;
/// the chunk size is then recomputed. Every partition spans `chunk`
/// elements except the last, which extends to `len`.
///
/// ## Guarantees
/// * The partitions exactly cover `[0, len)` in order, with no overlap.
/// * No partition is empty.
/// * `len == 0` yields an empty vector.
///
/// ## Parameters
/// * `len` — dataset length.
/// * `requested` — desired partition count; must be nonzero.
/// * `cap` — family-specific ceiling applied when `chunk == 0`
///   ([`DIVIDE_PARTITION_CAP`] for divide-and-conquer, `usize::MAX`
///   for the pool family, which then clamps at `len`).

pub fn plan_partitions(len: usize, requested: usize, cap: usize) -> Vec<Partition> {
    debug_assert!(requested > 0, "partition count must be nonzero");

    if len == 0 {
        return Vec::new();
    }

    let mut parts = requested;
    let mut chunk = len / parts;
    if chunk == 0 {
        parts = len.min(cap);
        chunk = len / parts;
    }

    let mut partitions = Vec::with_capacity(parts);
    for i in 0..parts {
        let start = i * chunk;
        let end = if i == parts - 1 { len } else { start + chunk };
        partitions.push(Partition { start, end });
    }
    partitions
}
