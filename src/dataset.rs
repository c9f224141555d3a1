//! Deterministic dataset generation.
//!
//! This module provides the fixed pseudo-random dataset the benchmark
//! reduces over. The generator is a **seeded xorshift64\*** kept as owned
//! state (rather than thread-local), so the produced sequence depends only
//! on the seed — never on which thread generates it or on thread creation
//! order.
//!
//! # Determinism
//!
//! Given the same seed and length, [`Dataset::generate`] always produces
//! the same sequence. The default benchmark dataset is 100 values rounded
//! to the nearest integer in `[0, 100]`, from seed 42.
//!
//! # Non-goals
//!
//! - This generator is **not cryptographically secure**.
//! - Output quality is sufficient for benchmark inputs, not statistics.

/// Length of the default benchmark dataset.
pub const DEFAULT_LEN: usize = 100;

/// Seed of the default benchmark dataset.
pub const DEFAULT_SEED: u64 = 42;

// Seeding a xorshift state with zero would pin it there.
const SEED_FALLBACK: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic pseudo-random dataset source.
///
/// ## Behavior
/// Wraps a xorshift64\* state advanced once per produced value. The
/// dataset itself is an ordered, fixed-length sequence of real numbers,
/// immutable for the duration of a reduction run; workers hold only read
/// access to disjoint sub-ranges of it.

#[derive(Clone, Debug)]
pub struct Dataset {
    state: u64,
}

impl Dataset {
    /// Creates a generator from a fixed seed.
    ///
    /// A zero seed is replaced with a fixed non-zero constant, since a
    /// zero xorshift state never leaves zero.
    pub fn seeded(seed: u64) -> Self {
        Dataset {
            state: if seed == 0 { SEED_FALLBACK } else { seed },
        }
    }

    /// Advances the state and returns the next pseudo-random `u64`.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Returns the next value uniformly distributed in `[0, 1)`.
    #[inline]
    fn next_unit(&mut self) -> f64 {
        // 53 significand bits of the raw output.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Produces the benchmark dataset for a given seed and length.
    ///
    /// ## Behavior
    /// Each value is drawn from `[0, 1)`, scaled to `[0, 100]`, and
    /// rounded to the nearest integer. The result is deterministic per
    /// `(seed, len)` pair.
    pub fn generate(seed: u64, len: usize) -> Vec<f64> {
        let mut rng = Dataset::seeded(seed);
        (0..len).map(|_| (rng.next_unit() * 100.0).round()).collect()
    }

    /// Produces the default benchmark dataset (seed 42, 100 elements).
    pub fn default_data() -> Vec<f64> {
        Dataset::generate(DEFAULT_SEED, DEFAULT_LEN)
    }
}
