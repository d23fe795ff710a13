//! Seedable ranged random numbers for map and search tooling.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// A source of ranged random integers backed by an owned [`StdRng`].
///
/// Each consumer holds its own instance; construct with [`seeded`] for
/// reproducible sequences in tests.
///
/// [`seeded`]: RangedRng::seeded
pub struct RangedRng {
    rng: StdRng,
}

impl RangedRng {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: rand::make_rng(),
        }
    }

    /// Create a generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restart the sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// An integer in the inclusive range `[min, max]`, obtained by reducing
    /// the absolute value of a full-width signed draw modulo the range
    /// width. Wide ranges therefore carry a slight bias toward the low end.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn int_in_range(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "int_in_range: min {min} > max {max}");
        // Widen before abs so i32::MIN cannot overflow.
        let width = (max as i64) - (min as i64) + 1;
        let r = (self.rng.random::<i32>() as i64).abs();
        (r % width + min as i64) as i32
    }
}

impl Default for RangedRng {
    fn default() -> Self {
        Self::new()
    }
}
