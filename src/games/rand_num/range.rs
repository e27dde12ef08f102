use rand::Rng;
use rand_core::RngCore;

use crate::error::GuessError;

/// Closed interval of guessable numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRange {
    pub min: i64,
    pub max: i64,
}

impl GuessRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of integers in the range, 0 when `min > max`. The full `i64`
    /// span has one more member than `u64` can count and saturates.
    pub fn len(&self) -> u64 {
        if self.min > self.max {
            0
        } else {
            self.max.abs_diff(self.min).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Uniform draw from `[min, max]`. The range must not be empty.
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.min..=self.max)
    }

    pub fn check(&self, value: i64) -> Result<i64, GuessError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(GuessError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        Self::new(1, 50)
    }
}
