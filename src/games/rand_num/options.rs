//! Multiple-choice cards. Every set holds the target plus distinct random
//! fillers from the same range, in shuffled order.

use std::collections::HashSet;

use rand::Rng;
use rand_core::RngCore;

use super::range::GuessRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    values: Vec<i64>,
}

impl OptionSet {
    /// Builds a set of `size` unique values containing `target`.
    ///
    /// `size` is capped at `range.len()` so the draw loop always ends.
    /// `GuessEvaluator::new` rejects such sizes before a game can start.
    pub fn generate<R: RngCore + ?Sized>(
        target: i64,
        size: usize,
        range: GuessRange,
        rng: &mut R,
    ) -> Self {
        let size = usize::try_from(range.len()).map_or(size, |available| size.min(available));
        let mut picked = HashSet::with_capacity(size);
        let mut values = Vec::with_capacity(size);
        picked.insert(target);
        values.push(target);

        while values.len() < size {
            let candidate = range.sample(rng);
            if picked.insert(candidate) {
                values.push(candidate);
            }
        }

        shuffle(&mut values, rng);
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    pub fn position(&self, value: i64) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }
}

/// Fisher-Yates, walking down from the last slot.
fn shuffle<T, R: RngCore + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
