use chrono::{DateTime, Local};
use rand_core::RngCore;

use super::range::GuessRange;

/// One game's worth of state. A new game means a new `GameState`.
#[derive(Debug, Clone)]
pub struct GameState {
    target: i64,
    attempts: u32,
    started_at: DateTime<Local>,
    finished_at: Option<DateTime<Local>>,
}

/// Result of recording a guess against the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recorded {
    pub attempt: u32,
    pub correct: bool,
}

impl GameState {
    /// Draws a fresh target from `range` and starts the clock at `now`.
    pub fn initialize<R: RngCore + ?Sized>(
        range: GuessRange,
        rng: &mut R,
        now: DateTime<Local>,
    ) -> Self {
        Self::with_target(range.sample(rng), now)
    }

    pub fn with_target(target: i64, now: DateTime<Local>) -> Self {
        Self {
            target,
            attempts: 0,
            started_at: now,
            finished_at: None,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Local>> {
        self.finished_at
    }

    /// `finished_at` doubles as the game-over flag so the two can't disagree.
    pub fn is_over(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Counts one attempt and finishes the game when `guess` hits the target.
    /// Returns `None` once the game is over.
    pub fn record(&mut self, guess: i64, now: DateTime<Local>) -> Option<Recorded> {
        if self.is_over() {
            return None;
        }
        self.attempts += 1;
        let correct = guess == self.target;
        if correct {
            self.finished_at = Some(now);
        }
        Some(Recorded {
            attempt: self.attempts,
            correct,
        })
    }
}
