use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Local};
use rand_core::RngCore;
use tracing::{debug, info};

use super::log::{GuessLog, LogEntry};
use super::options::OptionSet;
use super::range::GuessRange;
use super::state::GameState;
use super::Variant;
use crate::error::{ConfigError, GuessError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::TooLow => "Too low!",
            Outcome::TooHigh => "Too high!",
            Outcome::Correct => "Correct!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::TooLow => "too low",
            Outcome::TooHigh => "too high",
            Outcome::Correct => "correct",
        })
    }
}

pub fn classify(guess: i64, target: i64) -> Outcome {
    match guess.cmp(&target) {
        Ordering::Less => Outcome::TooLow,
        Ordering::Greater => Outcome::TooHigh,
        Ordering::Equal => Outcome::Correct,
    }
}

/// Validates raw text from the guess field.
pub fn parse_guess(raw: &str, range: GuessRange) -> Result<i64, GuessError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| GuessError::NotANumber(trimmed.to_string()))?;
    range.check(value)
}

/// Everything that gets thrown away when a new game starts.
#[derive(Debug, Clone)]
pub struct Round {
    pub state: GameState,
    pub log: GuessLog,
    pub options: Option<OptionSet>,
}

/// What one accepted guess produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub attempt: u32,
    pub guess: i64,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy)]
pub struct GuessEvaluator {
    range: GuessRange,
    option_count: usize,
    variant: Variant,
}

impl GuessEvaluator {
    /// Refuses an empty range and, for cards, a card count that can't be dealt:
    /// fewer than 2, or more than the range holds.
    pub fn new(
        range: GuessRange,
        option_count: usize,
        variant: Variant,
    ) -> Result<Self, ConfigError> {
        if range.is_empty() {
            return Err(ConfigError::EmptyRange {
                min: range.min,
                max: range.max,
            });
        }
        if variant == Variant::MultipleChoice {
            if option_count < 2 {
                return Err(ConfigError::TooFewOptions(option_count));
            }
            if option_count as u64 > range.len() {
                return Err(ConfigError::TooManyOptions {
                    options: option_count,
                    available: range.len(),
                });
            }
        }
        Ok(Self {
            range,
            option_count,
            variant,
        })
    }

    pub fn range(&self) -> GuessRange {
        self.range
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Starts a new game: fresh target, empty log and, for cards, a first option set.
    pub fn initialize<R: RngCore + ?Sized>(&self, rng: &mut R, now: DateTime<Local>) -> Round {
        let state = GameState::initialize(self.range, rng, now);
        debug!(
            secret = state.target(),
            min = self.range.min,
            max = self.range.max,
            "new game"
        );
        let options = self.deal(state.target(), rng);
        Round {
            state,
            log: GuessLog::new(),
            options,
        }
    }

    /// Scores `guess` against the round. `None` means the game was already over
    /// and nothing changed.
    pub fn evaluate<R: RngCore + ?Sized>(
        &self,
        round: &mut Round,
        guess: i64,
        rng: &mut R,
        now: DateTime<Local>,
    ) -> Option<Evaluation> {
        let recorded = round.state.record(guess, now)?;
        let outcome = classify(guess, round.state.target());

        if outcome == Outcome::Correct {
            info!(
                attempts = recorded.attempt,
                elapsed_secs = (now - round.state.started_at()).num_seconds(),
                "target found"
            );
        } else {
            info!(attempt = recorded.attempt, guess, %outcome, "guess scored");
            if let Some(next) = self.deal(round.state.target(), rng) {
                round.options = Some(next);
            }
        }

        round.log.add_entry(LogEntry {
            attempt_number: recorded.attempt,
            guessed_value: guess,
            outcome,
            logged_at: now,
        });

        Some(Evaluation {
            attempt: recorded.attempt,
            guess,
            outcome,
        })
    }

    fn deal<R: RngCore + ?Sized>(&self, target: i64, rng: &mut R) -> Option<OptionSet> {
        match self.variant {
            Variant::Text => None,
            Variant::MultipleChoice => {
                Some(OptionSet::generate(target, self.option_count, self.range, rng))
            }
        }
    }
}
