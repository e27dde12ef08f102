//! The game as a front-end sees it: three inputs (text guess, card pick, reset)
//! and a read-only view of everything worth drawing.

use chrono::{DateTime, Local};
use rand::rngs::ThreadRng;
use rand_core::RngCore;
use tracing::debug;

use super::evaluator::{parse_guess, Evaluation, GuessEvaluator, Outcome, Round};
use super::log::GuessLog;
use super::options::OptionSet;
use super::range::GuessRange;
use super::Variant;
use crate::config::GameConfig;
use crate::error::{ConfigError, GuessError};

pub const TIME_FORMAT: &str = "%H:%M";
pub const WAITING: &str = "waiting…";

/// How a single card should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Open,
    Disabled,
    Winner,
}

pub struct Session<R: RngCore = ThreadRng> {
    evaluator: GuessEvaluator,
    round: Round,
    status: String,
    rng: R,
}

impl Session<ThreadRng> {
    pub fn new(config: &GameConfig, variant: Variant) -> Result<Self, ConfigError> {
        Self::with_rng(config, variant, rand::rng())
    }
}

impl<R: RngCore> Session<R> {
    /// Starts the first game right away, same as pressing reset on load.
    /// Fails if `config` can't be played as `variant`.
    pub fn with_rng(
        config: &GameConfig,
        variant: Variant,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        let evaluator = config.evaluator(variant)?;
        let round = evaluator.initialize(&mut rng, Local::now());
        Ok(Self {
            evaluator,
            round,
            status: start_message(evaluator.range()),
            rng,
        })
    }

    /// Parses and scores text input. Invalid text leaves the game untouched.
    /// `Ok(None)` means the game is already over.
    pub fn submit_text_guess(&mut self, raw: &str) -> Result<Option<Evaluation>, GuessError> {
        if self.is_over() {
            return Ok(None);
        }
        let guess =
            parse_guess(raw, self.range()).inspect_err(|err| debug!(%err, "guess rejected"))?;
        Ok(self.evaluate(guess))
    }

    /// Scores a card. Values that aren't on the current cards are ignored.
    pub fn select_option(&mut self, value: i64) -> Option<Evaluation> {
        if !self.round.options.as_ref().is_some_and(|cards| cards.contains(value)) {
            return None;
        }
        self.evaluate(value)
    }

    pub fn reset_game(&mut self) {
        self.round = self.evaluator.initialize(&mut self.rng, Local::now());
        self.status = start_message(self.range());
    }

    fn evaluate(&mut self, guess: i64) -> Option<Evaluation> {
        let eval = self
            .evaluator
            .evaluate(&mut self.round, guess, &mut self.rng, Local::now())?;
        self.status = match eval.outcome {
            Outcome::Correct => format!(
                "Correct! The number was {}. You got it in {} {}.",
                eval.guess,
                eval.attempt,
                if eval.attempt == 1 { "try" } else { "tries" }
            ),
            other => format!("{} is {}. Try again.", eval.guess, other),
        };
        Some(eval)
    }

    pub fn variant(&self) -> Variant {
        self.evaluator.variant()
    }

    pub fn range(&self) -> GuessRange {
        self.evaluator.range()
    }

    pub fn attempts(&self) -> u32 {
        self.round.state.attempts()
    }

    pub fn is_over(&self) -> bool {
        self.round.state.is_over()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn log(&self) -> &GuessLog {
        &self.round.log
    }

    pub fn options(&self) -> Option<&OptionSet> {
        self.round.options.as_ref()
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.round.state.started_at()
    }

    pub fn finished_at(&self) -> Option<DateTime<Local>> {
        self.round.state.finished_at()
    }

    pub fn started_display(&self) -> String {
        self.started_at().format(TIME_FORMAT).to_string()
    }

    pub fn finished_display(&self) -> String {
        match self.finished_at() {
            Some(at) => format!(
                "{} ({})",
                at.format(TIME_FORMAT),
                format_elapsed(at - self.started_at())
            ),
            None => WAITING.to_string(),
        }
    }

    /// Cards paired with how to draw them. Once the game is over every card is
    /// disabled except the target.
    pub fn cards(&self) -> Vec<(i64, CardState)> {
        let Some(options) = self.options() else {
            return Vec::new();
        };
        let target = self.round.state.target();
        options
            .values()
            .iter()
            .map(|&value| {
                let state = match (self.is_over(), value == target) {
                    (false, _) => CardState::Open,
                    (true, true) => CardState::Winner,
                    (true, false) => CardState::Disabled,
                };
                (value, state)
            })
            .collect()
    }

    /// Only meant for tests and debugging.
    #[doc(hidden)]
    pub fn target(&self) -> i64 {
        self.round.state.target()
    }
}

fn start_message(range: GuessRange) -> String {
    format!("I'm thinking of a number between {} and {}.", range.min, range.max)
}

fn format_elapsed(elapsed: chrono::Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(variant: Variant, seed: u64) -> Session<StdRng> {
        Session::with_rng(&GameConfig::default(), variant, StdRng::seed_from_u64(seed)).unwrap()
    }

    fn wrong_guess(session: &Session<StdRng>) -> i64 {
        if session.target() == 1 { 2 } else { 1 }
    }

    #[test]
    fn invalid_text_changes_nothing() {
        let mut s = session(Variant::Text, 1);
        let status = s.status().to_string();
        assert!(matches!(s.submit_text_guess("abc"), Err(GuessError::NotANumber(_))));
        assert!(matches!(s.submit_text_guess("999"), Err(GuessError::OutOfRange { .. })));
        assert_eq!(s.attempts(), 0);
        assert!(s.log().is_empty());
        assert_eq!(s.status(), status);
    }

    #[test]
    fn text_guess_counts_and_logs() {
        let mut s = session(Variant::Text, 2);
        let guess = wrong_guess(&s);
        let eval = s.submit_text_guess(&guess.to_string()).unwrap().unwrap();
        assert_eq!(eval.attempt, 1);
        assert_eq!(s.attempts(), 1);
        assert_eq!(s.log().len(), 1);
        assert_eq!(s.status(), format!("{guess} is too low. Try again."));
    }

    #[test]
    fn unplayable_config_is_refused() {
        let tiny = GameConfig {
            min: 1,
            max: 3,
            option_count: 5,
            variant: None,
        };
        let result = Session::with_rng(&tiny, Variant::MultipleChoice, StdRng::seed_from_u64(1));
        assert!(matches!(
            result.err(),
            Some(ConfigError::TooManyOptions { options: 5, available: 3 })
        ));

        let no_cards = GameConfig {
            option_count: 0,
            ..GameConfig::default()
        };
        let result =
            Session::with_rng(&no_cards, Variant::MultipleChoice, StdRng::seed_from_u64(1));
        assert!(matches!(result.err(), Some(ConfigError::TooFewOptions(0))));
    }

    #[test]
    fn cards_are_ignored_in_text_variant() {
        let mut s = session(Variant::Text, 3);
        let target = s.target();
        assert_eq!(s.select_option(target), None);
        assert!(s.cards().is_empty());
        assert_eq!(s.attempts(), 0);
    }

    #[test]
    fn picking_a_value_not_on_the_cards_is_ignored() {
        let mut s = session(Variant::MultipleChoice, 4);
        let missing = (1..=50).find(|v| !s.options().unwrap().contains(*v)).unwrap();
        assert_eq!(s.select_option(missing), None);
        assert_eq!(s.attempts(), 0);
    }

    #[test]
    fn winning_card_is_highlighted_and_the_rest_disabled() {
        let mut s = session(Variant::MultipleChoice, 5);
        let target = s.target();
        let eval = s.select_option(target).unwrap();
        assert_eq!(eval.outcome, Outcome::Correct);
        let cards = s.cards();
        assert_eq!(cards.len(), 5);
        for (value, state) in cards {
            let expected = if value == target { CardState::Winner } else { CardState::Disabled };
            assert_eq!(state, expected);
        }
        assert_ne!(s.finished_display(), WAITING);
    }

    #[test]
    fn finished_time_waits_until_the_end() {
        let mut s = session(Variant::Text, 6);
        assert_eq!(s.finished_display(), WAITING);
        let target = s.target();
        s.submit_text_guess(&target.to_string()).unwrap();
        assert!(s.status().starts_with("Correct!"));
        assert!(s.finished_display().contains('('));
    }

    #[test]
    fn over_game_accepts_nothing() {
        let mut s = session(Variant::MultipleChoice, 7);
        let target = s.target();
        s.select_option(target);
        assert_eq!(s.submit_text_guess(&target.to_string()), Ok(None));
        assert_eq!(s.submit_text_guess("abc"), Ok(None));
        assert_eq!(s.select_option(target), None);
        assert_eq!(s.attempts(), 1);
        assert_eq!(s.log().len(), 1);
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(chrono::Duration::seconds(42)), "42s");
        assert_eq!(format_elapsed(chrono::Duration::seconds(125)), "2m 05s");
    }
}
