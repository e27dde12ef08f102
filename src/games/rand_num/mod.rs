pub mod console;
pub mod evaluator;
pub mod game;
pub mod log;
pub mod options;
pub mod range;
pub mod renderer;
pub mod session;
pub mod state;

pub use evaluator::{classify, parse_guess, Evaluation, GuessEvaluator, Outcome, Round};
pub use game::NumberGame;
pub use log::{GuessLog, LogEntry};
pub use options::OptionSet;
pub use range::GuessRange;
pub use session::{CardState, Session};
pub use state::GameState;

use serde::{Deserialize, Serialize};

/// Which front-end capabilities are switched on. Both share one evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Type guesses only
    Text,
    /// Type guesses or pick from option cards
    #[serde(alias = "cards")]
    #[value(name = "cards")]
    MultipleChoice,
}

impl Variant {
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Text => "Classic",
            Variant::MultipleChoice => "Multiple choice",
        }
    }
}
