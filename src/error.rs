use thiserror::Error;

/// Rejected text input. Nothing in the game changes when one of these is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{value} is outside the range {min}-{max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("range minimum {min} is greater than maximum {max}")]
    EmptyRange { min: i64, max: i64 },

    #[error("need at least 2 option cards, got {0}")]
    TooFewOptions(usize),

    #[error("{options} option cards do not fit in a range of {available} numbers")]
    TooManyOptions { options: usize, available: u64 },
}
