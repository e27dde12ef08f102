pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::game::{Control, Game};
pub use crate::error::{ConfigError, GuessError};
