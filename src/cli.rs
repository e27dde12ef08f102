use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::config::{GameConfig, CONFIG_FILE};
use crate::core::engine::Engine;
use crate::core::menu::VariantMenu;
use crate::games::rand_num::{console, NumberGame, Session, Variant};
use crate::logging;

#[derive(Parser, Debug)]
#[command(name = "numguess")]
#[command(about = "🎯 Guess the hidden number, in the terminal")]
#[command(version)]
pub struct Cli {
    /// Config file; missing file means defaults
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Lowest number the target can be
    #[arg(long)]
    pub min: Option<i64>,

    /// Highest number the target can be
    #[arg(long)]
    pub max: Option<i64>,

    /// Cards dealt per round in the cards variant
    #[arg(long = "options")]
    pub option_count: Option<usize>,

    /// Game variant (if not specified, will show selection)
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Line-based play on stdin/stdout instead of the full-screen UI
    #[arg(long)]
    pub plain: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    pub save_config: bool,
}

impl Cli {
    /// File values with command-line overrides on top.
    pub fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = GameConfig::load_from(&self.config)?;
        if let Some(min) = self.min {
            config.min = min;
        }
        if let Some(max) = self.max {
            config.max = max;
        }
        if let Some(count) = self.option_count {
            config.option_count = count;
        }
        if self.variant.is_some() {
            config.variant = self.variant;
        }
        Ok(config)
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // The full-screen UI owns stdout, so it only logs when given a file
    let to_stderr = cli.plain && cli.log_file.is_none();
    logging::init_logging(cli.log_file.as_deref(), to_stderr, cli.verbose)?;

    let config = cli.resolve_config()?;
    if cli.save_config {
        config.save_to(&cli.config)?;
        info!(path = %cli.config.display(), "config saved");
    }

    if cli.plain {
        // no menu without a full-screen terminal
        let variant = config.variant.unwrap_or(Variant::Text);
        let mut session = Session::new(&config, variant)?;
        let stdin = io::stdin();
        return console::run(&mut session, stdin.lock(), &mut io::stdout());
    }

    if let Some(variant) = config.variant {
        config.validate(variant)?;
    }

    let mut terminal = ratatui::init();
    let result = play_tui(&mut terminal, &config);
    ratatui::restore();
    result
}

fn play_tui(terminal: &mut ratatui::DefaultTerminal, config: &GameConfig) -> Result<()> {
    let variant = match config.variant {
        Some(variant) => variant,
        None => match VariantMenu::new().run(terminal)? {
            Some(variant) => variant,
            None => return Ok(()),
        },
    };
    let session = Session::new(config, variant)?;

    info!(variant = variant.label(), min = config.min, max = config.max, "starting");
    let game = NumberGame::new(session);
    let game = Engine::new(game).run(terminal)?;
    info!(
        attempts = game.session().attempts(),
        finished = game.session().is_over(),
        "quit"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn flags_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        GameConfig { min: 5, max: 500, option_count: 6, variant: Some(Variant::Text) }
            .save_to(&path)
            .unwrap();

        let cli = Cli::parse_from([
            "numguess",
            "--config",
            path.to_str().unwrap(),
            "--max",
            "60",
            "--variant",
            "cards",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.min, 5);
        assert_eq!(config.max, 60);
        assert_eq!(config.option_count, 6);
        assert_eq!(config.variant, Some(Variant::MultipleChoice));
    }

    #[test]
    fn no_flags_means_file_or_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let cli = Cli::parse_from(["numguess", "-c", path.to_str().unwrap(), "--plain"]);
        assert!(cli.plain);
        assert_eq!(cli.resolve_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["numguess", "--variant", "hard"]).is_err());
    }
}
