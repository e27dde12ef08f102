use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::games::rand_num::{GuessEvaluator, GuessRange, Variant};

pub const CONFIG_FILE: &str = "numguess.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub min: i64,
    pub max: i64,
    /// Cards dealt per round in the multiple-choice variant.
    pub option_count: usize,
    /// `None` asks at startup.
    pub variant: Option<Variant>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 50,
            option_count: 5,
            variant: None,
        }
    }
}

impl GameConfig {
    /// Loads config from a specified path.
    /// Returns default config if file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn range(&self) -> GuessRange {
        GuessRange::new(self.min, self.max)
    }

    /// Option checks only apply to the card variant, since text play never deals cards.
    pub fn validate(&self, variant: Variant) -> Result<(), ConfigError> {
        self.evaluator(variant).map(|_| ())
    }

    pub fn evaluator(&self, variant: Variant) -> Result<GuessEvaluator, ConfigError> {
        GuessEvaluator::new(self.range(), self.option_count, variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.range(), GuessRange::new(1, 50));
        assert_eq!(config.option_count, 5);
        assert_eq!(config.variant, None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = GameConfig::load_from(dir.path().join("nope.json")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = GameConfig {
            min: 10,
            max: 99,
            option_count: 4,
            variant: Some(Variant::MultipleChoice),
        };
        config.save_to(&path).unwrap();
        assert_eq!(GameConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "max": 100, "variant": "text" }"#).unwrap();
        let config = GameConfig::load_from(&path).unwrap();
        assert_eq!(config.min, 1);
        assert_eq!(config.max, 100);
        assert_eq!(config.variant, Some(Variant::Text));
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not json").unwrap();
        assert!(GameConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_validation() {
        let mut config = GameConfig::default();
        assert_eq!(config.validate(Variant::MultipleChoice), Ok(()));

        config.option_count = 60;
        assert_eq!(config.validate(Variant::Text), Ok(()));
        assert_eq!(
            config.validate(Variant::MultipleChoice),
            Err(ConfigError::TooManyOptions { options: 60, available: 50 })
        );

        config.option_count = 1;
        assert_eq!(
            config.validate(Variant::MultipleChoice),
            Err(ConfigError::TooFewOptions(1))
        );

        config.min = 51;
        assert_eq!(
            config.validate(Variant::Text),
            Err(ConfigError::EmptyRange { min: 51, max: 50 })
        );
    }

    #[test]
    fn test_full_i64_range_is_valid() {
        let config = GameConfig {
            min: i64::MIN,
            max: i64::MAX,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(Variant::Text), Ok(()));
        assert_eq!(config.validate(Variant::MultipleChoice), Ok(()));
    }
}
