//! Session configuration.
//!
//! Hosts build a `SessionConfig` with the builder methods or load one from
//! TOML:
//!
//! ```toml
//! max_guesses = 10
//! seed = 42
//! ```
//!
//! Every field is optional in TOML; missing fields take their defaults.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Guesses allowed before the game is lost.
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Guesses allowed before the game is lost (default: 10).
    pub max_guesses: usize,

    /// Seed for the secret. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            seed: None,
        }
    }
}

/// A configuration could not be loaded or is unusable.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The TOML text did not parse.
    #[display("invalid session config: {_0}")]
    Parse(toml::de::Error),
    /// `max_guesses` must allow at least one guess.
    #[display("max_guesses must be at least 1, got {max_guesses}")]
    InvalidMaxGuesses { max_guesses: usize },
}

impl SessionConfig {
    /// Set the guess limit.
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Set a fixed seed for the secret.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_guesses == 0 {
            return Err(ConfigError::InvalidMaxGuesses {
                max_guesses: self.max_guesses,
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.max_guesses, 10);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default().with_max_guesses(12).with_seed(123);

        assert_eq!(config.max_guesses, 12);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_zero_guesses_rejected() {
        let err = SessionConfig::default().with_max_guesses(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxGuesses { max_guesses: 0 }));
    }

    #[test]
    fn test_from_toml() {
        let config = SessionConfig::from_toml_str("max_guesses = 8\nseed = 7\n").unwrap();
        assert_eq!(config, SessionConfig::default().with_max_guesses(8).with_seed(7));

        let partial = SessionConfig::from_toml_str("seed = 99").unwrap();
        assert_eq!(partial.max_guesses, DEFAULT_MAX_GUESSES);

        let empty = SessionConfig::from_toml_str("").unwrap();
        assert_eq!(empty, SessionConfig::default());
    }

    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            SessionConfig::from_toml_str("max_guesses = \"ten\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SessionConfig::from_toml_str("max_guesses = 0"),
            Err(ConfigError::InvalidMaxGuesses { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
