//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tallytoe_core::{Player as Mark, ScoringPolicy};
use tracing::{debug, info, instrument};

/// Which side takes the first move in a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The person at the console opens.
    #[default]
    Human,
    /// The computer opens.
    Computer,
}

impl FirstPlayer {
    /// The mark that moves first.
    pub fn mark(self) -> Mark {
        match self {
            Self::Human => Mark::Human,
            Self::Computer => Mark::Computer,
        }
    }
}

/// Settings for a game session.
///
/// ```toml
/// first_player = "computer"
///
/// [scoring]
/// urgent_depth = 2
/// urgent_weight = 200
/// tie_break = "last_in_scan_order"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who opens the game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Weights and tie-break for the computer's move selection.
    #[serde(default)]
    scoring: ScoringPolicy,
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(first_player: FirstPlayer, scoring: ScoringPolicy) -> Self {
        Self {
            first_player,
            scoring,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(first_player = ?config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file when it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Rejects scoring weights the selector cannot use.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid [scoring] table: {}", e)))
    }

    /// Returns a copy with a different opening side.
    #[must_use]
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Returns a copy with a different scoring policy.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallytoe_core::TieBreak;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.first_player(), FirstPlayer::Human);
    }

    #[test]
    fn test_partial_scoring_table_keeps_other_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            first_player = "computer"

            [scoring]
            tie_break = "last_in_scan_order"
            "#,
        )
        .unwrap();
        assert_eq!(config.first_player().mark(), Mark::Computer);
        assert_eq!(config.scoring().tie_break, TieBreak::LastInScanOrder);
        assert_eq!(
            config.scoring().urgent_weight,
            ScoringPolicy::DOMINANT_WEIGHT
        );
    }

    #[test]
    fn test_validate_rejects_zero_weight() {
        let config = GameConfig::default()
            .with_scoring(ScoringPolicy::default().with_urgent_weight(0));
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("urgent_weight"));
    }
}
