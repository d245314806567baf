//! Game settings, layered from defaults, a TOML file and overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use recursive_tictactoe::geometry::fit_side_length;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Smallest target board size, in pixels.
pub const MIN_SIZE: u32 = 100;

/// Who makes the moves for one side.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed on stdin.
    #[default]
    Human,
    /// Uniformly random legal moves.
    Random,
}

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Nesting levels.
    depth: usize,

    /// Target board size in pixels.
    size: u32,

    /// Who plays X.
    player_x: PlayerKind,

    /// Who plays O.
    player_o: PlayerKind,

    /// Seed for the random players; drawn from the OS when unset.
    seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            depth: 1,
            size: 800,
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Human,
            seed: None,
        }
    }
}

/// Values from the command line or environment; `None` keeps the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Nesting levels.
    pub depth: Option<usize>,
    /// Target board size in pixels.
    pub size: Option<u32>,
    /// Who plays X.
    pub player_x: Option<PlayerKind>,
    /// Who plays O.
    pub player_o: Option<PlayerKind>,
    /// Seed for the random players.
    pub seed: Option<u64>,
}

impl Settings {
    /// Loads settings from a TOML file. Missing fields keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(depth = settings.depth, "Settings loaded");
        Ok(settings)
    }

    /// Resolves the final settings: defaults, then the optional file, then
    /// the overrides, normalized.
    #[instrument(skip(overrides))]
    pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let base = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides).normalized())
    }

    /// Applies every override that is set.
    pub fn with_overrides(self, overrides: &Overrides) -> Self {
        Self {
            depth: overrides.depth.unwrap_or(self.depth),
            size: overrides.size.unwrap_or(self.size),
            player_x: overrides.player_x.unwrap_or(self.player_x),
            player_o: overrides.player_o.unwrap_or(self.player_o),
            seed: overrides.seed.or(self.seed),
        }
    }

    /// Clamps depth to at least 1 and size to at least [`MIN_SIZE`].
    pub fn normalized(self) -> Self {
        if self.depth < 1 || self.size < MIN_SIZE {
            warn!(depth = self.depth, size = self.size, "Clamping settings");
        }
        Self {
            depth: self.depth.max(1),
            size: self.size.max(MIN_SIZE),
            ..self
        }
    }

    /// Board side actually used: the target size fitted to whole cells.
    pub fn side(&self) -> u32 {
        fit_side_length(self.size, self.depth)
    }

    /// True if at least one side is typed in by a person.
    pub fn has_human(&self) -> bool {
        self.player_x == PlayerKind::Human || self.player_o == PlayerKind::Human
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
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None, &Overrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(*settings.depth(), 1);
        assert_eq!(settings.side(), 798);
        assert!(settings.has_human());
    }

    #[test]
    fn test_file_then_overrides() {
        let file = write_config("depth = 3\nsize = 500\nplayer_o = \"random\"\nseed = 11\n");
        let overrides = Overrides {
            size: Some(900),
            ..Overrides::default()
        };
        let settings = Settings::load(Some(file.path()), &overrides).unwrap();
        assert_eq!(*settings.depth(), 3);
        assert_eq!(*settings.size(), 900);
        assert_eq!(*settings.player_x(), PlayerKind::Human);
        assert_eq!(*settings.player_o(), PlayerKind::Random);
        assert_eq!(*settings.seed(), Some(11));
        assert_eq!(settings.side(), 891);
    }

    #[test]
    fn test_normalization_clamps() {
        let overrides = Overrides {
            depth: Some(0),
            size: Some(10),
            ..Overrides::default()
        };
        let settings = Settings::load(None, &overrides).unwrap();
        assert_eq!(*settings.depth(), 1);
        assert_eq!(*settings.size(), MIN_SIZE);
        assert_eq!(settings.side(), 99);
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let file = write_config("colour = \"red\"\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_file("/nonexistent/recursive_games.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_all_random_has_no_human() {
        let overrides = Overrides {
            player_x: Some(PlayerKind::Random),
            player_o: Some(PlayerKind::Random),
            ..Overrides::default()
        };
        let settings = Settings::load(None, &overrides).unwrap();
        assert!(!settings.has_human());
        assert_eq!(PlayerKind::Random.to_string(), "random");
    }
}
