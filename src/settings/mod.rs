//! Player-facing settings, read from an optional JSON file.
//!
//! Missing fields fall back to their defaults. Loaded settings are validated
//! before use; see [`rules`] for what is checked.

pub mod error;
pub mod rules;

pub use error::{SettingsError, SettingsViolation};

use crate::game::{
    DivisionGame, GameConfig, DEFAULT_DIVIDEND, DEFAULT_DIVISOR, DEFAULT_FEEDBACK_DELAY,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;

/// How snapshots are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

/// Game settings.
///
/// ```rust
/// use divvy::settings::{OutputMode, Settings};
///
/// let settings = Settings::from_json(r#"{ "divisor": 4, "output": "json" }"#).unwrap();
/// assert_eq!(settings.dividend, 14);
/// assert_eq!(settings.divisor, 4);
/// assert_eq!(settings.output, OutputMode::Json);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Apples in the first round
    pub dividend: i64,
    /// Baskets in the first round
    pub divisor: i64,
    /// How long "incorrect" feedback stays visible, in milliseconds
    pub feedback_delay_ms: u64,
    /// Renderer used by the terminal front end
    pub output: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dividend: i64::from(DEFAULT_DIVIDEND),
            divisor: i64::from(DEFAULT_DIVISOR),
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY.as_millis() as u64,
            output: OutputMode::Text,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validated()
    }

    /// Read, parse and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Return `self` if every rule passes, otherwise all violations.
    pub fn validated(self) -> Result<Self, SettingsError> {
        match rules::validate(&self) {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(SettingsError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    /// Configuration for the first round (clamped).
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.dividend, self.divisor)
    }

    /// A fresh game using these settings.
    pub fn new_game(&self) -> DivisionGame {
        DivisionGame::new(self.game_config()).with_feedback_delay(self.feedback_delay())
    }
}
