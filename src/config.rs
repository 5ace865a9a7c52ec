//! Console presentation settings.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Presentation settings for the console game.
///
/// Every key is optional in the TOML file; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Symbol printed for a cross.
    #[serde(default = "default_cross_symbol")]
    cross_symbol: char,

    /// Symbol printed for a circle.
    #[serde(default = "default_circle_symbol")]
    circle_symbol: char,

    /// Symbol printed for an empty cell.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: char,

    /// Prompt printed when asking for a position again.
    #[serde(default = "default_prompt")]
    prompt: String,
}

#[instrument]
fn default_cross_symbol() -> char {
    'X'
}

#[instrument]
fn default_circle_symbol() -> char {
    'O'
}

#[instrument]
fn default_empty_symbol() -> char {
    ' '
}

#[instrument]
fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            cross_symbol: default_cross_symbol(),
            circle_symbol: default_circle_symbol(),
            empty_symbol: default_empty_symbol(),
            prompt: default_prompt(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            cross = %config.cross_symbol,
            circle = %config.circle_symbol,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file when one is given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let symbols = [self.cross_symbol, self.circle_symbol, self.empty_symbol];
        if symbols[0] == symbols[1] || symbols[0] == symbols[2] || symbols[1] == symbols[2] {
            return Err(ConfigError::new(format!(
                "Cell symbols must be distinct, got {:?}",
                symbols
            )));
        }
        if symbols.iter().any(|symbol| symbol.is_control()) {
            return Err(ConfigError::new(
                "Cell symbols must be printable characters".to_string(),
            ));
        }
        Ok(())
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
