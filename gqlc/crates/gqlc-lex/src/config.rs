//! Lexer configuration.
//!
//! Settings are plain data with serde defaults, so a TOML file only needs to
//! name the switches it changes.
//!
//! ```toml
//! emit_comments = false
//! invalid_messages = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "gqlc.toml";

/// Lexer behavior switches.
///
/// # Example
///
/// ```
/// use gqlc_lex::LexerConfig;
///
/// let config = LexerConfig::from_toml_str("emit_comments = false").unwrap();
/// assert!(!config.emit_comments);
/// assert!(!config.invalid_messages);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Produce `Comment` tokens. When off, comments are skipped like
    /// ignored tokens.
    #[serde(default = "default_true")]
    pub emit_comments: bool,

    /// Put the violation message in the value of `Invalid` tokens.
    #[serde(default)]
    pub invalid_messages: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            emit_comments: true,
            invalid_messages: false,
        }
    }
}

impl LexerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded lexer configuration");

        Ok(config)
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
