use std::path::Path;

use reversi::{Board, Glyphs, DEFAULT_WIDTH};
use tracing::warn;

use crate::error::ConfigError;

/// Glyph preset selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    #[default]
    Emoji,
    Ascii,
}

impl GlyphStyle {
    pub fn glyphs(&self) -> Glyphs {
        match self {
            GlyphStyle::Emoji => Glyphs::EMOJI,
            GlyphStyle::Ascii => Glyphs::ASCII,
        }
    }
}

/// Top-level bot configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Side length of every new board
    pub board_width: usize,
    pub glyphs: GlyphStyle,
    /// Session key used by the terminal front end
    pub session: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            board_width: DEFAULT_WIDTH,
            glyphs: GlyphStyle::default(),
            session: "local".to_string(),
        }
    }
}

impl BotConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: BotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::check_width(self.board_width)
            .map_err(|err| ConfigError::Validation(err.to_string()))?;
        if self.session.trim().is_empty() {
            return Err(ConfigError::Validation(
                "session must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
