use std::path::PathBuf;

use reversi::GameError;

/// Errors surfaced to a chat user in reply to a message.
///
/// The `Display` text is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("{0}")]
    Game(#[from] GameError),

    #[error("unrecognized command: {0:?} (try begin, reset, show or `step <row> <col>`)")]
    UnrecognizedCommand(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
