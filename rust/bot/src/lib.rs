//! Chat front end for the reversi engine
//!
//! Turns raw chat messages into engine calls, one game per conversation, and
//! formats the replies. The transport (chat SDK, terminal) lives outside.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::Command;
pub use config::{BotConfig, GlyphStyle};
pub use error::{BotError, ConfigError};
pub use session::{Session, SessionStore};
