//! Chat command parsing
//!
//! Accepted forms (keywords may carry a leading `/`, case-insensitive):
//! - `begin`, `reset`: start a fresh game
//! - `show`: draw the current board
//! - `step <row> <col>` or just `<row> <col>`: play a move, 1-based
//!
//! Coordinates may be separated by whitespace or by `,` `，` `、` `､`.

use crate::error::BotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    Show,
    /// A move as typed by the player, 1-based
    Step { row: i64, col: i64 },
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '\u{ff0c}' | '\u{3001}' | '\u{ff64}')
}

fn parse_coordinates(text: &str) -> Option<(i64, i64)> {
    let mut parts = text.split(is_separator).filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

impl Command {
    pub fn parse(raw: &str) -> Result<Command, BotError> {
        let text = raw.trim();
        let unrecognized = || BotError::UnrecognizedCommand(text.to_string());

        let (head, rest) = match text.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (text, ""),
        };
        let keyword = head.strip_prefix('/').unwrap_or(head).to_ascii_lowercase();

        let coordinates = match keyword.as_str() {
            "begin" | "reset" if rest.is_empty() => return Ok(Command::Reset),
            "show" if rest.is_empty() => return Ok(Command::Show),
            "step" => rest,
            _ => text,
        };

        let (row, col) = parse_coordinates(coordinates).ok_or_else(unrecognized)?;
        Ok(Command::Step { row, col })
    }
}
