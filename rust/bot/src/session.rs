//! Per-conversation games and the reply text sent back to the chat.
//!
//! Each conversation key owns exactly one [`GameEngine`]. A human move is
//! always followed by the engine's reply; once a game ends the final score is
//! reported and the conversation gets a fresh board.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Write as _;

use reversi::{GameEngine, GameError, Glyphs, Position, Side};
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::config::BotConfig;
use crate::error::BotError;

/// Game state for one conversation
#[derive(Debug, Clone)]
pub struct Session {
    game: GameEngine,
}

impl Session {
    pub fn game(&self) -> &GameEngine {
        &self.game
    }
}

/// Registry of sessions keyed by conversation id
#[derive(Debug)]
pub struct SessionStore {
    /// Fresh game every new session and reset starts from
    fresh: GameEngine,
    glyphs: Glyphs,
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    /// Create an empty store whose games are `width` wide
    pub fn new(width: usize, glyphs: Glyphs) -> Result<Self, GameError> {
        Ok(SessionStore {
            fresh: GameEngine::new(width)?,
            glyphs,
            sessions: HashMap::new(),
        })
    }

    pub fn from_config(config: &BotConfig) -> Result<Self, GameError> {
        Self::new(config.board_width, config.glyphs.glyphs())
    }

    pub fn get(&self, key: &str) -> Option<&Session> {
        self.sessions.get(key)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Handle one raw chat message for conversation `key` and return the
    /// reply text. On error the message of the error is meant for the user.
    pub fn handle(&mut self, key: &str, raw: &str) -> Result<String, BotError> {
        let result = Command::parse(raw).and_then(|command| self.dispatch(key, command));
        if let Err(err) = &result {
            warn!(session = key, message = raw.trim(), error = %err, "rejected message");
        }
        result
    }

    /// Run an already parsed command for conversation `key`
    pub fn dispatch(&mut self, key: &str, command: Command) -> Result<String, BotError> {
        let fresh = self.fresh.clone();
        let glyphs = self.glyphs;
        let session = self.session_mut(key);

        match command {
            Command::Reset => {
                session.game = fresh;
                info!(session = key, "game reset");
                Ok(session.game.render(&glyphs))
            }
            Command::Show => Ok(session.game.render(&glyphs)),
            Command::Step { row, col } => {
                let pos = to_position(row, col)?;
                let reply = play(&mut session.game, pos, &glyphs)?;
                if session.game.is_finished() {
                    let (white, black) = session.game.score();
                    info!(session = key, white, black, "game finished");
                    session.game = fresh;
                }
                Ok(reply)
            }
        }
    }

    fn session_mut(&mut self, key: &str) -> &mut Session {
        match self.sessions.entry(key.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                info!(session = key, width = self.fresh.width(), "new session");
                entry.insert(Session {
                    game: self.fresh.clone(),
                })
            }
        }
    }
}

/// Translate 1-based chat coordinates into a board position
fn to_position(row: i64, col: i64) -> Result<Position, GameError> {
    let zero_based = |n: i64| n.checked_sub(1).and_then(|n| usize::try_from(n).ok());
    match (zero_based(row), zero_based(col)) {
        (Some(r), Some(c)) => Ok(Position::new(r, c)),
        _ => Err(GameError::OutOfBounds {
            row: row.saturating_sub(1),
            col: col.saturating_sub(1),
        }),
    }
}

fn side_glyph(side: Side, glyphs: &Glyphs) -> &'static str {
    match side {
        Side::Black => glyphs.black,
        Side::White => glyphs.white,
    }
}

fn score_line(out: &mut String, label: &str, (white, black): (usize, usize), glyphs: &Glyphs) {
    let _ = writeln!(
        out,
        "{label}: {} {black}, {} {white}",
        glyphs.black, glyphs.white
    );
}

/// Play the human move and the engine reply, describing both
fn play(game: &mut GameEngine, pos: Position, glyphs: &Glyphs) -> Result<String, GameError> {
    if game.is_finished() {
        return Err(GameError::NoMovesAvailable);
    }

    let mut out = String::new();
    let mut human_turn = true;
    let report = game.play_turn_with(pos, |game, record| {
        let who = if human_turn { "User" } else { "AI" };
        human_turn = false;
        debug!(who, side = %record.side, row = record.pos.row, col = record.pos.col, "turn move");
        let _ = writeln!(
            out,
            "{who} {} chose to step on {}, {}",
            side_glyph(record.side, glyphs),
            record.pos.row + 1,
            record.pos.col + 1
        );
        score_line(&mut out, "Current score", record.score, glyphs);
        out.push_str(&game.render(glyphs));
    })?;

    if report.finished {
        score_line(&mut out, "Game finished, score", game.score(), glyphs);
        out.push_str("The game board is reset, please start a new game.\n");
    }

    Ok(out)
}
