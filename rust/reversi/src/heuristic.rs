//! Greedy one-ply move selection
//!
//! Algorithm:
//! - For each legal move, walk the anchors it would close (in direction
//!   order) and accumulate the row distance from the placement to each anchor
//! - Whenever the running total is exactly zero after an addition, the
//!   column distance to that anchor is added instead; column distance never
//!   counts once any row distance has been accumulated
//! - Select the move with the strictly greatest value
//! - Tie-breaking: the first move in legal-move order (row-major) wins
//!
//! Key characteristics:
//! - Deterministic: same game state always produces same move
//! - No lookahead, no randomness

use tracing::debug;

use crate::board::Position;
use crate::error::{GameError, GameResult};
use crate::game::GameEngine;

/// Score a placement for the side to move
pub fn value(game: &GameEngine, pos: Position) -> GameResult<usize> {
    game.check_placeable(pos)?;

    let mut value = 0;
    for anchor in game.contacts(pos) {
        value += anchor.row.abs_diff(pos.row);
        if value == 0 {
            value += anchor.col.abs_diff(pos.col);
        }
    }

    Ok(value)
}

/// Compute the engine's move for the side to move
///
/// # Errors
/// [`GameError::NoMovesAvailable`] when the game is already finished
pub fn best_step(game: &GameEngine) -> GameResult<Position> {
    let moves = game.legal_moves();
    let Some(&first) = moves.first() else {
        return Err(GameError::NoMovesAvailable);
    };

    let mut best = (first, value(game, first)?);
    for &pos in &moves[1..] {
        let v = value(game, pos)?;
        if v > best.1 {
            best = (pos, v);
        }
    }

    debug!(side = %game.to_move(), row = best.0.row, col = best.0.col, value = best.1, "heuristic choice");
    Ok(best.0)
}
