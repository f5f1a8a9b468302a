//! Move generation
//!
//! Two walks over the eight queen directions:
//! - the *contact* walk from a placement, which finds the mover-coloured
//!   anchor closing a capturing run in each direction;
//! - the *extend* walk from a piece the mover already owns, which finds the
//!   empty landing cell that would close a run back towards that piece.
//!
//! The legal-move set is the union of extend walks over all of the mover's
//! pieces, deduplicated through a `BTreeSet` so enumeration is row-major.

use std::collections::BTreeSet;

use crate::board::{Board, Cell, Position, Side};

/// The eight unit vectors, in the order walks are tried
pub const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Step from `pos` by `(dr, dc)`, staying on the board
fn step(board: &Board, pos: Position, (dr, dc): (isize, isize)) -> Option<Position> {
    pos.offset(dr, dc).filter(|next| board.in_bounds(*next))
}

/// Walk from `from` in one direction and return the anchor of the capturing
/// run, if any.
///
/// Out of bounds or an empty cell ends the walk without a capture. An
/// opponent cell marks the run as live; the first mover cell seen on a live
/// run is the anchor.
fn anchor_in_direction(
    board: &Board,
    from: Position,
    mover: Cell,
    dir: (isize, isize),
) -> Option<Position> {
    let mut pos = from;
    let mut opponent_seen = false;

    loop {
        pos = step(board, pos, dir)?;
        match board.cell(pos) {
            Cell::Empty => return None,
            cell if cell != mover => opponent_seen = true,
            _ if opponent_seen => return Some(pos),
            _ => {}
        }
    }
}

/// Walk outward from a piece the mover owns and return the empty cell that
/// would close a run back onto it.
fn landing_in_direction(
    board: &Board,
    from: Position,
    mover: Cell,
    dir: (isize, isize),
) -> Option<Position> {
    let mut pos = from;
    let mut opponent_seen = false;

    loop {
        pos = step(board, pos, dir)?;
        match board.cell(pos) {
            Cell::Empty if opponent_seen => return Some(pos),
            Cell::Empty => return None,
            cell if cell == mover => return None,
            _ => opponent_seen = true,
        }
    }
}

/// Anchors of every capturing run a piece at `pos` closes for `side`,
/// one per direction at most, in [`DIRECTIONS`] order.
pub fn contacts(board: &Board, pos: Position, side: Side) -> Vec<Position> {
    if !board.in_bounds(pos) {
        return Vec::new();
    }

    let mover = side.to_cell();
    DIRECTIONS
        .iter()
        .filter_map(|&dir| anchor_in_direction(board, pos, mover, dir))
        .collect()
}

/// Landing cells reachable from the mover's piece at `from`
fn extend(board: &Board, from: Position, mover: Cell) -> impl Iterator<Item = Position> + '_ {
    DIRECTIONS
        .iter()
        .filter_map(move |&dir| landing_in_direction(board, from, mover, dir))
}

/// All legal placements for `side`, each distinct position once, row-major
pub fn legal_moves(board: &Board, side: Side) -> Vec<Position> {
    let mover = side.to_cell();
    let moves: BTreeSet<Position> = board
        .positions()
        .filter(|&pos| board.cell(pos) == mover)
        .flat_map(|from| extend(board, from, mover))
        .collect();

    moves.into_iter().collect()
}

/// Check if `side` may place a piece at `pos`
pub fn is_legal(board: &Board, pos: Position, side: Side) -> bool {
    if !board.in_bounds(pos) || board.cell(pos) != Cell::Empty {
        return false;
    }
    legal_moves(board, side).contains(&pos)
}
