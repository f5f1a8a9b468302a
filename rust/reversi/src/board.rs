//! Board representation
//!
//! A square grid of [`Cell`]s with an even side length. The board is a plain
//! value container: it knows about bounds and nothing about the rules.

use std::fmt;

use crate::error::{GameError, GameResult};

/// Side length used when the caller does not pick one
pub const DEFAULT_WIDTH: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    White,
    Black,
}

/// One of the two players; the type of "whose turn it is"
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get the opponent side
    pub fn opponent(&self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Convert side to cell representation
    pub fn to_cell(&self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("black"),
            Side::White => f.write_str("white"),
        }
    }
}

/// A 0-based `(row, col)` coordinate.
///
/// Ordering is row-major, which is the enumeration order of legal-move sets.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Step by a signed offset; `None` if either coordinate would go negative.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.row, self.col)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Check that `width` is an even side length of at least 2
    pub fn check_width(width: usize) -> GameResult<()> {
        if width < 2 || width % 2 != 0 {
            return Err(GameError::InvalidConfiguration { width });
        }
        Ok(())
    }

    /// Create a board with the standard four-piece opening.
    ///
    /// With `c = width / 2`, `(c-1, c-1)` and `(c, c)` are White,
    /// `(c, c-1)` and `(c-1, c)` are Black.
    pub fn new(width: usize) -> GameResult<Self> {
        Self::check_width(width)?;
        Ok(Self::opening(width))
    }

    /// Lay out the opening on an already checked width
    fn opening(width: usize) -> Self {
        let mut cells = vec![vec![Cell::Empty; width]; width];
        let c = width / 2;
        cells[c - 1][c - 1] = Cell::White;
        cells[c][c] = Cell::White;
        cells[c][c - 1] = Cell::Black;
        cells[c - 1][c] = Cell::Black;

        Board { width, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.width && pos.col < self.width
    }

    /// Get the cell at `pos`
    pub fn at(&self, pos: Position) -> GameResult<Cell> {
        self.check_bounds(pos)?;
        Ok(self.cells[pos.row][pos.col])
    }

    /// Overwrite the cell at `pos`
    pub fn set(&mut self, pos: Position, cell: Cell) -> GameResult<()> {
        self.check_bounds(pos)?;
        self.cells[pos.row][pos.col] = cell;
        Ok(())
    }

    /// Count cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&c| c == cell).count())
            .sum()
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Iterate every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.width).flat_map(move |row| (0..self.width).map(move |col| Position::new(row, col)))
    }

    /// Get current board state as flat array [0=empty, 1=black, 2=white]
    /// Array is indexed as: index = row * width + col
    pub fn get_state(&self) -> Vec<u8> {
        self.cells
            .iter()
            .flatten()
            .map(|cell| match cell {
                Cell::Empty => 0,
                Cell::Black => 1,
                Cell::White => 2,
            })
            .collect()
    }

    /// Bounds-unchecked read for callers that already hold an in-bounds position
    pub(crate) fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Bounds-unchecked write, same contract as [`Board::cell`]
    pub(crate) fn put(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    fn check_bounds(&self, pos: Position) -> GameResult<()> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                row: pos.row as i64,
                col: pos.col as i64,
            })
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::opening(DEFAULT_WIDTH)
    }
}
