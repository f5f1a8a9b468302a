use crate::{GameEngine, GameError, Glyphs, Position, Side, DEFAULT_WIDTH};
use ndarray::Array2;
use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
/// PyO3 bindings for the reversi engine
/// Exposes `GameEngine` to Python
use pyo3::prelude::*;

fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a reversi game
///
/// Coordinates are 0-based `(row, col)` pairs.
#[pyclass]
pub struct ReversiGame {
    game: GameEngine,
}

#[pymethods]
impl ReversiGame {
    /// Create a new game with the standard four-piece opening
    ///
    /// Args:
    ///     width (int): Even board side length, at least 2 (default 8)
    ///
    /// Raises:
    ///     ValueError: If width is odd or too small
    #[new]
    #[pyo3(signature = (width = DEFAULT_WIDTH))]
    pub fn new(width: usize) -> PyResult<Self> {
        let game = GameEngine::new(width).map_err(to_py_err)?;
        Ok(Self { game })
    }

    /// Replace the game with a fresh one of the same width
    pub fn reset(&mut self) -> PyResult<()> {
        self.game = GameEngine::new(self.game.width()).map_err(to_py_err)?;
        Ok(())
    }

    /// Place a piece for the side to move
    ///
    /// Returns:
    ///     int: Number of opponent pieces flipped
    ///
    /// Raises:
    ///     ValueError: If the move is out of bounds, occupied or illegal
    pub fn step(&mut self, row: usize, col: usize) -> PyResult<usize> {
        self.game.apply(Position::new(row, col)).map_err(to_py_err)
    }

    /// The greedy engine's move for the side to move
    ///
    /// Raises:
    ///     ValueError: If the game is finished
    pub fn best_step(&self) -> PyResult<(usize, usize)> {
        let pos = self.game.best_step().map_err(to_py_err)?;
        Ok((pos.row, pos.col))
    }

    /// Get the current board state as a 2D numpy array
    ///
    /// Returns:
    ///     np.ndarray: Shape (width, width) with dtype uint8
    ///         - 0 = Empty cell
    ///         - 1 = Black piece
    ///         - 2 = White piece
    pub fn get_board<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray2<u8>> {
        let width = self.game.width();
        let state = self.game.board().get_state();
        let array = Array2::from_shape_fn((width, width), |(row, col)| state[row * width + col]);

        Ok(PyArray2::from_owned_array(py, array))
    }

    /// Legal moves for the side to move, row-major
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.game
            .legal_moves()
            .into_iter()
            .map(|pos| (pos.row, pos.col))
            .collect()
    }

    /// Get the side to move
    ///
    /// Returns:
    ///     int: 0 for Black, 1 for White
    pub fn get_current_player(&self) -> u8 {
        match self.game.to_move() {
            Side::Black => 0,
            Side::White => 1,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.game.is_finished()
    }

    /// Get piece counts
    ///
    /// Returns:
    ///     tuple: (white_count, black_count)
    pub fn score(&self) -> (usize, usize) {
        self.game.score()
    }

    /// Draw the board
    ///
    /// Args:
    ///     ascii (bool): Use plain characters instead of emoji
    #[pyo3(signature = (ascii = false))]
    pub fn render(&self, ascii: bool) -> String {
        let glyphs = if ascii { Glyphs::ASCII } else { Glyphs::EMOJI };
        self.game.render(&glyphs)
    }
}

/// Python module definition
///
/// This module can be imported in Python as `reversi`
#[pymodule]
fn reversi(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<ReversiGame>()?;
    Ok(())
}
