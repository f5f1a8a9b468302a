//! Game state and move application

use tracing::debug;

use crate::board::{Board, Cell, Position, Side};
use crate::error::{GameError, GameResult};
use crate::heuristic;
use crate::moves;
use crate::render::{self, Glyphs};

/// A board plus the side to move.
///
/// There is no stored "finished" state: the game is over as soon as the side
/// to move has no legal placement. No pass is attempted.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameEngine {
    board: Board,
    to_move: Side,
}

/// One applied move as seen by a caller reporting it
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveRecord {
    pub side: Side,
    pub pos: Position,
    pub flipped: usize,
    /// `(white, black)` after the move
    pub score: (usize, usize),
}

/// Outcome of a human move followed by the engine's reply
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TurnReport {
    pub human: MoveRecord,
    /// `None` when the human move already ended the game
    pub reply: Option<MoveRecord>,
    pub finished: bool,
}

impl GameEngine {
    /// Create a new game on a `width` x `width` board, Black to move
    pub fn new(width: usize) -> GameResult<Self> {
        Ok(GameEngine {
            board: Board::new(width)?,
            to_move: Side::Black,
        })
    }

    /// Resume a game from an arbitrary position
    pub fn from_parts(board: Board, to_move: Side) -> Self {
        GameEngine { board, to_move }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Get the side whose turn it is
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Legal placements for the side to move, row-major
    pub fn legal_moves(&self) -> Vec<Position> {
        moves::legal_moves(&self.board, self.to_move)
    }

    pub fn is_legal(&self, pos: Position) -> bool {
        moves::is_legal(&self.board, pos, self.to_move)
    }

    /// Anchors a placement at `pos` would close for the side to move
    pub fn contacts(&self, pos: Position) -> Vec<Position> {
        moves::contacts(&self.board, pos, self.to_move)
    }

    /// Validate a placement without touching the board.
    ///
    /// Checks run in order: bounds, emptiness, legality.
    pub fn check_placeable(&self, pos: Position) -> GameResult<()> {
        if self.board.at(pos)? != Cell::Empty {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        if !self.legal_moves().contains(&pos) {
            return Err(GameError::IllegalMove {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(())
    }

    /// Place a piece for the side to move, flip every captured run and pass
    /// the turn. Returns the number of pieces flipped.
    ///
    /// On error the game is left untouched.
    pub fn apply(&mut self, pos: Position) -> GameResult<usize> {
        self.check_placeable(pos)?;

        let mover = self.to_move.to_cell();
        let mut flipped = 0;

        for anchor in self.contacts(pos) {
            flipped += self.flip_between(pos, anchor, mover);
        }
        self.board.put(pos, mover);

        debug!(side = %self.to_move, row = pos.row, col = pos.col, flipped, "applied move");
        self.to_move = self.to_move.opponent();

        Ok(flipped)
    }

    /// Set every cell strictly between `from` and `anchor` to `mover`
    fn flip_between(&mut self, from: Position, anchor: Position, mover: Cell) -> usize {
        let dr = (anchor.row as isize - from.row as isize).signum();
        let dc = (anchor.col as isize - from.col as isize).signum();
        let mut flipped = 0;

        let mut cur = from.offset(dr, dc);
        while let Some(pos) = cur {
            if pos == anchor {
                break;
            }
            if self.board.cell(pos) != mover {
                self.board.put(pos, mover);
                flipped += 1;
            }
            cur = pos.offset(dr, dc);
        }

        flipped
    }

    /// Check if the side to move is out of legal placements
    pub fn is_finished(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Piece counts as `(white, black)`
    pub fn score(&self) -> (usize, usize) {
        (self.board.count(Cell::White), self.board.count(Cell::Black))
    }

    /// Side with more pieces, `None` on a draw
    pub fn winner(&self) -> Option<Side> {
        let (white, black) = self.score();
        match white.cmp(&black) {
            std::cmp::Ordering::Greater => Some(Side::White),
            std::cmp::Ordering::Less => Some(Side::Black),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The greedy engine's choice for the side to move
    pub fn best_step(&self) -> GameResult<Position> {
        heuristic::best_step(self)
    }

    /// Render the board with the current legal moves highlighted
    pub fn render(&self, glyphs: &Glyphs) -> String {
        render::render(&self.board, &self.legal_moves(), glyphs)
    }

    /// Apply the human's move and, unless that ended the game, the engine's
    /// greedy reply for the other side.
    pub fn play_turn(&mut self, pos: Position) -> GameResult<TurnReport> {
        self.play_turn_with(pos, |_, _| {})
    }

    /// [`GameEngine::play_turn`], calling `on_move` after each applied move
    /// with the game as it stands at that point.
    pub fn play_turn_with<F>(&mut self, pos: Position, mut on_move: F) -> GameResult<TurnReport>
    where
        F: FnMut(&GameEngine, &MoveRecord),
    {
        let human = self.record(pos)?;
        on_move(self, &human);

        if self.is_finished() {
            return Ok(TurnReport {
                human,
                reply: None,
                finished: true,
            });
        }

        let reply_pos = self.best_step()?;
        let reply = self.record(reply_pos)?;
        on_move(self, &reply);

        Ok(TurnReport {
            human,
            reply: Some(reply),
            finished: self.is_finished(),
        })
    }

    fn record(&mut self, pos: Position) -> GameResult<MoveRecord> {
        let side = self.to_move;
        let flipped = self.apply(pos)?;
        Ok(MoveRecord {
            side,
            pos,
            flipped,
            score: self.score(),
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine {
            board: Board::default(),
            to_move: Side::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DEFAULT_WIDTH;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_new_game() {
        let game = GameEngine::new(DEFAULT_WIDTH).unwrap();
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.score(), (2, 2));
        assert!(!game.is_finished());
        assert_eq!(game, GameEngine::default());
    }

    #[test]
    fn test_new_rejects_odd_width() {
        assert_eq!(
            GameEngine::new(5).unwrap_err(),
            GameError::InvalidConfiguration { width: 5 }
        );
    }

    #[test]
    fn test_opening_legal_moves() {
        let game = GameEngine::default();
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 4);
        for pos in [p(2, 3), p(3, 2), p(4, 5), p(5, 4)] {
            assert!(moves.contains(&pos));
        }
    }

    #[test]
    fn test_apply_move_valid() {
        let mut game = GameEngine::default();

        let flipped = game.apply(p(2, 3)).unwrap();
        assert_eq!(flipped, 1);

        assert_eq!(game.board().at(p(2, 3)).unwrap(), Cell::Black);
        assert_eq!(game.board().at(p(3, 3)).unwrap(), Cell::Black);
        assert_eq!(game.to_move(), Side::White);
        assert_eq!(game.score(), (1, 4));
    }

    #[test]
    fn test_apply_errors_leave_state_untouched() {
        let mut game = GameEngine::default();
        let before = game.clone();

        assert_eq!(
            game.apply(p(8, 0)).unwrap_err(),
            GameError::OutOfBounds { row: 8, col: 0 }
        );
        assert_eq!(
            game.apply(p(3, 3)).unwrap_err(),
            GameError::CellOccupied { row: 3, col: 3 }
        );
        assert_eq!(
            game.apply(p(0, 0)).unwrap_err(),
            GameError::IllegalMove { row: 0, col: 0 }
        );

        assert_eq!(game, before);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameEngine::default();
        game.apply(p(2, 3)).unwrap();
        assert_eq!(game.to_move(), Side::White);
        game.apply(p(2, 2)).unwrap();
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.board().at(p(2, 2)).unwrap(), Cell::White);
        assert_eq!(game.board().at(p(3, 3)).unwrap(), Cell::White);
    }

    #[test]
    fn test_flip_multiple_directions() {
        let mut game = GameEngine::default();
        for pos in [p(2, 3), p(2, 2), p(3, 2)] {
            game.apply(pos).unwrap();
        }
        // White at (2,4) closes runs through (3,4) down to (4,4) and
        // through (2,3) left to (2,2)
        assert_eq!(game.to_move(), Side::White);
        let before = game.score();
        let flipped = game.apply(p(2, 4)).unwrap();
        assert_eq!(flipped, 2);
        assert_eq!(game.board().at(p(2, 3)).unwrap(), Cell::White);
        assert_eq!(game.board().at(p(3, 4)).unwrap(), Cell::White);
        assert_eq!(game.score(), (before.0 + 3, before.1 - 2));
    }

    #[test]
    fn test_leading_own_piece_stays_with_mover() {
        // Row 0: _ B W B, and a W B column below (0,0). The row walk passes
        // Black's own (0,1) before reaching White, then closes on (0,3)
        let mut board = Board::new(4).unwrap();
        let positions: Vec<Position> = board.positions().collect();
        for pos in positions {
            board.set(pos, Cell::Empty).unwrap();
        }
        board.set(p(0, 1), Cell::Black).unwrap();
        board.set(p(0, 2), Cell::White).unwrap();
        board.set(p(0, 3), Cell::Black).unwrap();
        board.set(p(1, 0), Cell::White).unwrap();
        board.set(p(2, 0), Cell::Black).unwrap();

        let mut game = GameEngine::from_parts(board, Side::Black);
        assert_eq!(game.contacts(p(0, 0)), vec![p(2, 0), p(0, 3)]);

        let flipped = game.apply(p(0, 0)).unwrap();
        assert_eq!(flipped, 2);
        assert_eq!(game.board().at(p(0, 1)).unwrap(), Cell::Black);
        assert_eq!(game.board().at(p(0, 2)).unwrap(), Cell::Black);
        assert_eq!(game.board().at(p(1, 0)).unwrap(), Cell::Black);
        assert_eq!(game.score(), (0, 6));
    }

    #[test]
    fn test_finished_on_full_small_board() {
        let game = GameEngine::new(2).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.winner(), None);
        assert_eq!(game.best_step().unwrap_err(), GameError::NoMovesAvailable);
    }

    #[test]
    fn test_finished_without_pass() {
        // Black has no move but White would: the game is over anyway
        let mut board = Board::new(4).unwrap();
        let positions: Vec<Position> = board.positions().collect();
        for pos in positions {
            board.set(pos, Cell::Empty).unwrap();
        }
        board.set(p(0, 0), Cell::White).unwrap();
        board.set(p(0, 1), Cell::Black).unwrap();

        let game = GameEngine::from_parts(board.clone(), Side::Black);
        assert!(game.is_finished());
        assert!(!GameEngine::from_parts(board, Side::White).is_finished());
    }

    #[test]
    fn test_play_turn_gets_engine_reply() {
        let mut game = GameEngine::default();
        let report = game.play_turn(p(2, 3)).unwrap();

        assert_eq!(report.human.side, Side::Black);
        assert_eq!(report.human.pos, p(2, 3));
        assert_eq!(report.human.flipped, 1);
        assert_eq!(report.human.score, (1, 4));

        let reply = report.reply.unwrap();
        assert_eq!(reply.side, Side::White);
        assert!(!report.finished);
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.score(), reply.score);
    }

    #[test]
    fn test_play_turn_with_observes_each_move() {
        let mut game = GameEngine::default();
        let mut seen = Vec::new();
        let report = game
            .play_turn_with(p(2, 3), |g, record| seen.push((record.side, g.to_move())))
            .unwrap();

        assert_eq!(seen, vec![(Side::Black, Side::White), (Side::White, Side::Black)]);
        assert_eq!(report.reply.map(|r| r.pos), Some(p(2, 2)));
    }

    #[test]
    fn test_play_turn_rejects_illegal_human_move() {
        let mut game = GameEngine::default();
        let before = game.clone();
        assert!(game.play_turn(p(0, 0)).is_err());
        assert_eq!(game, before);
    }
}
