//! Core types and game logic for Reversi (Othello)
//!
//! - `board`: the grid of cells and coordinates
//! - `moves`: capture walks and legal-move generation
//! - `game`: move application, turn order, terminal detection and scoring
//! - `heuristic`: the greedy engine used as the automated opponent
//! - `render`: text drawing of a board with legal moves highlighted

pub mod board;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod moves;
pub mod render;

// PyO3 bindings module
#[cfg(feature = "python")]
pub mod bindings;

pub use board::{Board, Cell, Position, Side, DEFAULT_WIDTH};
pub use error::{GameError, GameResult};
pub use game::{GameEngine, MoveRecord, TurnReport};
pub use render::{render, Glyphs, Markers};

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Play up to `picks.len()` moves, each chosen by index into the current
    /// legal-move set, stopping early when the game is finished.
    fn play_out(width: usize, picks: &[usize]) -> GameEngine {
        let mut game = GameEngine::new(width).unwrap();
        for &pick in picks {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            game.apply(moves[pick % moves.len()]).unwrap();
        }
        game
    }

    fn arbitrary_game() -> impl Strategy<Value = GameEngine> {
        (
            prop::sample::select(vec![4usize, 6, 8, 10]),
            prop::collection::vec(any::<usize>(), 0..40),
        )
            .prop_map(|(width, picks)| play_out(width, &picks))
    }

    fn brute_force_score(game: &GameEngine) -> (usize, usize) {
        let mut white = 0;
        let mut black = 0;
        for pos in game.board().positions() {
            match game.board().at(pos).unwrap() {
                Cell::White => white += 1,
                Cell::Black => black += 1,
                Cell::Empty => {}
            }
        }
        (white, black)
    }

    proptest! {
        /// Score always agrees with a full scan of the board
        #[test]
        fn prop_score_matches_board(game in arbitrary_game()) {
            prop_assert_eq!(game.score(), brute_force_score(&game));
        }

        /// The legal-move set is exactly the cells `is_legal` accepts
        #[test]
        fn prop_legal_set_matches_is_legal(game in arbitrary_game()) {
            let moves = game.legal_moves();
            for pos in game.board().positions() {
                prop_assert_eq!(moves.contains(&pos), game.is_legal(pos));
            }
            let mut sorted = moves.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted, moves);
        }

        /// A rejected move changes nothing
        #[test]
        fn prop_failed_apply_does_not_mutate(
            game in arbitrary_game(),
            row in 0usize..12,
            col in 0usize..12,
        ) {
            let pos = Position::new(row, col);
            let mut after = game.clone();
            if after.apply(pos).is_err() {
                prop_assert_eq!(after, game);
            }
        }

        /// A successful move places the mover, fills every captured run and
        /// passes the turn
        #[test]
        fn prop_apply_flips_runs(game in arbitrary_game(), pick in any::<usize>()) {
            let moves = game.legal_moves();
            prop_assume!(!moves.is_empty());
            let pos = moves[pick % moves.len()];
            let mover = game.to_move();
            let anchors = game.contacts(pos);
            prop_assert!(!anchors.is_empty());

            let mut after = game.clone();
            after.apply(pos).unwrap();

            prop_assert_eq!(after.to_move(), mover.opponent());
            prop_assert_eq!(after.board().at(pos).unwrap(), mover.to_cell());
            for anchor in anchors {
                let dr = (anchor.row as isize - pos.row as isize).signum();
                let dc = (anchor.col as isize - pos.col as isize).signum();
                let mut cur = pos.offset(dr, dc).unwrap();
                while cur != anchor {
                    prop_assert_eq!(after.board().at(cur).unwrap(), mover.to_cell());
                    cur = cur.offset(dr, dc).unwrap();
                }
            }
        }

        /// Finished means no legal move, and the heuristic refuses to pick one
        #[test]
        fn prop_finished_iff_no_moves(game in arbitrary_game()) {
            prop_assert_eq!(game.is_finished(), game.legal_moves().is_empty());
            match game.best_step() {
                Ok(pos) => {
                    prop_assert!(!game.is_finished());
                    prop_assert!(game.legal_moves().contains(&pos));
                    prop_assert_eq!(game.best_step().unwrap(), pos);
                }
                Err(err) => {
                    prop_assert!(game.is_finished());
                    prop_assert_eq!(err, GameError::NoMovesAvailable);
                }
            }
        }
    }
}
