//! Win and terminal state detection

use crate::{
    board::{Board, Cell, Player},
    config::GameConfig,
    window::{windows, Direction},
};

/// How a finished game ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Returns true if `cell` owns a run of `connect` consecutive tiles in any direction
pub fn has_won(board: &Board, cell: Cell, connect: usize) -> bool {
    if cell.is_empty() {
        return false;
    }
    Direction::ALL
        .into_iter()
        .any(|direction| windows(board, direction, connect).any(|w| w.is_filled_by(cell)))
}

/// Returns true if either player has won or no column is open
pub fn is_terminal(board: &Board, config: &GameConfig) -> bool {
    has_won(board, config.ai_cell, config.connect)
        || has_won(board, config.human_cell, config.connect)
        || board.is_full()
}

/// The result of the game, or `None` while it is still being played
///
/// If both players somehow own a run, the AI's run is reported.
pub fn outcome(board: &Board, config: &GameConfig) -> Option<Outcome> {
    if has_won(board, config.ai_cell, config.connect) {
        Some(Outcome::Winner(Player::Ai))
    } else if has_won(board, config.human_cell, config.connect) {
        Some(Outcome::Winner(Player::Human))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}
