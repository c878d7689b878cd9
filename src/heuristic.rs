//! Static evaluation of undecided positions

use crate::{
    board::{Board, Cell, Player},
    config::GameConfig,
    window::all_windows,
};

/// Scores awarded for the patterns found in a single window
///
/// The names count tiles missing from a complete run, so on the standard
/// board `one_away` is three tiles and an empty cell.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Weights {
    pub complete: i32,
    pub one_away: i32,
    pub two_away: i32,
    /// Subtracted when the opponent is one tile away from a run
    pub opponent_one_away: i32,
    /// Awarded per tile in the center column
    pub center: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            complete: 100,
            one_away: 10,
            two_away: 5,
            opponent_one_away: 80,
            center: 6,
        }
    }
}

/// Scores a single window of cells from `player`'s point of view
pub fn evaluate_window<I>(window: I, player: Player, config: &GameConfig) -> i32
where
    I: IntoIterator<Item = Cell>,
{
    let own_cell = config.cell_of(player);
    let opponent_cell = config.cell_of(player.opponent());

    let (mut own, mut opponent, mut empty) = (0, 0, 0);
    for cell in window {
        if cell == own_cell {
            own += 1;
        } else if cell == opponent_cell {
            opponent += 1;
        } else if cell.is_empty() {
            empty += 1;
        }
    }

    let weights = &config.weights;
    let connect = config.connect;
    let mut score = 0;

    if own == connect {
        score += weights.complete;
    } else if own + 1 == connect && empty == 1 {
        score += weights.one_away;
    } else if own + 2 == connect && empty == 2 {
        score += weights.two_away;
    }

    // independent of the checks above
    if opponent + 1 == connect && empty == 1 {
        score -= weights.opponent_one_away;
    }

    score
}

/// Scores a whole board from `player`'s point of view
///
/// Tiles in the center column earn a flat bonus, as that column takes part
/// in the most runs, and every window in every direction is scored with
/// [`evaluate_window`].
pub fn score_position(board: &Board, player: Player, config: &GameConfig) -> i32 {
    let own_cell = config.cell_of(player);
    let center = board.center_column();

    let center_count = (0..board.rows())
        .filter(|&row| board.get(row, center) == own_cell)
        .count() as i32;

    let windows_score: i32 = all_windows(board, config.connect)
        .map(|window| evaluate_window(window.cells(), player, config))
        .sum();

    center_count * config.weights.center + windows_score
}
