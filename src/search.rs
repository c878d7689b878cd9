//! A depth-limited minimax agent for Connect 4

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    board::{Board, Player},
    config::GameConfig,
    error::Error,
    heuristic::score_position,
    rules::{has_won, outcome, Outcome},
};

/// The score of a position won by the AI
pub const WIN_SCORE: i32 = 1_000_000;
/// The score of a position won by the human
pub const LOSS_SCORE: i32 = -WIN_SCORE;

// kept symmetric so that negating a bound never overflows
const INFINITY: i32 = i32::MAX;

/// The column chosen at a search node and the score backing it
///
/// `column` is `None` at leaves, where no move is made.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// An agent that picks moves for the AI player
///
/// # Notes
/// The search explores every open column in increasing order down to a fixed
/// depth. Decided positions score [`WIN_SCORE`] or [`LOSS_SCORE`] however deep
/// they are found, and undecided leaves are scored by the heuristic from the
/// AI's point of view. Among equally scored columns the first one searched is
/// kept, so the choice is deterministic for a given board and depth.
///
/// Each branch searches its own copy of the board, and the engine holds no
/// state between searches apart from the diagnostic node counter.
#[derive(Clone, Debug)]
pub struct Engine {
    config: GameConfig,
    pruning: bool,

    /// The number of nodes searched by this `Engine` so far (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    /// Creates a new `Engine` playing with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            pruning: true,
            node_count: 0,
        }
    }

    /// Disables alpha-beta cutoffs, searching the full tree
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Performs game tree search
    ///
    /// Returns the best column for the side to move (the AI when
    /// `maximizing`) along with its score.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let ai_won = has_won(board, self.config.ai_cell, self.config.connect);
        let human_won = !ai_won && has_won(board, self.config.human_cell, self.config.connect);

        if depth == 0 || ai_won || human_won || board.is_full() {
            let score = if ai_won {
                WIN_SCORE
            } else if human_won {
                LOSS_SCORE
            } else {
                score_position(board, Player::Ai, &self.config)
            };
            return SearchResult {
                column: None,
                score,
            };
        }

        let (player, mut value) = if maximizing {
            (Player::Ai, -INFINITY)
        } else {
            (Player::Human, INFINITY)
        };
        let cell = self.config.cell_of(player);
        let mut best_column = None;

        for column in board.open_columns() {
            let mut next = board.clone();
            next.drop_piece(column, cell);

            let score = self
                .minimax(&next, depth - 1, alpha, beta, !maximizing)
                .score;

            if maximizing {
                if score > value {
                    value = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best_column = Some(column);
                }
                beta = beta.min(value);
            }

            // the opponent will never allow this branch, skip the remaining siblings
            if self.pruning && alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: best_column,
            score: value,
        }
    }

    /// Checks that a search can start from `board`
    fn check_searchable(&self, board: &Board, depth: usize) -> Result<(), Error> {
        self.config.validate()?;
        if depth == 0 {
            return Err(Error::ZeroDepth);
        }
        match outcome(board, &self.config) {
            Some(Outcome::Draw) => Err(Error::NoLegalMoves),
            Some(_) => Err(Error::GameOver),
            None => Ok(()),
        }
    }

    /// Searches from the root, returning the chosen column and its score
    pub fn analyse(&mut self, board: &Board, depth: usize) -> Result<SearchResult, Error> {
        self.check_searchable(board, depth)?;

        let start_count = self.node_count;
        let result = self.minimax(board, depth, -INFINITY, INFINITY, true);
        debug!(
            depth,
            column = ?result.column,
            score = result.score,
            nodes = self.node_count - start_count,
            "search complete"
        );
        Ok(result)
    }

    /// Calculates the best move for the AI at the configured depth
    pub fn best_move(&mut self, board: &Board) -> Result<usize, Error> {
        let depth = self.config.depth;
        self.best_move_at_depth(board, depth)
    }

    /// Calculates the best move for the AI searching `depth` plies
    pub fn best_move_at_depth(&mut self, board: &Board, depth: usize) -> Result<usize, Error> {
        self.analyse(board, depth)?
            .column
            .ok_or(Error::NoLegalMoves)
    }

    /// Calculates the exact score of every open column, searching columns in parallel
    ///
    /// Scores are returned in increasing column order.
    pub fn column_scores(
        &mut self,
        board: &Board,
        depth: usize,
    ) -> Result<Vec<(usize, i32)>, Error> {
        self.check_searchable(board, depth)?;

        let cell = self.config.ai_cell;
        let columns: Vec<usize> = board.open_columns().collect();
        let engine = self.clone();

        let results: Vec<(usize, i32, usize)> = columns
            .into_par_iter()
            .map(|column| {
                let mut next = board.clone();
                next.drop_piece(column, cell);

                // every root branch gets its own engine and a full window
                let mut branch = Engine {
                    node_count: 0,
                    ..engine.clone()
                };
                let score = branch
                    .minimax(&next, depth - 1, -INFINITY, INFINITY, false)
                    .score;
                trace!(column, score, nodes = branch.node_count, "root candidate");
                (column, score, branch.node_count)
            })
            .collect();

        self.node_count += 1 + results.iter().map(|r| r.2).sum::<usize>();
        Ok(results
            .into_iter()
            .map(|(column, score, _)| (column, score))
            .collect())
    }

    /// Calculates the best move like [`analyse`](Self::analyse), splitting the
    /// root columns across threads
    pub fn best_move_parallel(
        &mut self,
        board: &Board,
        depth: usize,
    ) -> Result<SearchResult, Error> {
        let scores = self.column_scores(board, depth)?;

        let mut best = SearchResult {
            column: None,
            score: -INFINITY,
        };
        for (column, score) in scores {
            if score > best.score {
                best = SearchResult {
                    column: Some(column),
                    score,
                };
            }
        }
        debug!(depth, column = ?best.column, score = best.score, "parallel search complete");
        match best.column {
            Some(_) => Ok(best),
            None => Err(Error::NoLegalMoves),
        }
    }
}

/// Calculates the best move for the AI on a standard board searching `depth` plies
pub fn get_best_move(board: &Board, depth: usize) -> Result<usize, Error> {
    Engine::new(GameConfig::default()).best_move_at_depth(board, depth)
}
