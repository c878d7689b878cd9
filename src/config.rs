//! Construction-time configuration for boards and the engine

use crate::{
    board::{Cell, Player},
    error::ConfigError,
    heuristic::Weights,
    CONNECT, DEFAULT_DEPTH, HEIGHT, WIDTH,
};

/// Board dimensions, win length, search depth and player assignments
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    /// The length of a winning run
    pub connect: usize,
    /// The number of plies searched by [`Engine::best_move`](crate::Engine::best_move)
    pub depth: usize,
    pub ai_cell: Cell,
    pub human_cell: Cell,
    /// Who plays first when a board is built from a move list
    pub first_player: Player,
    pub weights: Weights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: HEIGHT,
            columns: WIDTH,
            connect: CONNECT,
            depth: DEFAULT_DEPTH,
            ai_cell: Cell::PlayerTwo,
            human_cell: Cell::PlayerOne,
            first_player: Player::Human,
            weights: Weights::default(),
        }
    }
}

impl GameConfig {
    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_connect(mut self, connect: usize) -> Self {
        self.connect = connect;
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_cells(mut self, ai_cell: Cell, human_cell: Cell) -> Self {
        self.ai_cell = ai_cell;
        self.human_cell = human_cell;
        self
    }

    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn cell_of(&self, player: Player) -> Cell {
        match player {
            Player::Ai => self.ai_cell,
            Player::Human => self.human_cell,
        }
    }

    pub fn player_of(&self, cell: Cell) -> Option<Player> {
        if cell.is_empty() {
            None
        } else if cell == self.ai_cell {
            Some(Player::Ai)
        } else if cell == self.human_cell {
            Some(Player::Human)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.connect < 3 {
            return Err(ConfigError::ConnectTooShort(self.connect));
        }
        if self.connect > self.rows && self.connect > self.columns {
            return Err(ConfigError::ConnectTooLong {
                connect: self.connect,
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.ai_cell.is_empty() || self.human_cell.is_empty() || self.ai_cell == self.human_cell
        {
            return Err(ConfigError::InvalidCells);
        }
        Ok(())
    }
}
