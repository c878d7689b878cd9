use std::fmt;

use crate::{config::GameConfig, error::Error, rules};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The character used for this cell in board pictures
    pub fn symbol(&self) -> char {
        match self {
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
            Cell::Empty => '.',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Cell::PlayerOne),
            'O' | 'o' => Some(Cell::PlayerTwo),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// The two sides of the game, the engine always plays as `Ai`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    Ai,
    Human,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::Ai => Player::Human,
            Player::Human => Player::Ai,
        }
    }
}

/// A fixed-size grid of cells
///
/// Rows are indexed from the top, so the bottom row is `rows() - 1`.
/// Pieces in a column always form a contiguous block resting on the bottom row.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
}

impl Board {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Creates an empty board with the dimensions of `config`
    pub fn with_config(config: &GameConfig) -> Self {
        Self::new(config.rows, config.columns)
    }

    /// Creates a board from a string of 1-indexed column digits
    ///
    /// Players alternate starting with `config.first_player`.
    pub fn from_moves<S: AsRef<str>>(config: &GameConfig, moves: S) -> Result<Self, Error> {
        let mut board = Self::with_config(config);
        let mut player = config.first_player;

        for column_char in moves.as_ref().chars() {
            let column = match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 => column - 1,
                _ => return Err(Error::InvalidMove(column_char)),
            };
            // abort if the position is won at any point
            if rules::outcome(&board, config).is_some() {
                return Err(Error::GameOver);
            }
            board.play_checked(column, config.cell_of(player))?;
            player = player.opponent();
        }
        Ok(board)
    }

    /// Creates a board from a top-to-bottom picture of its rows
    ///
    /// `.` is an empty cell, `X` belongs to player one and `O` to player two.
    pub fn from_rows<S: AsRef<str>>(config: &GameConfig, rows: &[S]) -> Result<Self, Error> {
        if rows.len() != config.rows {
            return Err(Error::InvalidBoard(format!(
                "expected {} rows, found {}",
                config.rows,
                rows.len()
            )));
        }
        let mut board = Self::with_config(config);

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref().trim();
            if line.chars().count() != config.columns {
                return Err(Error::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    config.columns
                )));
            }
            for (column, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                    Error::InvalidBoard(format!("unknown cell symbol '{}'", symbol))
                })?;
                board.place(row, column, cell);
            }
        }

        // check gravity: nothing may sit above an empty cell
        for column in 0..board.columns {
            for row in 1..board.rows {
                if board.get(row, column).is_empty() && !board.get(row - 1, column).is_empty() {
                    return Err(Error::InvalidBoard(format!(
                        "floating piece in column {} above row {}",
                        column, row
                    )));
                }
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The middle column, rounded down for even widths
    pub fn center_column(&self) -> usize {
        self.columns / 2
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[column + self.columns * row]
    }

    /// Returns true if a piece can still be dropped into `column`
    pub fn is_open(&self, column: usize) -> bool {
        column < self.columns && self.get(0, column).is_empty()
    }

    /// The lowest empty row in `column`, scanning from the bottom up
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, column).is_empty())
    }

    /// Sets a single cell without any validation
    pub fn place(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[column + self.columns * row] = cell;
    }

    /// Drops a piece into `column`, returning the row it landed on
    pub fn drop_piece(&mut self, column: usize, cell: Cell) -> Option<usize> {
        let row = self.next_open_row(column)?;
        self.place(row, column, cell);
        Some(row)
    }

    /// Drops a piece after checking the column is in range and not full
    pub fn play_checked(&mut self, column: usize, cell: Cell) -> Result<usize, Error> {
        if column >= self.columns {
            return Err(Error::ColumnOutOfRange {
                column,
                columns: self.columns,
            });
        }
        self.drop_piece(column, cell)
            .ok_or(Error::ColumnFull(column))
    }

    /// Iterates over the open columns in increasing order
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter(move |&column| self.is_open(column))
    }

    pub fn is_full(&self) -> bool {
        self.open_columns().next().is_none()
    }

    pub fn num_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..self.columns {
                write!(f, "{}", self.get(row, column).symbol())?;
            }
        }
        Ok(())
    }
}
