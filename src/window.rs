//! Enumeration of the straight line segments a run can occupy

use std::ops::Range;

use crate::board::{Board, Cell};

/// The four orientations a run can take
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Row and column offsets between consecutive cells
    fn step(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }

    /// Start rows and start columns that keep a window of `length` on the board
    fn starts(&self, rows: usize, columns: usize, length: usize) -> (Range<usize>, Range<usize>) {
        // number of start positions along a dimension of size `extent`
        let span = |extent: usize| (extent + 1).saturating_sub(length);

        match self {
            Direction::Horizontal => (0..rows, 0..span(columns)),
            Direction::Vertical => (0..span(rows), 0..columns),
            Direction::DiagonalDown => (0..span(rows), 0..span(columns)),
            Direction::DiagonalUp => {
                let first = length.saturating_sub(1);
                (first..first + span(rows), 0..span(columns))
            }
        }
    }
}

/// A line of consecutive cells used as a unit of win detection and scoring
#[derive(Copy, Clone, Debug)]
pub struct Window<'a> {
    board: &'a Board,
    row: usize,
    column: usize,
    direction: Direction,
    length: usize,
}

impl<'a> Window<'a> {
    pub fn start(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + 'a {
        let (board, row, column) = (self.board, self.row as isize, self.column as isize);
        let (dy, dx) = self.direction.step();
        (0..self.length as isize)
            .map(move |i| board.get((row + dy * i) as usize, (column + dx * i) as usize))
    }

    /// Returns true if every cell of the window holds `cell`
    pub fn is_filled_by(&self, cell: Cell) -> bool {
        self.cells().all(|c| c == cell)
    }
}

/// Every window of `length` cells in one direction
pub fn windows(
    board: &Board,
    direction: Direction,
    length: usize,
) -> impl Iterator<Item = Window<'_>> {
    let (rows, columns) = direction.starts(board.rows(), board.columns(), length);
    rows.flat_map(move |row| {
        columns.clone().map(move |column| Window {
            board,
            row,
            column,
            direction,
            length,
        })
    })
}

/// Every window of `length` cells in all four directions
pub fn all_windows(board: &Board, length: usize) -> impl Iterator<Item = Window<'_>> {
    Direction::ALL
        .into_iter()
        .flat_map(move |direction| windows(board, direction, length))
}
