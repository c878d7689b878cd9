//! Errors reported at the boundary of the engine
//!
//! Column indices carried by these errors are zero-based.

/// Errors produced when building boards, playing moves or starting a search
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("column {column} out of range, the board has {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("could not parse '{0}' as a valid move")]
    InvalidMove(char),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("the game is already over")]
    GameOver,

    #[error("no legal moves remain")]
    NoLegalMoves,

    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors produced by [`GameConfig::validate`](crate::GameConfig::validate)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be non-zero (got {rows}x{columns})")]
    EmptyBoard { rows: usize, columns: usize },

    #[error("connect length {connect} does not fit a {rows}x{columns} board")]
    ConnectTooLong {
        connect: usize,
        rows: usize,
        columns: usize,
    },

    #[error("connect length must be at least 3 (got {0})")]
    ConnectTooShort(usize),

    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("players must be assigned distinct, non-empty cells")]
    InvalidCells,
}
