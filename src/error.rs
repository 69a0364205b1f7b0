use thiserror::Error;

use crate::board::Square;

/// Reasons a selection or move is refused. None of these are fatal: the
/// caller keeps its previous state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square ({row},{col}) is not a playable square")]
    InvalidPosition { row: i32, col: i32 },
    #[error("no piece of the side to move at ({row},{col})")]
    WrongSide { row: i32, col: i32 },
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },
}

#[derive(Debug, Error)]
pub enum VariantError {
    #[error("unknown variant: {0}")]
    Unknown(String),
    #[error("invalid variant '{name}': {reason}")]
    Invalid { name: String, reason: String },
    #[error("could not read variants file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse variants file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth { row: usize, expected: usize, found: usize },
    #[error("unexpected character '{0}' in layout")]
    BadChar(char),
    #[error("piece on light square ({row},{col})")]
    LightSquare { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("malformed square '{0}', expected row,col")]
    Square(String),
    #[error("malformed play '{0}', expected r,c-r,c or r,cxr,c")]
    Play(String),
}
