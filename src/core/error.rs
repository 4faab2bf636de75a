//! Error types.
//!
//! - `GraphError`: a position could not be built (bad matrices, codec failure).
//!   Fatal to that construction attempt; no partial graph escapes.
//! - `MoveError`: a move was rejected. The position is left unchanged.
//! - `TreeError`: a tree snapshot was requested for a non-tree position.
//! - `ValueError`: exact arithmetic could not produce a value.

use thiserror::Error;

use super::color::{Color, GameStatus};

/// Validation failure while constructing a position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Unequal sizes: {color} matrix has {rows} rows, expected {size}")]
    RowCountMismatch { color: Color, rows: usize, size: usize },
    #[error("Unequal sizes: {color} matrix row {row} has length {len}, expected {size}")]
    RowLength { color: Color, row: usize, len: usize, size: usize },
    #[error("Not symmetric: {color} matrix differs at ({i}, {j})")]
    Asymmetric { color: Color, i: usize, j: usize },
    #[error("Edge numbers must be nonnegative: {color} matrix has {value} at ({i}, {j})")]
    InvalidEntry { color: Color, i: usize, j: usize, value: i64 },
    #[error("Position has {size} vertices, limit is {limit}")]
    SizeLimit { size: usize, limit: usize },
    #[error("Position codec failed: {0}")]
    Codec(String),
}

/// A rejected move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Not a valid move.")]
    NoSuchEdge { color: Color, i: usize, j: usize },
    #[error("Not a valid move: vertex {vertex} is outside 0..{size}")]
    VertexOutOfRange { vertex: usize, size: usize },
    #[error("Not a valid move: {0}")]
    GameOver(GameStatus),
}

/// A tree snapshot was requested for a position that is not a rooted tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Position is not a rooted tree")]
    NotATree,

    #[error("Tree has more than {limit} nodes")]
    TooManyNodes { limit: usize },
}

/// Exact arithmetic failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Denominator is zero")]
    ZeroDenominator,
    #[error("Rational arithmetic overflowed")]
    Overflow,
    #[error("Tree was built at version {built}, position is at version {current}")]
    StaleTree { built: u64, current: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_text() {
        let err = MoveError::NoSuchEdge { color: Color::Red, i: 0, j: 1 };
        assert_eq!(err.to_string(), "Not a valid move.");
    }

    #[test]
    fn test_validation_text() {
        let err = GraphError::Asymmetric { color: Color::Blue, i: 0, j: 2 };
        assert_eq!(err.to_string(), "Not symmetric: Blue matrix differs at (0, 2)");
    }

    #[test]
    fn test_stale_text() {
        let err = ValueError::StaleTree { built: 1, current: 3 };
        assert!(err.to_string().contains("version 1"));
    }
}
