//! Moves and move errors.
//!
//! A move names a cell by zero-based `(row, col)`. Coordinates are not
//! checked on construction; [`Board::apply`](crate::Board::apply) rejects
//! anything off the board.

use serde::{Deserialize, Serialize};

/// A cell coordinate the side to move wants to mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Every on-board move, in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates the move for row-major cell index 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }

    /// Row-major cell index, or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then(|| self.row * 3 + self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column lies outside 0-2.
    #[display("Move ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target square already holds a mark.
    #[display("Square {_0} is already occupied")]
    Occupied(#[error(not(source))] Move),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), Some(i));
            assert_eq!(Move::from_index(i), Some(*mv));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_off_board_has_no_index() {
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(0, 3).index(), None);
    }

    #[test]
    fn test_error_messages() {
        assert!(MoveError::Occupied(Move::new(1, 1))
            .to_string()
            .contains("occupied"));
        assert!(MoveError::OutOfRange { row: 4, col: 0 }
            .to_string()
            .contains("off the board"));
    }
}
