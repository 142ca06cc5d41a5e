//! Text form of a board.
//!
//! Nine cells in row-major order. `X`/`O` (either case) are marks and
//! `.`, `-`, `_` or `0` are empty. Whitespace, `/` and `|` may separate
//! cells and are ignored, so `"X.O/.X./..O"` and `"x . o  . x .  . . o"`
//! describe the same board.

use crate::{Board, Player, Square};
use std::str::FromStr;
use tracing::instrument;

/// Error returned when text does not describe a reachable board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The text did not hold exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    CellCount(#[error(not(source))] usize),

    /// A character that is neither a mark, an empty cell, nor a separator.
    #[display("Unknown cell symbol {_0:?}")]
    UnknownSymbol(#[error(not(source))] char),

    /// Mark counts that alternating play from an empty board cannot produce.
    #[display("Unreachable position: {x} X marks and {o} O marks")]
    Unreachable {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '_' | '0' => Ok(Square::Empty),
                other => Err(BoardParseError::UnknownSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .as_slice()
            .try_into()
            .map_err(|_| BoardParseError::CellCount(cells.len()))?;

        let count = |p: Player| {
            squares
                .iter()
                .filter(|s| **s == Square::Occupied(p))
                .count()
        };
        let (x, o) = (count(Player::X), count(Player::O));
        if o != x && o + 1 != x {
            return Err(BoardParseError::Unreachable { x, o });
        }

        Ok(Board::from_squares(squares))
    }
}
