//! Search error types.

use strictly_tictactoe::{MoveError, Outcome};

/// Error returned by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SearchError {
    /// A move was requested for a board where the game has already ended.
    ///
    /// Callers are expected to check `Board::is_terminal` first.
    #[display("No legal moves: game is over ({_0})")]
    NoLegalMoves(#[error(not(source))] Outcome),

    /// Applying a move produced by `legal_moves` failed.
    ///
    /// Never expected; it means the state model broke its own contract.
    #[display("Search hit an illegal transition: {_0}")]
    #[from]
    Corrupted(MoveError),
}
