//! Pure tic-tac-toe state model.
//!
//! A [`Board`] is a `Copy` snapshot of the 3x3 grid. Whose turn it is, the
//! legal moves, and the outcome are all derived from the squares on demand
//! and never stored, so they cannot drift out of sync with the board.
//!
//! ```
//! use strictly_tictactoe::{Board, Move, Outcome, Player};
//!
//! let board = Board::initial()
//!     .apply(Move::new(1, 1))
//!     .and_then(|b| b.apply(Move::new(0, 0)))
//!     .unwrap();
//! assert_eq!(board.to_move(), Player::X);
//! assert_eq!(board.outcome(), Outcome::InProgress);
//! assert_eq!(board.legal_moves().len(), 7);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod parse;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use parse::BoardParseError;
pub use types::{Board, Outcome, Player, Square};
