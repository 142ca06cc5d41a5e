//! Minimax search with alpha-beta pruning for tic-tac-toe.
//!
//! ```
//! use strictly_minimax::{best_move, value};
//! use strictly_tictactoe::{Board, Move};
//!
//! // X to move can complete the top row.
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let mv = best_move(&board).unwrap();
//! assert_eq!(mv, Move::new(0, 2));
//! assert_eq!(value(&board.apply(mv).unwrap()).unwrap(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod scored;
mod search;

pub use config::SearchConfig;
pub use error::SearchError;
pub use scored::{prefers, select, ScoredMove};
pub use search::{best_move, value, Analysis, Searcher, Window};
