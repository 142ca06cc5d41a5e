//! Strictly Solver - perfect tic-tac-toe play
//!
//! # Architecture
//!
//! - **strictly_tictactoe**: board, turns, legal moves and outcomes
//! - **strictly_minimax**: minimax search with alpha-beta pruning
//! - **driver**: engine-vs-engine games and reports for the CLI
//! - **config**: TOML configuration
//!
//! # Example
//!
//! ```
//! use strictly_solver::{play, Board, Outcome, Searcher};
//!
//! let record = play(&Searcher::default(), Board::initial()).unwrap();
//! assert_eq!(*record.outcome(), Outcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, SolverConfig};

// Crate-level exports - Driver
pub use driver::{analyze, play, solve, GameRecord, Solution};

// Crate-level exports - Search engine
pub use strictly_minimax::{
    best_move, value, Analysis, ScoredMove, SearchConfig, SearchError, Searcher, Window,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use strictly_tictactoe::{Board, BoardParseError, Move, MoveError, Outcome, Player, Square};
