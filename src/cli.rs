//! Command-line interface for strictly_solver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Board;

/// Strictly Solver - perfect tic-tac-toe play by minimax search
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Exhaustive minimax solver for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Search every branch instead of pruning with alpha-beta
    #[arg(long, global = true)]
    pub no_pruning: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are nine cells in row-major order, e.g. `X.O/.X./..O`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to move
    Solve {
        /// Position to solve
        board: Board,
    },

    /// Print the value of every legal move
    Analyze {
        /// Position to analyze
        board: Board,
    },

    /// Let the engine play both sides to the end
    Play {
        /// Starting position (empty board if omitted)
        #[arg(long)]
        from: Option<Board>,
    },
}
