//! Strictly Solver - command-line driver
//!
//! Parses a board, runs the search engine, and renders the result.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_solver::{Board, Cli, Command, Searcher, SolverConfig};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = SolverConfig::load(cli.config.as_deref())?;
    if cli.no_pruning {
        config = config.without_pruning();
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "Configuration resolved");

    let searcher = Searcher::new(*config.search());
    match cli.command {
        Command::Solve { board } => run_solve(&searcher, board, cli.json),
        Command::Analyze { board } => run_analyze(&searcher, board, cli.json),
        Command::Play { from } => run_play(&searcher, from.unwrap_or_default(), cli.json),
    }
}

/// Print the optimal move for a position
#[instrument(skip(searcher, board))]
fn run_solve(searcher: &Searcher, board: Board, json: bool) -> Result<()> {
    let solution = strictly_solver::solve(searcher, board)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }

    println!("{}\n", solution.board());
    println!("To move: {}", solution.to_move());
    println!("Best move: {} {}", solution.best().row, solution.best().col);
    println!("Value: {}", describe_value(*solution.value()));
    Ok(())
}

/// Print the value of every legal move
#[instrument(skip(searcher, board))]
fn run_analyze(searcher: &Searcher, board: Board, json: bool) -> Result<()> {
    let analysis = strictly_solver::analyze(searcher, board)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{}\n", board);
    println!("To move: {}", analysis.player());
    for scored in analysis.scored() {
        let marker = if scored == analysis.best() { "*" } else { " " };
        println!(
            "{} {} {}  {:>2}  {}",
            marker,
            scored.mv.row,
            scored.mv.col,
            scored.value,
            describe_value(scored.value)
        );
    }
    println!("Nodes searched: {}", analysis.nodes());
    Ok(())
}

/// Let the engine play both sides to the end
#[instrument(skip(searcher, start))]
fn run_play(searcher: &Searcher, start: Board, json: bool) -> Result<()> {
    let record = strictly_solver::play(searcher, start)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let positions = record.positions()?;
    println!("{}\n", positions[0]);
    for (mv, board) in record.moves().iter().zip(&positions[1..]) {
        // `board` is the position after the move.
        println!("{} plays {} {}", board.to_move().opponent(), mv.row, mv.col);
        println!("{}\n", board);
    }
    println!("Result: {}", record.outcome());
    Ok(())
}

fn describe_value(value: i8) -> &'static str {
    match value {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}
