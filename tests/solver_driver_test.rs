//! Tests for the command-line driver and configuration.

use clap::Parser;
use std::io::Write;
use strictly_solver::{
    Board, Cli, Command, Move, Outcome, SearchConfig, Searcher, SolverConfig, analyze, play,
    solve,
};

#[test]
fn test_engine_self_play_draws() {
    let record = play(&Searcher::default(), Board::initial()).unwrap();
    assert_eq!(*record.outcome(), Outcome::Draw);
    assert_eq!(record.moves().len(), 9);
    assert!(record.finish().is_full());
    let positions = record.positions().unwrap();
    assert_eq!(positions.len(), 10);
    assert_eq!(positions[9], *record.finish());
}

#[test]
fn test_self_play_without_pruning_is_identical() {
    let pruned = play(&Searcher::default(), Board::initial()).unwrap();
    let full = play(&Searcher::new(SearchConfig::exhaustive()), Board::initial()).unwrap();
    assert_eq!(pruned, full);
}

#[test]
fn test_play_from_winning_position() {
    let start: Board = "XX./OO./...".parse().unwrap();
    let record = play(&Searcher::default(), start).unwrap();
    assert_eq!(record.moves(), &[Move::new(0, 2)]);
    assert_eq!(*record.outcome(), Outcome::Won(strictly_solver::Player::X));
}

#[test]
fn test_play_from_terminal_position_is_empty() {
    let start: Board = "XXX/OO./...".parse().unwrap();
    let record = play(&Searcher::default(), start).unwrap();
    assert!(record.moves().is_empty());
    assert_eq!(*record.finish(), start);
}

#[test]
fn test_solve_reports_value_after_move() {
    let board: Board = "OO./.X./..X".parse().unwrap();
    let solution = solve(&Searcher::default(), board).unwrap();
    assert_eq!(*solution.best(), Move::new(0, 2));
    assert_eq!(*solution.value(), 1);
}

#[test]
fn test_solve_terminal_board_fails() {
    let board: Board = "XOX/OXX/OXO".parse().unwrap();
    assert!(solve(&Searcher::default(), board).is_err());
}

#[test]
fn test_analyze_serializes() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let analysis = analyze(&Searcher::default(), board).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["best"]["value"], 1);
    assert_eq!(json["scored"].as_array().unwrap().len(), 5);
}

#[test]
fn test_cli_parses_solve() {
    let cli = Cli::try_parse_from(["strictly_solver", "solve", "X.O/.X./..O"]).unwrap();
    match cli.command {
        Command::Solve { board } => assert_eq!(board.moves_played(), 4),
        other => panic!("unexpected command {other:?}"),
    }
    assert!(!cli.no_pruning);
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["strictly_solver", "play", "--no-pruning", "--json"]).unwrap();
    assert!(cli.no_pruning);
    assert!(cli.json);
    assert!(matches!(cli.command, Command::Play { from: None }));
}

#[test]
fn test_cli_rejects_bad_board() {
    assert!(Cli::try_parse_from(["strictly_solver", "analyze", "XX"]).is_err());
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug\"\n\n[search]\npruning = false").unwrap();
    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_filter(), "debug");
    assert!(!*config.search().pruning());
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SolverConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_config_load_defaults_without_path() {
    assert_eq!(SolverConfig::load(None).unwrap(), SolverConfig::default());
}
