//! Engine-driven game loop and report types for the command line.

use derive_getters::Getters;
use serde::Serialize;
use strictly_minimax::{Analysis, SearchError, Searcher};
use strictly_tictactoe::{Board, Move, Outcome, Player};
use tracing::{info, instrument};

/// What `solve` reports for a position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Solution {
    /// Position that was solved.
    board: Board,
    /// Side to move.
    to_move: Player,
    /// Optimal move.
    best: Move,
    /// Game value after `best`, from X's perspective.
    value: i8,
}

/// Solves `board` for the side to move.
#[instrument(skip(searcher, board))]
pub fn solve(searcher: &Searcher, board: Board) -> Result<Solution, SearchError> {
    let best = searcher.best_move(&board)?;
    let value = searcher.value(&board.apply(best)?)?;
    Ok(Solution {
        board,
        to_move: board.to_move(),
        best,
        value,
    })
}

/// Scores every root move of `board`.
#[instrument(skip(searcher, board))]
pub fn analyze(searcher: &Searcher, board: Board) -> Result<Analysis, SearchError> {
    searcher.analyze(&board)
}

/// A finished engine-vs-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameRecord {
    /// Position the game started from.
    start: Board,
    /// Moves played, in order.
    moves: Vec<Move>,
    /// Final position.
    finish: Board,
    /// How it ended.
    outcome: Outcome,
}

impl GameRecord {
    /// Every position from start to finish, inclusive.
    pub fn positions(&self) -> Result<Vec<Board>, SearchError> {
        let mut boards = vec![self.start];
        for mv in &self.moves {
            let last = boards[boards.len() - 1];
            boards.push(last.apply(*mv)?);
        }
        Ok(boards)
    }
}

/// Lets the engine play both sides from `start` until the game ends.
#[instrument(skip(searcher, start), fields(moves_played = start.moves_played()))]
pub fn play(searcher: &Searcher, start: Board) -> Result<GameRecord, SearchError> {
    let mut board = start;
    let mut moves = Vec::new();
    while !board.is_terminal() {
        let mv = searcher.best_move(&board)?;
        info!(player = %board.to_move(), %mv, "Engine move");
        board = board.apply(mv)?;
        moves.push(mv);
    }
    info!(outcome = %board.outcome(), plies = moves.len(), "Game over");
    Ok(GameRecord {
        start,
        moves,
        finish: board,
        outcome: board.outcome(),
    })
}
