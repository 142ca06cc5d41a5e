//! Depth-first minimax with alpha-beta pruning.
//!
//! X maximizes and O minimizes the utility of the terminal board. The tree is
//! small enough to solve outright, so there is no depth limit and no
//! heuristic: every value is exactly -1, 0 or +1.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::scored::{select, ScoredMove};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, Move, Player};
use tracing::{debug, instrument, trace};

/// The `(alpha, beta)` bounds threaded through the search.
///
/// `alpha` is the value X is already guaranteed elsewhere in the tree and
/// `beta` the value O is already guaranteed. A subtree whose value falls
/// outside the window cannot change the decision above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Lower bound.
    pub alpha: i8,
    /// Upper bound.
    pub beta: i8,
}

impl Window {
    /// No bounds at all: `(-inf, +inf)`.
    pub const FULL: Window = Window {
        alpha: i8::MIN,
        beta: i8::MAX,
    };

    /// Creates a window.
    pub fn new(alpha: i8, beta: i8) -> Self {
        Self { alpha, beta }
    }

    /// Narrows the bound owned by `player` with a value it can reach.
    pub fn tighten(self, player: Player, value: i8) -> Self {
        match player {
            Player::X => Self {
                alpha: self.alpha.max(value),
                ..self
            },
            Player::O => Self {
                beta: self.beta.min(value),
                ..self
            },
        }
    }

    /// True once no value can fall strictly inside the window.
    pub fn is_closed(self) -> bool {
        self.alpha >= self.beta
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}

/// Result of [`Searcher::analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Analysis {
    /// Side to move at the root.
    player: Player,
    /// The move [`Searcher::best_move`] returns, with its value.
    best: ScoredMove,
    /// Every legal root move with its exact value, in row-major order.
    scored: Vec<ScoredMove>,
    /// Nodes visited, root included.
    nodes: u64,
}

/// Minimax searcher.
///
/// Holds only configuration, so one searcher can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_new::new)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Optimal move for the side to move.
    ///
    /// Among equally good moves the first in row-major order is returned.
    /// Fails with [`SearchError::NoLegalMoves`] on a terminal board.
    #[instrument(
        skip(self, board),
        fields(to_move = %board.to_move(), moves_played = board.moves_played(), pruning = self.config.pruning())
    )]
    pub fn best_move(&self, board: &Board) -> Result<Move, SearchError> {
        let mut nodes = 0;
        let scored = self.score_root(board, false, &mut nodes)?;
        let best = select(board.to_move(), scored).ok_or(SearchError::NoLegalMoves(board.outcome()))?;
        debug!(mv = %best.mv, value = best.value, nodes, "Selected move");
        Ok(best.mv)
    }

    /// Game value of `board` under optimal play from both sides.
    ///
    /// Terminal boards evaluate to their utility.
    #[instrument(skip(self, board), fields(moves_played = board.moves_played()))]
    pub fn value(&self, board: &Board) -> Result<i8, SearchError> {
        self.search(board, Window::FULL)
    }

    /// Searches `board` within `window`.
    ///
    /// Inside the window the result is exact. When the true value lies at or
    /// beyond a bound, the result is a value at or beyond that same bound.
    pub fn search(&self, board: &Board, window: Window) -> Result<i8, SearchError> {
        let mut nodes = 0;
        let value = self.search_node(board, window, &mut nodes)?;
        trace!(value, nodes, "Search finished");
        Ok(value)
    }

    /// Exact value of every root move, the chosen move, and the work done.
    #[instrument(skip(self, board), fields(to_move = %board.to_move(), moves_played = board.moves_played()))]
    pub fn analyze(&self, board: &Board) -> Result<Analysis, SearchError> {
        let mut nodes = 0;
        let scored = self.score_root(board, true, &mut nodes)?;
        let player = board.to_move();
        let best = select(player, scored.iter().copied())
            .ok_or(SearchError::NoLegalMoves(board.outcome()))?;
        debug!(mv = %best.mv, value = best.value, nodes, "Analysis complete");
        Ok(Analysis {
            player,
            best,
            scored,
            nodes,
        })
    }

    /// Scores each legal root move in row-major order.
    ///
    /// With `exact` every child gets a full window. Otherwise the root window
    /// narrows as it goes, which leaves the best value exact but lets worse
    /// siblings report a bound instead.
    fn score_root(
        &self,
        board: &Board,
        exact: bool,
        nodes: &mut u64,
    ) -> Result<Vec<ScoredMove>, SearchError> {
        if board.is_terminal() {
            return Err(SearchError::NoLegalMoves(board.outcome()));
        }
        *nodes += 1;

        let player = board.to_move();
        let mut window = Window::FULL;
        let mut scored = Vec::new();
        for mv in board.legal_moves() {
            let child = board.apply(mv)?;
            let child_window = if exact { Window::FULL } else { window };
            let value = self.search_node(&child, child_window, nodes)?;
            trace!(%mv, value, "Scored root move");
            scored.push(ScoredMove::new(mv, value));
            if *self.config.pruning() {
                window = window.tighten(player, value);
            }
        }
        Ok(scored)
    }

    fn search_node(
        &self,
        board: &Board,
        mut window: Window,
        nodes: &mut u64,
    ) -> Result<i8, SearchError> {
        *nodes += 1;
        if board.is_terminal() {
            return Ok(board.utility());
        }

        let player = board.to_move();
        let mut best = match player {
            Player::X => i8::MIN,
            Player::O => i8::MAX,
        };
        for mv in board.legal_moves() {
            let child = board.apply(mv)?;
            let value = self.search_node(&child, window, nodes)?;
            best = match player {
                Player::X => best.max(value),
                Player::O => best.min(value),
            };
            if *self.config.pruning() {
                window = window.tighten(player, best);
                if window.is_closed() {
                    break;
                }
            }
        }
        Ok(best)
    }
}

/// [`Searcher::best_move`] with the default configuration.
pub fn best_move(board: &Board) -> Result<Move, SearchError> {
    Searcher::default().best_move(board)
}

/// [`Searcher::value`] with the default configuration.
pub fn value(board: &Board) -> Result<i8, SearchError> {
    Searcher::default().value(board)
}
