//! Move/value pairs and extremum selection.

use derive_new::new;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Move, Player};

/// A root move together with the game value of the board it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct ScoredMove {
    /// The move.
    pub mv: Move,
    /// Value of the resulting board, from X's perspective.
    pub value: i8,
}

/// True when `player` strictly prefers `candidate` over `incumbent`.
pub fn prefers(player: Player, candidate: i8, incumbent: i8) -> bool {
    match player {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

/// Picks the best entry for `player`: highest value for X, lowest for O.
///
/// Only `value` is compared. On ties the earliest entry wins, so feeding
/// moves in row-major order makes the choice deterministic.
pub fn select(
    player: Player,
    scored: impl IntoIterator<Item = ScoredMove>,
) -> Option<ScoredMove> {
    scored.into_iter().fold(None, |best, candidate| match best {
        Some(incumbent) if !prefers(player, candidate.value, incumbent.value) => Some(incumbent),
        _ => Some(candidate),
    })
}
