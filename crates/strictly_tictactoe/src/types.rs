//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (moves first, maximizes utility).
    X,
    /// Player O (moves second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Utility of a win for this player, from X's perspective.
    pub fn win_value(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Result of inspecting a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Player),
    /// Board is full with no line.
    #[display("draw")]
    Draw,
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Every transition returns a fresh board,
/// so a board handed to a caller never changes underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// The starting position of every game.
    pub fn initial() -> Self {
        Self::new()
    }

    /// Builds a board directly from its squares.
    ///
    /// No reachability check is made; see [`Board::from_moves`] or the
    /// `FromStr` impl for validated construction.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Replays `moves` from the initial board.
    #[instrument]
    pub fn from_moves(moves: &[Move]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::initial(), |board, mv| board.apply(*mv))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Gets the square at `mv`, or `None` when the coordinates are off the board.
    pub fn get(&self, mv: Move) -> Option<Square> {
        mv.index().map(|i| self.squares[i])
    }

    /// Checks if the square at `mv` is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Number of marks placed so far.
    pub fn moves_played(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Player whose turn it is, derived from the move count.
    ///
    /// Well defined on terminal boards too; it just names who would move next.
    pub fn to_move(&self) -> Player {
        if self.moves_played() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Empty cells in row-major order.
    ///
    /// Search breaks ties by this order, so it must not change.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| self.is_empty(*mv))
            .collect()
    }

    /// Returns the board with the side to move's mark placed at `mv`.
    ///
    /// `self` is untouched whether or not the move is legal.
    pub fn apply(&self, mv: Move) -> Result<Self, MoveError> {
        let index = mv.index().ok_or(MoveError::OutOfRange {
            row: mv.row,
            col: mv.col,
        })?;
        if self.squares[index] != Square::Empty {
            return Err(MoveError::Occupied(mv));
        }

        let player = self.to_move();
        let mut next = *self;
        next.squares[index] = Square::Occupied(player);
        trace!(%mv, %player, "Placed mark");
        Ok(next)
    }

    /// The owner of a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True once someone has won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// +1 if X has a line, -1 if O has one, 0 otherwise.
    ///
    /// Only meaningful on terminal boards.
    pub fn utility(&self) -> i8 {
        self.winner().map_or(0, Player::win_value)
    }

    /// Classifies the board.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Won(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                write!(f, "{symbol}")?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::initial();
        assert_eq!(board.moves_played(), 0);
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_turn_alternates() {
        let board = Board::initial().apply(Move::new(1, 1)).unwrap();
        assert_eq!(board.to_move(), Player::O);
        let board = board.apply(Move::new(0, 0)).unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.get(Move::new(0, 0)), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::from_moves(&[Move::new(0, 1), Move::new(2, 0)]).unwrap();
        assert_eq!(
            board.legal_moves(),
            vec![
                Move::new(0, 0),
                Move::new(0, 2),
                Move::new(1, 0),
                Move::new(1, 1),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let board = Board::initial().apply(Move::new(1, 1)).unwrap();
        let before = board;
        assert_eq!(
            board.apply(Move::new(1, 1)),
            Err(MoveError::Occupied(Move::new(1, 1)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let board = Board::initial();
        assert_eq!(
            board.apply(Move::new(3, 0)),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.apply(Move::new(0, 7)),
            Err(MoveError::OutOfRange { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_apply_leaves_input_unchanged() {
        let board = Board::from_moves(&[Move::new(0, 0)]).unwrap();
        let snapshot = *board.squares();
        let next = board.apply(Move::new(2, 2)).unwrap();
        assert_eq!(board.squares(), &snapshot);
        assert_ne!(next, board);
    }

    #[test]
    fn test_utility_and_outcome() {
        // X takes the left column.
        let board = Board::from_moves(&[
            Move::new(0, 0),
            Move::new(0, 1),
            Move::new(1, 0),
            Move::new(1, 1),
            Move::new(2, 0),
        ])
        .unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.utility(), 1);
        assert_eq!(board.outcome(), Outcome::Won(Player::X));
    }

    #[test]
    fn test_display() {
        let board = Board::from_moves(&[Move::new(0, 0), Move::new(1, 1)]).unwrap();
        assert_eq!(board.to_string(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }

    #[test]
    fn test_serde_round_trip() {
        let board = Board::from_moves(&[Move::new(2, 1)]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
