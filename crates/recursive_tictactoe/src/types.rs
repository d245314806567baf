//! Core domain types for recursive tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
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

    /// Numeric encoding used by the win rule: X is `1`, O is `-1`.
    pub fn code(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A terminal cell on a leaf board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric encoding: `0` empty, otherwise the occupant's code.
    pub fn code(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.code(),
        }
    }
}

/// Resolved state of a board (or of a single cell, seen as a one-cell board).
///
/// Numeric codes: `0` undecided, `1` X wins, `-1` O wins, `2` tie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Still open.
    #[default]
    Undecided,
    /// Won by a player.
    Won(Player),
    /// Filled without a winner.
    Tie,
}

impl Outcome {
    /// Returns true once the outcome can no longer change.
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Undecided | Outcome::Tie => None,
        }
    }

    /// Numeric encoding of the outcome.
    pub fn code(self) -> i8 {
        match self {
            Outcome::Undecided => 0,
            Outcome::Won(player) => player.code(),
            Outcome::Tie => 2,
        }
    }
}

impl From<Cell> for Outcome {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Outcome::Undecided,
            Cell::Occupied(player) => Outcome::Won(player),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "undecided"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_win_rule_encoding() {
        assert_eq!(Outcome::Undecided.code(), 0);
        assert_eq!(Outcome::Won(Player::X).code(), 1);
        assert_eq!(Outcome::Won(Player::O).code(), -1);
        assert_eq!(Outcome::Tie.code(), 2);
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::Occupied(Player::O).code(), -1);
    }

    #[test]
    fn test_cell_to_outcome() {
        assert_eq!(Outcome::from(Cell::Empty), Outcome::Undecided);
        assert_eq!(Outcome::from(Cell::Occupied(Player::X)), Outcome::Won(Player::X));
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }
}
