//! First-class action and error types for recursive tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent the player's
//! intent and are validated completely before anything is applied.

use crate::path::Path;
use crate::types::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark on the cell at the end of a leaf path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    player: Player,
    /// Full-depth path of the target cell.
    path: Path,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, path: Path) -> Self {
        Self { player, path }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the target path of this move.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.path)
    }
}

/// What an accepted move changed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReport {
    /// The move that was applied.
    applied: Move,
    /// True if at least one board became resolved.
    outcome_changed: bool,
    /// Outcome of the root board after the move.
    root_outcome: Outcome,
    /// Region the next move is forced into.
    active_region: Path,
    /// Player to move next.
    current_player: Player,
    /// True once the root board is resolved.
    game_over: bool,
}

impl MoveReport {
    pub(crate) fn new(
        applied: Move,
        outcome_changed: bool,
        root_outcome: Outcome,
        active_region: Path,
        current_player: Player,
        game_over: bool,
    ) -> Self {
        Self {
            applied,
            outcome_changed,
            root_outcome,
            active_region,
            current_player,
            game_over,
        }
    }
}

/// Why a well-formed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveReason {
    /// The game is already over.
    #[display("game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("it's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The path leaves the region the move is forced into.
    #[display("move is outside the active region")]
    OutsideActiveRegion,

    /// The board holding the target cell is already resolved.
    #[display("board is already resolved")]
    BoardResolved,

    /// The target cell is already occupied.
    #[display("cell is already occupied")]
    CellOccupied,

    /// A cell was written on a board that holds child boards.
    #[display("board holds child boards, not cells")]
    NotALeaf,
}

/// Why a path does not address a playable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PathFault {
    /// An index is outside 0-8.
    #[display("index {index} at level {level} is out of range 0-8")]
    IndexOutOfRange {
        /// Level of the offending index (0 = root).
        level: usize,
        /// The offending index.
        index: usize,
    },

    /// The path does not reach exactly the leaf level.
    #[display("path has {len} levels, expected {depth}")]
    WrongLength {
        /// Length of the supplied path.
        len: usize,
        /// Configured game depth.
        depth: usize,
    },

    /// An intermediate board on the path is already resolved.
    #[display("board at level {level} is already resolved")]
    ResolvedBoard {
        /// Level of the resolved board.
        level: usize,
    },

    /// A screen point lies outside the board square.
    #[display("point ({x}, {y}) is outside the {side}px board")]
    OutsideBoard {
        /// Horizontal pixel coordinate.
        x: u32,
        /// Vertical pixel coordinate.
        y: u32,
        /// Side length of the board square.
        side: u32,
    },
}

impl std::error::Error for PathFault {}

/// Error that can occur when creating a game or validating a move.
///
/// Every variant is recoverable: a rejected move leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Requested depth is below 1.
    #[display("Invalid depth {}: depth must be at least 1", _0)]
    InvalidDepth(usize),

    /// The move is well-formed but not allowed right now.
    #[display("Illegal move at {path}: {reason}")]
    IllegalMove {
        /// Target path of the rejected move.
        path: Path,
        /// Why it was rejected.
        reason: IllegalMoveReason,
    },

    /// The path does not address a cell of this game.
    #[display("Path not found: {}", _0)]
    PathNotFound(PathFault),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl From<PathFault> for GameError {
    fn from(fault: PathFault) -> Self {
        GameError::PathNotFound(fault)
    }
}

impl GameError {
    /// Creates an illegal-move error.
    pub fn illegal(path: &Path, reason: IllegalMoveReason) -> Self {
        GameError::IllegalMove {
            path: path.clone(),
            reason,
        }
    }

    /// Returns the illegal-move reason, if this is one.
    pub fn illegal_reason(&self) -> Option<IllegalMoveReason> {
        match self {
            GameError::IllegalMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
