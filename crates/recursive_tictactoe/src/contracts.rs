//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! a move is checked in full before anything is written, and the tree
//! invariants are re-checked after it in debug builds.

use crate::action::{GameError, IllegalMoveReason, Move, PathFault};
use crate::game::Game;
use crate::invariants::{InvariantSet, TreeInvariants};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the path reaches exactly the leaf level.
pub struct PathReachesLeaf;

impl PathReachesLeaf {
    /// Checks the path length against the game depth.
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        let depth = game.depth();
        if mov.path().len() == depth {
            Ok(())
        } else {
            Err(PathFault::WrongLength {
                len: mov.path().len(),
                depth,
            }
            .into())
        }
    }
}

/// Precondition: the game is still running.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects every move once the root board is resolved.
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        if game.is_game_over() {
            Err(GameError::illegal(mov.path(), IllegalMoveReason::GameOver))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Compares the mover with the player to move.
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        if mov.player() != game.current_player() {
            Err(GameError::illegal(
                mov.path(),
                IllegalMoveReason::WrongPlayer(mov.player()),
            ))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move lies inside the active region.
pub struct WithinActiveRegion;

impl WithinActiveRegion {
    /// Applies the forced-region rule.
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        game.resolve_target(mov.path())
    }
}

/// Precondition: every board on the way down is open and the cell is empty.
///
/// Resolved boards above the cell are reported the way the tree reports
/// them, as [`PathFault::ResolvedBoard`].
pub struct TargetCellOpen;

impl TargetCellOpen {
    /// Walks the path to its leaf board and asks it whether it takes the mark.
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        let leaf = game.tree().leaf_for(mov.path())?;
        let cell = mov.path().last().ok_or(PathFault::WrongLength {
            len: mov.path().len(),
            depth: game.depth(),
        })?;
        leaf.accepts(cell)
            .map_err(|reason| GameError::illegal(mov.path(), reason))
    }
}

/// Composite precondition: every check above, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        PathReachesLeaf::check(mov, game)?;
        GameNotOver::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        WithinActiveRegion::check(mov, game)?;
        TargetCellOpen::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions: exactly one move was recorded, and the tree invariants
/// hold.
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), GameError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: move history did not grow by one".to_string(),
            ));
        }
        TreeInvariants::check_all(after.tree()).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
