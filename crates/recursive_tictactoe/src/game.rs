//! Turn and region controller.
//!
//! Tracks whose turn it is and which region the next move is forced into,
//! validates move requests against both, and hands legal moves to the tree.

use crate::action::{GameError, IllegalMoveReason, Move, MoveReport};
use crate::contracts::{Contract, MoveContract};
use crate::path::Path;
use crate::position::Position;
use crate::snapshot::GameSnapshot;
use crate::tree::GameTree;
use crate::types::{Outcome, Player};
use tracing::{debug, info, instrument, warn};

/// A running game of recursive tic-tac-toe.
///
/// The active region is the path prefix every next move must start with;
/// the empty region means any open cell may be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    tree: GameTree,
    active_region: Path,
    current_player: Player,
    game_over: bool,
    history: Vec<Move>,
}

impl Game {
    /// Starts a new game with `depth` nesting levels. X moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDepth`] if `depth` is 0.
    #[instrument]
    pub fn new(depth: usize) -> Result<Self, GameError> {
        Ok(Self {
            tree: GameTree::new(depth)?,
            active_region: Path::root(),
            current_player: Player::X,
            game_over: false,
            history: Vec::new(),
        })
    }

    /// Replays moves on a fresh game.
    ///
    /// # Errors
    ///
    /// Fails on the first move the game would reject.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(depth: usize, moves: &[Move]) -> Result<Self, GameError> {
        let mut game = Self::new(depth)?;
        for action in moves {
            game.make_move(action.clone())?;
        }
        Ok(game)
    }

    /// Number of nesting levels.
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// The game tree, read-only.
    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    /// Region the next move is forced into.
    pub fn active_region(&self) -> &Path {
        &self.active_region
    }

    /// Player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// True once the root board is resolved.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Outcome of the root board.
    pub fn outcome(&self) -> Outcome {
        self.tree.outcome()
    }

    /// Accepted moves since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks a requested path against the active region.
    ///
    /// A path is inside the region when the region is empty or is a prefix
    /// of the path.
    ///
    /// # Errors
    ///
    /// [`IllegalMoveReason::OutsideActiveRegion`] otherwise.
    pub fn resolve_target(&self, path: &Path) -> Result<(), GameError> {
        if self.active_region.is_empty() || path.starts_with(&self.active_region) {
            Ok(())
        } else {
            Err(GameError::illegal(path, IllegalMoveReason::OutsideActiveRegion))
        }
    }

    /// Plays the current player's mark at the cell addressed by `indices`.
    ///
    /// # Errors
    ///
    /// [`GameError::PathNotFound`] or [`GameError::IllegalMove`]; the game is
    /// unchanged after an error.
    pub fn submit_move(&mut self, indices: &[usize]) -> Result<MoveReport, GameError> {
        let path = Path::from_indices(indices)?;
        self.make_move(Move::new(self.current_player, path))
    }

    /// Applies a move after checking every precondition.
    ///
    /// # Errors
    ///
    /// Same as [`Game::submit_move`], plus
    /// [`IllegalMoveReason::WrongPlayer`] when it is not the mover's turn.
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn make_move(&mut self, action: Move) -> Result<MoveReport, GameError> {
        if let Err(err) = MoveContract::pre(self, &action) {
            warn!(error = %err, "move rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let outcome_changed = self.tree.apply_move_at(action.path(), action.player())?;
        self.history.push(action.clone());
        self.on_move_applied(action.path());

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(MoveReport::new(
            action,
            outcome_changed,
            self.tree.outcome(),
            self.active_region.clone(),
            self.current_player,
            self.game_over,
        ))
    }

    /// Moves the forced region after a move at `leaf` and passes the turn.
    ///
    /// The played cell's path, shifted up one level, names the board the
    /// opponent is sent to. If that board is resolved the region widens to
    /// the enclosing board until an open one (or the whole game) is found.
    fn on_move_applied(&mut self, leaf: &Path) {
        let mut region = leaf.clone();
        while region.len() > self.depth() - 1 {
            region.pop_front();
        }
        while !region.is_empty() && !self.tree.is_open(&region) {
            region.pop();
        }
        debug!(%region, "active region updated");

        self.active_region = region;
        self.current_player = self.current_player.opponent();

        if self.tree.is_game_over() {
            self.game_over = true;
            info!(outcome = %self.tree.outcome(), moves = self.history.len(), "game over");
        }
    }

    /// Restores the initial state: empty boards, X to move, no region.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.tree.reset_all();
        self.active_region = Path::root();
        self.current_player = Player::X;
        self.game_over = false;
        self.history.clear();
    }

    /// Every leaf path [`Game::submit_move`] would currently accept.
    pub fn legal_moves(&self) -> Vec<Path> {
        let mut moves = Vec::new();
        if self.game_over {
            return moves;
        }
        let Some(region) = self.tree.node(&self.active_region) else {
            return moves;
        };
        region.walk(&mut |node| {
            if node.is_resolved() {
                return;
            }
            if let Some(cells) = node.cells() {
                moves.extend(
                    cells
                        .iter()
                        .zip(Position::ALL)
                        .filter(|(cell, _)| cell.is_empty())
                        .map(|(_, pos)| node.path().child(pos)),
                );
            }
        });
        moves
    }

    /// Read-only view of everything a renderer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}
