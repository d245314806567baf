//! Player trait and implementations.

mod human;
mod random;

pub use human::{HumanPlayer, SharedInput};
pub use random::RandomPlayer;

use crate::input::Action;
use anyhow::Result;
use recursive_tictactoe::Game;

/// Trait for participants that decide what happens on their turn.
pub trait Player {
    /// Gets the next action from this player.
    ///
    /// Called for the player to move, and for a human after the game ends
    /// to ask whether to restart.
    fn next_action(&mut self, game: &Game) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True if a person types this player's moves.
    fn is_human(&self) -> bool {
        false
    }
}
