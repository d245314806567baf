//! Recursive tic-tac-toe game logic.
//!
//! A board whose every cell holds a nested board, down to a fixed depth.
//! Depth 1 is ordinary tic-tac-toe.
//!
//! # Architecture
//!
//! - **Rules**: the win rule for one 3x3 board, applied at every level
//! - **Board nodes**: the recursive tree, with bottom-up resolution
//! - **Game tree**: owns the root and the registry of open boards
//! - **Game**: turn order and the forced-region rule
//! - **Snapshot**: read-only state for renderers
//! - **Geometry**: hit-testing shared with renderers
//!
//! # Example
//!
//! ```
//! use recursive_tictactoe::{Game, Outcome, Player};
//!
//! let mut game = Game::new(1)?;
//! for cell in [0, 4, 1, 3, 2] {
//!     game.submit_move(&[cell])?;
//! }
//! assert!(game.is_game_over());
//! assert_eq!(game.outcome(), Outcome::Won(Player::X));
//! # Ok::<(), recursive_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod geometry;
pub mod invariants;
mod node;
mod path;
mod position;
mod registry;
pub mod rules;
mod snapshot;
mod tree;
mod types;

pub use action::{GameError, IllegalMoveReason, Move, MoveReport, PathFault};
pub use game::Game;
pub use geometry::{Hit, Point, Rect};
pub use node::{BoardNode, Slots};
pub use path::Path;
pub use position::Position;
pub use registry::OpenRegistry;
pub use snapshot::{GameSnapshot, NodeSnapshot};
pub use tree::GameTree;
pub use types::{Cell, Outcome, Player};
