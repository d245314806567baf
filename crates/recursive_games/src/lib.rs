//! Recursive Games library - terminal front end for recursive tic-tac-toe
//!
//! # Architecture
//!
//! - **Config**: layered settings (defaults, TOML file, environment, flags)
//! - **Input**: typed paths, pixel clicks and restart/quit commands
//! - **Players**: humans on a line-based input and seeded random players
//! - **Render**: text view of a game snapshot
//! - **Orchestrator**: the game loop and batch simulation
//!
//! # Example
//!
//! ```
//! use recursive_games::simulate;
//!
//! let tally = simulate(1, 10, 42)?;
//! assert_eq!(*tally.games(), 10);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod orchestrator;
pub mod players;
pub mod render;

pub use config::{ConfigError, Overrides, PlayerKind, Settings};
pub use input::{Action, InputError, parse_line};
pub use orchestrator::{Orchestrator, Tally, play_out, simulate};
pub use players::{HumanPlayer, Player, RandomPlayer};
pub use render::{BoardView, render};
