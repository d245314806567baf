//! Command-line interface for recursive_games.

use crate::config::{Overrides, PlayerKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Recursive Games - tic-tac-toe boards nested inside tic-tac-toe boards
#[derive(Parser, Debug)]
#[command(name = "recursive_games")]
#[command(about = "Recursive tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play(PlayArgs),

    /// Play random games against each other and print a tally
    Simulate {
        /// Nesting levels (1 is ordinary tic-tac-toe)
        #[arg(short, long, default_value = "2", env = "RTTT_DEPTH")]
        depth: usize,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Seed for the random players
        #[arg(long, env = "RTTT_SEED")]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for an interactive game.
///
/// Every value left unset falls back to the config file, then to the
/// built-in defaults.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Nesting levels (1 is ordinary tic-tac-toe)
    #[arg(short, long, env = "RTTT_DEPTH")]
    pub depth: Option<usize>,

    /// Target board size in pixels, used to resolve clicks
    #[arg(short, long, env = "RTTT_SIZE")]
    pub size: Option<u32>,

    /// Let random players make every move
    #[arg(long)]
    pub autoplay: bool,

    /// Who plays X
    #[arg(long, value_enum)]
    pub player_x: Option<PlayerKind>,

    /// Who plays O
    #[arg(long, value_enum)]
    pub player_o: Option<PlayerKind>,

    /// Seed for the random players
    #[arg(long, env = "RTTT_SEED")]
    pub seed: Option<u64>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    /// Values given on the command line or through the environment.
    pub fn overrides(&self) -> Overrides {
        let autoplay = self.autoplay.then_some(PlayerKind::Random);
        Overrides {
            depth: self.depth,
            size: self.size,
            player_x: autoplay.or(self.player_x),
            player_o: autoplay.or(self.player_o),
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "recursive_games",
            "play",
            "--depth",
            "3",
            "--player-o",
            "random",
            "--seed",
            "7",
        ])
        .unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.depth, Some(3));
        assert_eq!(overrides.player_x, None);
        assert_eq!(overrides.player_o, Some(PlayerKind::Random));
        assert_eq!(overrides.seed, Some(7));
    }

    #[test]
    fn test_autoplay_makes_both_sides_random() {
        let args = PlayArgs {
            autoplay: true,
            player_x: Some(PlayerKind::Human),
            ..PlayArgs::default()
        };
        let overrides = args.overrides();
        assert_eq!(overrides.player_x, Some(PlayerKind::Random));
        assert_eq!(overrides.player_o, Some(PlayerKind::Random));
    }

    #[test]
    fn test_simulate_flags() {
        let cli =
            Cli::try_parse_from(["recursive_games", "simulate", "--games", "5", "--depth", "1"])
                .unwrap();
        match cli.command {
            Command::Simulate {
                depth, games, json, ..
            } => {
                assert_eq!(depth, 1);
                assert_eq!(games, 5);
                assert!(!json);
            }
            Command::Play(_) => panic!("expected simulate"),
        }
    }
}
