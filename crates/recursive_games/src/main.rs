//! Recursive Games - Unified CLI

use anyhow::Result;
use clap::Parser;
use recursive_games::cli::{Cli, Command, PlayArgs};
use recursive_games::players::SharedInput;
use recursive_games::{HumanPlayer, Orchestrator, Player, PlayerKind, RandomPlayer, Settings};
use recursive_tictactoe::Game;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play(args) => run_play(&args),
        Command::Simulate {
            depth,
            games,
            seed,
            json,
        } => run_simulate(depth, games, seed, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(args))]
fn run_play(args: &PlayArgs) -> Result<()> {
    let settings = Settings::load(args.config.as_deref(), &args.overrides())?;
    info!(?settings, side = settings.side(), "Starting game");

    let seed = settings.seed().unwrap_or_else(rand::random);
    let input = Rc::new(RefCell::new(std::io::stdin().lock()));
    let player_x = make_player("X", *settings.player_x(), seed, &input, settings.side());
    let player_o = make_player(
        "O",
        *settings.player_o(),
        seed.wrapping_add(1),
        &input,
        settings.side(),
    );

    let stdout = std::io::stdout();
    let game = Game::new(*settings.depth())?;
    let mut orchestrator = Orchestrator::new(game, player_x, player_o, stdout.lock());
    if !settings.has_human() {
        info!("No human player; stopping after one game");
    }
    let outcome = orchestrator.run()?;
    info!(%outcome, "Finished");
    Ok(())
}

fn make_player<R: BufRead + 'static>(
    name: &str,
    kind: PlayerKind,
    seed: u64,
    input: &SharedInput<R>,
    side: u32,
) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(
            name,
            Rc::clone(input),
            std::io::stdout(),
            side,
        )),
        PlayerKind::Random => Box::new(RandomPlayer::new(name, seed)),
    }
}

/// Run random-versus-random games and print the tally
#[instrument]
fn run_simulate(depth: usize, games: usize, seed: Option<u64>, json: bool) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "Simulating");
    let tally = recursive_games::simulate(depth.max(1), games, seed)?;

    let mut stdout = std::io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&tally)?)?;
    } else {
        writeln!(stdout, "{}", tally)?;
    }
    Ok(())
}
