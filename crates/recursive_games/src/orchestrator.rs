//! Game orchestration between players.

use crate::input::Action;
use crate::players::Player;
use crate::render::BoardView;
use anyhow::Result;
use derive_getters::Getters;
use recursive_tictactoe::{Game, Outcome, Player as Mark};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Orchestrates gameplay between two players, drawing the board on `out`.
pub struct Orchestrator<W> {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator around a fresh game.
    pub fn new(game: Game, player_x: Box<dyn Player>, player_o: Box<dyn Player>, out: W) -> Self {
        Self {
            game,
            player_x,
            player_o,
            out,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until a player quits.
    ///
    /// When the game ends a human is asked whether to restart; without a
    /// human the loop stops after one game. Returns the outcome of the last
    /// game.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!(depth = self.game.depth(), "Starting game orchestration");

        loop {
            write!(self.out, "{}", BoardView::new(&self.game.snapshot()))?;

            if self.game.is_game_over() {
                let outcome = self.game.outcome();
                let human = if self.player_x.is_human() {
                    Some(&mut self.player_x)
                } else if self.player_o.is_human() {
                    Some(&mut self.player_o)
                } else {
                    None
                };
                let Some(human) = human else {
                    info!(%outcome, "Game finished");
                    return Ok(outcome);
                };

                match human.next_action(&self.game)? {
                    Action::Reset => self.restart(),
                    Action::Quit => return Ok(outcome),
                    Action::Play(_) => {
                        writeln!(self.out, "The game is over: 'r' to restart, 'q' to quit")?;
                    }
                }
                continue;
            }

            let player = match self.game.current_player() {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            debug!(player = %player.name(), "Waiting for move");

            match player.next_action(&self.game)? {
                Action::Play(path) => match self.game.submit_move(&path.indices()) {
                    Ok(report) => {
                        if *report.outcome_changed() {
                            debug!(root = %report.root_outcome(), "Boards resolved");
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "Move rejected");
                        writeln!(self.out, "{}", err)?;
                    }
                },
                Action::Reset => self.restart(),
                Action::Quit => {
                    info!("Player quit");
                    return Ok(self.game.outcome());
                }
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game.reset();
    }
}

/// Plays `game` to the end without drawing anything.
///
/// # Errors
///
/// Fails if a player errors or submits a move the game rejects.
pub fn play_out<'a>(
    game: &mut Game,
    player_x: &'a mut dyn Player,
    player_o: &'a mut dyn Player,
) -> Result<Outcome> {
    while !game.is_game_over() {
        let player = match game.current_player() {
            Mark::X => &mut *player_x,
            Mark::O => &mut *player_o,
        };
        match player.next_action(game)? {
            Action::Play(path) => {
                game.submit_move(&path.indices())?;
            }
            Action::Reset => game.reset(),
            Action::Quit => break,
        }
    }
    Ok(game.outcome())
}

/// Results of a batch of games.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Getters,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{games} games: X won {x_wins}, O won {o_wins}, {ties} tied")]
pub struct Tally {
    /// Games played.
    games: usize,
    /// Games X won.
    x_wins: usize,
    /// Games O won.
    o_wins: usize,
    /// Tied games.
    ties: usize,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None if outcome == Outcome::Tie => self.ties += 1,
            None => {}
        }
    }
}

/// Plays `games` random-versus-random games at `depth`.
///
/// # Errors
///
/// Fails on an invalid depth or a rejected move.
#[instrument]
pub fn simulate(depth: usize, games: usize, seed: u64) -> Result<Tally> {
    use crate::players::RandomPlayer;

    let mut player_x = RandomPlayer::new("X", seed);
    let mut player_o = RandomPlayer::new("O", seed.wrapping_add(1));
    let mut game = Game::new(depth)?;
    let mut tally = Tally::default();

    for round in 0..games {
        game.reset();
        let outcome = play_out(&mut game, &mut player_x, &mut player_o)?;
        debug!(round, %outcome, moves = game.history().len(), "Simulated game");
        tally.record(outcome);
    }

    info!(%tally, "Simulation finished");
    Ok(tally)
}
