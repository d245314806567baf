//! Player that picks uniformly among the legal moves.

use super::Player;
use crate::input::Action;
use anyhow::Result;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use recursive_tictactoe::Game;
use tracing::debug;

/// Random player with a seeded, reproducible move sequence.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    /// Creates a random player; the same seed replays the same choices.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn next_action(&mut self, game: &Game) -> Result<Action> {
        let legal = game.legal_moves();
        let Some(path) = legal.choose(&mut self.rng) else {
            debug!(player = %self.name, "No legal moves left");
            return Ok(Action::Quit);
        };
        debug!(player = %self.name, %path, choices = legal.len(), "Random move");
        Ok(Action::Play(path.clone()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_a_legal_move() {
        let mut game = Game::new(2).unwrap();
        game.submit_move(&[4, 0]).unwrap();
        let mut player = RandomPlayer::new("O", 3);
        for _ in 0..20 {
            let Action::Play(path) = player.next_action(&game).unwrap() else {
                panic!("expected a move");
            };
            assert!(game.legal_moves().contains(&path));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let game = Game::new(2).unwrap();
        let mut a = RandomPlayer::new("a", 42);
        let mut b = RandomPlayer::new("b", 42);
        for _ in 0..10 {
            assert_eq!(a.next_action(&game).unwrap(), b.next_action(&game).unwrap());
        }
    }

    #[test]
    fn test_quits_when_game_is_over() {
        let mut game = Game::new(1).unwrap();
        for cell in [0, 4, 1, 3, 2] {
            game.submit_move(&[cell]).unwrap();
        }
        let mut player = RandomPlayer::new("O", 0);
        assert_eq!(player.next_action(&game).unwrap(), Action::Quit);
    }
}
