//! Human player that types moves on a line-based input.

use super::Player;
use crate::input::{self, Action};
use anyhow::Result;
use recursive_tictactoe::Game;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, warn};

/// Line source shared by every human at the same terminal.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Human player reading commands from `R` and prompting on `W`.
///
/// Lines that do not parse are answered on `W` and read again; the end of
/// the input counts as quitting.
pub struct HumanPlayer<R, W> {
    name: String,
    input: SharedInput<R>,
    prompt: W,
    side: u32,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player. `side` is the board size clicks refer to.
    pub fn new(name: impl Into<String>, input: SharedInput<R>, prompt: W, side: u32) -> Self {
        Self {
            name: name.into(),
            input,
            prompt,
            side,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.borrow_mut().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn next_action(&mut self, game: &Game) -> Result<Action> {
        loop {
            let region = game.active_region();
            if game.is_game_over() {
                write!(self.prompt, "{} > ", self.name)?;
            } else if region.is_empty() {
                write!(self.prompt, "{} (anywhere) > ", self.name)?;
            } else {
                write!(self.prompt, "{} (in {}) > ", self.name, region)?;
            }
            self.prompt.flush()?;

            let Some(line) = self.read_line()? else {
                debug!(player = %self.name, "Input closed");
                return Ok(Action::Quit);
            };
            match input::parse_line(&line, game.depth(), self.side) {
                Ok(action) => return Ok(action),
                Err(err) => {
                    warn!(player = %self.name, error = %err, "Unreadable input");
                    writeln!(self.prompt, "{}", err)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recursive_tictactoe::Path;
    use std::io::Cursor;

    fn shared(text: &str) -> SharedInput<Cursor<Vec<u8>>> {
        Rc::new(RefCell::new(Cursor::new(text.as_bytes().to_vec())))
    }

    #[test]
    fn test_skips_unreadable_lines() {
        let game = Game::new(2).unwrap();
        let mut out = Vec::new();
        let mut player = HumanPlayer::new("X", shared("\nfoo\n4 0\n"), &mut out, 792);
        let action = player.next_action(&game).unwrap();
        assert_eq!(action, Action::Play(Path::from_indices(&[4, 0]).unwrap()));

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("X (anywhere) > "));
        assert!(printed.contains("'foo' is not a cell"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let game = Game::new(1).unwrap();
        let mut player = HumanPlayer::new("O", shared(""), std::io::sink(), 798);
        assert_eq!(player.next_action(&game).unwrap(), Action::Quit);
    }

    #[test]
    fn test_players_share_one_input() {
        let game = Game::new(1).unwrap();
        let input = shared("4\n0\n");
        let mut x = HumanPlayer::new("X", Rc::clone(&input), std::io::sink(), 798);
        let mut o = HumanPlayer::new("O", input, std::io::sink(), 798);
        assert_eq!(x.next_action(&game).unwrap(), Action::Play(Path::from_indices(&[4]).unwrap()));
        assert_eq!(o.next_action(&game).unwrap(), Action::Play(Path::from_indices(&[0]).unwrap()));
    }
}
