//! Parsing of typed commands.
//!
//! A line is one of:
//! - a cell path, as indices or position labels separated by spaces or
//!   commas (`4 0`, `4,0`, `center top-left`)
//! - `click <x> <y>`, a pixel on the virtual board
//! - `r` / `reset`
//! - `q` / `quit`

use recursive_tictactoe::geometry::{self, Point};
use recursive_tictactoe::{Path, PathFault, Position};
use tracing::{debug, instrument};

/// What a participant wants to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at the cell at the end of this path.
    Play(Path),
    /// Start a new game.
    Reset,
    /// Stop playing.
    Quit,
}

/// Why a typed line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("enter a move, 'r' to restart or 'q' to quit")]
    Empty,

    /// A path token is neither an index nor a position label.
    #[display("'{}' is not a cell (use 0-8 or a label like center)", _0)]
    UnknownCell(String),

    /// `click` needs two pixel coordinates.
    #[display("usage: click <x> <y>")]
    ClickUsage,

    /// The click missed the board.
    #[display("{}", _0)]
    Missed(PathFault),
}

impl std::error::Error for InputError {}

/// Parses one line typed by a player.
///
/// `depth` and `side` describe the virtual board that `click` coordinates
/// refer to. Path length is checked by the game, not here.
#[instrument]
pub fn parse_line(line: &str, depth: usize, side: u32) -> Result<Action, InputError> {
    let line = line.trim();
    let lowered = line.to_lowercase();
    match lowered.as_str() {
        "" => return Err(InputError::Empty),
        "r" | "reset" => return Ok(Action::Reset),
        "q" | "quit" | "exit" => return Ok(Action::Quit),
        _ => {}
    }

    if let Some(rest) = lowered.strip_prefix("click") {
        return parse_click(rest, depth, side);
    }

    let positions = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token)
                .ok_or_else(|| InputError::UnknownCell(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let path = Path::from(positions);
    debug!(%path, "Parsed path");
    Ok(Action::Play(path))
}

fn parse_click(rest: &str, depth: usize, side: u32) -> Result<Action, InputError> {
    let coords = rest
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<u32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| InputError::ClickUsage)?;

    let [x, y] = coords[..] else {
        return Err(InputError::ClickUsage);
    };
    let hit = geometry::locate(Point::new(x, y), side, depth).map_err(InputError::Missed)?;
    debug!(path = %hit.path, cell = %hit.cell, "Click resolved");
    Ok(Action::Play(hit.path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> Action {
        Action::Play(Path::from_indices(indices).unwrap())
    }

    #[test]
    fn test_index_paths() {
        assert_eq!(parse_line("4 0", 2, 792), Ok(play(&[4, 0])));
        assert_eq!(parse_line(" 4,0\n", 2, 792), Ok(play(&[4, 0])));
        assert_eq!(parse_line("4, 0", 2, 792), Ok(play(&[4, 0])));
        assert_eq!(parse_line("8", 1, 798), Ok(play(&[8])));
    }

    #[test]
    fn test_label_paths() {
        assert_eq!(parse_line("center top-left", 2, 792), Ok(play(&[4, 0])));
        assert_eq!(parse_line("Bottom-Right", 1, 798), Ok(play(&[8])));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_line("r", 2, 792), Ok(Action::Reset));
        assert_eq!(parse_line("RESET", 2, 792), Ok(Action::Reset));
        assert_eq!(parse_line("q", 2, 792), Ok(Action::Quit));
        assert_eq!(parse_line("quit", 2, 792), Ok(Action::Quit));
    }

    #[test]
    fn test_click_resolves_to_path() {
        assert_eq!(parse_line("click 301 305", 2, 900), Ok(play(&[4, 0])));
        assert_eq!(parse_line("click 10,10", 1, 900), Ok(play(&[0])));
    }

    #[test]
    fn test_bad_lines() {
        assert_eq!(parse_line("   ", 2, 792), Err(InputError::Empty));
        assert_eq!(
            parse_line("4 9", 2, 792),
            Err(InputError::UnknownCell("9".to_string()))
        );
        assert_eq!(parse_line("click 5", 2, 792), Err(InputError::ClickUsage));
        assert_eq!(parse_line("click a b", 2, 792), Err(InputError::ClickUsage));
        assert!(matches!(
            parse_line("click 900 1", 2, 792),
            Err(InputError::Missed(PathFault::OutsideBoard { .. }))
        ));
    }
}
