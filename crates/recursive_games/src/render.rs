//! Plain-text board rendering from a game snapshot.

use recursive_tictactoe::{Cell, GameSnapshot, Outcome, Path, Position};
use std::fmt;

/// Text view of a snapshot: the cell grid followed by three status lines.
///
/// Occupied cells show their mark, playable empty cells a `.`, and every
/// other empty cell a space. Board boundaries get heavier with each level
/// of nesting.
pub struct BoardView<'a> {
    snapshot: &'a GameSnapshot,
}

impl<'a> BoardView<'a> {
    /// Wraps a snapshot for display.
    pub fn new(snapshot: &'a GameSnapshot) -> Self {
        Self { snapshot }
    }

    fn depth(&self) -> usize {
        *self.snapshot.depth()
    }

    fn cell_char(&self, row: usize, col: usize) -> Result<char, fmt::Error> {
        let path = cell_path(row, col, self.depth()).ok_or(fmt::Error)?;
        Ok(match self.snapshot.root().cell(&path) {
            Some(Cell::Occupied(player)) => player.symbol(),
            Some(Cell::Empty) if self.snapshot.is_playable(&path) => '.',
            _ => ' ',
        })
    }

    fn row_line(&self, row: usize) -> Result<String, fmt::Error> {
        let mut line = String::new();
        for col in 0..cells_per_side(self.depth()) {
            if col > 0 {
                match boundary_weight(col, self.depth()) {
                    0 => line.push(' '),
                    weight => {
                        line.push(' ');
                        line.push_str(&"|".repeat(weight));
                        line.push(' ');
                    }
                }
            }
            line.push(self.cell_char(row, col)?);
        }
        Ok(line)
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.depth();
        for row in 0..cells_per_side(depth) {
            let line = self.row_line(row)?;
            let weight = boundary_weight(row, depth);
            if weight > 0 {
                let fill = match weight {
                    1 => '-',
                    2 => '=',
                    _ => '#',
                };
                let separator: String = line
                    .chars()
                    .map(|ch| if ch == '|' { '+' } else { fill })
                    .collect();
                writeln!(f, "{}", separator)?;
            }
            writeln!(f, "{}", line.trim_end())?;
        }

        let snapshot = self.snapshot;
        if *snapshot.game_over() {
            writeln!(
                f,
                "Game over: {} | 'r' to restart, 'q' to quit",
                snapshot.outcome()
            )?;
        } else {
            writeln!(f, "Depth {} | {} to move", depth, snapshot.current_player())?;
        }

        if snapshot.active_region().is_empty() {
            writeln!(f, "Active region: anywhere")?;
        } else {
            writeln!(f, "Active region: {}", snapshot.active_region())?;
        }

        let decided = snapshot.decided_boards();
        if decided.is_empty() {
            writeln!(f, "Decided boards: none")
        } else {
            let list = decided
                .iter()
                .map(|(path, outcome)| describe_board(path, *outcome))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "Decided boards: {}", list)
        }
    }
}

/// Renders a snapshot to a string.
pub fn render(snapshot: &GameSnapshot) -> String {
    BoardView::new(snapshot).to_string()
}

fn describe_board(path: &Path, outcome: Outcome) -> String {
    if path.is_empty() {
        format!("root {}", outcome)
    } else {
        format!("{} {}", path, outcome)
    }
}

fn cells_per_side(depth: usize) -> usize {
    3usize.pow(depth as u32)
}

/// Nesting level of the boundary before grid line `index`: 0 inside a
/// leaf board, 1 between leaf boards, and so on.
fn boundary_weight(index: usize, depth: usize) -> usize {
    if index == 0 {
        return 0;
    }
    (1..depth)
        .take_while(|&level| index % cells_per_side(level) == 0)
        .last()
        .unwrap_or(0)
}

/// Path of the cell at a grid row and column, most significant level first.
fn cell_path(row: usize, col: usize, depth: usize) -> Option<Path> {
    (0..depth)
        .rev()
        .map(|level| {
            let scale = cells_per_side(level);
            Position::from_row_col(row / scale % 3, col / scale % 3)
        })
        .collect::<Option<Vec<_>>>()
        .map(Path::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recursive_tictactoe::Game;

    #[test]
    fn test_cell_path_digits() {
        let path = cell_path(3, 5, 2).unwrap();
        assert_eq!(path.indices(), vec![4, 2]);
        let path = cell_path(8, 0, 2).unwrap();
        assert_eq!(path.indices(), vec![6, 6]);
        let path = cell_path(2, 1, 1).unwrap();
        assert_eq!(path.indices(), vec![7]);
    }

    #[test]
    fn test_boundary_weight() {
        assert_eq!(boundary_weight(1, 1), 0);
        assert_eq!(boundary_weight(3, 2), 1);
        assert_eq!(boundary_weight(4, 2), 0);
        assert_eq!(boundary_weight(9, 3), 2);
        assert_eq!(boundary_weight(18, 3), 2);
        assert_eq!(boundary_weight(12, 3), 1);
    }

    #[test]
    fn test_depth_one() {
        let mut game = Game::new(1).unwrap();
        game.submit_move(&[4]).unwrap();
        assert_eq!(
            render(&game.snapshot()),
            ". . .\n. X .\n. . .\nDepth 1 | O to move\nActive region: anywhere\nDecided boards: none\n"
        );
    }

    #[test]
    fn test_depth_two_marks_forced_board() {
        let mut game = Game::new(2).unwrap();
        game.submit_move(&[4, 0]).unwrap();
        let text = render(&game.snapshot());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9 + 2 + 3);
        assert_eq!(lines[0], ". . . |       |");
        assert_eq!(lines[3], "------+-------+------");
        assert_eq!(lines[4], "      | X     |");
        assert_eq!(text.matches('.').count(), 9);
        assert_eq!(lines[12], "Active region: [0]");
    }

    #[test]
    fn test_game_over_status() {
        let mut game = Game::new(1).unwrap();
        for cell in [0, 4, 1, 3, 2] {
            game.submit_move(&[cell]).unwrap();
        }
        let text = render(&game.snapshot());
        assert!(text.starts_with("X X X\nO O\n"));
        assert!(text.contains("Game over: X wins | 'r' to restart, 'q' to quit"));
        assert!(text.ends_with("Decided boards: root X wins\n"));
    }
}
