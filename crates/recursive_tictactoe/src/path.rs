//! Paths addressing boards and cells from the root.

use crate::action::PathFault;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Sequence of positions descending from the root board.
///
/// The empty path is the root. A path of length `depth` addresses a terminal
/// cell; shorter paths address boards.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct Path(Vec<Position>);

impl Path {
    /// The root path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a path from raw cell indices.
    ///
    /// # Errors
    ///
    /// Returns [`PathFault::IndexOutOfRange`] for the first index above 8.
    pub fn from_indices(indices: &[usize]) -> Result<Self, PathFault> {
        indices
            .iter()
            .enumerate()
            .map(|(level, &index)| {
                Position::from_index(index).ok_or(PathFault::IndexOutOfRange { level, index })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Raw cell indices of this path.
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|pos| pos.to_index()).collect()
    }

    /// Number of levels below the root.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Positions from the root downwards.
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Last position, if any.
    pub fn last(&self) -> Option<Position> {
        self.0.last().copied()
    }

    /// Path of the child at `pos`.
    pub fn child(&self, pos: Position) -> Self {
        let mut positions = self.0.clone();
        positions.push(pos);
        Self(positions)
    }

    /// Path of the enclosing board, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.0.split_last().map(|(_, rest)| Self(rest.to_vec()))
    }

    /// Removes the last position.
    pub fn pop(&mut self) -> Option<Position> {
        self.0.pop()
    }

    /// Removes the leading position.
    pub fn pop_front(&mut self) -> Option<Position> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    /// Returns true if `prefix` is a leading part of this path.
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl From<Vec<Position>> for Path {
    fn from(positions: Vec<Position>) -> Self {
        Self(positions)
    }
}

impl From<Path> for Vec<usize> {
    fn from(path: Path) -> Self {
        path.indices()
    }
}

impl TryFrom<Vec<usize>> for Path {
    type Error = PathFault;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        Path::from_indices(&indices)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, pos) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pos.to_index())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_indices_rejects_out_of_range() {
        assert_eq!(
            Path::from_indices(&[4, 9]),
            Err(PathFault::IndexOutOfRange { level: 1, index: 9 })
        );
        let path = Path::from_indices(&[4, 0]).unwrap();
        assert_eq!(path.indices(), vec![4, 0]);
    }

    #[test]
    fn test_prefix_and_parent() {
        let path = Path::from_indices(&[4, 0, 8]).unwrap();
        assert!(path.starts_with(&Path::root()));
        assert!(path.starts_with(&Path::from_indices(&[4, 0]).unwrap()));
        assert!(!path.starts_with(&Path::from_indices(&[0]).unwrap()));
        assert_eq!(path.parent(), Some(Path::from_indices(&[4, 0]).unwrap()));
        assert_eq!(Path::root().parent(), None);
    }

    #[test]
    fn test_pop_front_shifts_levels() {
        let mut path = Path::from_indices(&[4, 0]).unwrap();
        assert_eq!(path.pop_front(), Some(Position::Center));
        assert_eq!(path, Path::from_indices(&[0]).unwrap());
    }

    #[test]
    fn test_serializes_as_index_list() {
        let path = Path::from_indices(&[2, 7]).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[2,7]");
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
        assert!(serde_json::from_str::<Path>("[2,11]").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Path::from_indices(&[4, 0]).unwrap().to_string(), "[4, 0]");
        assert_eq!(Path::root().to_string(), "[]");
    }
}
