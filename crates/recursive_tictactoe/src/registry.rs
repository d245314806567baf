//! Registry of boards that are still open.

use crate::path::Path;
use std::collections::BTreeSet;
use tracing::trace;

/// Set of paths of every unresolved board, at all levels.
///
/// Owned by the game tree and handed to board operations explicitly; only
/// board resolution and reset change it. Iteration order is path order, so
/// anything picking among open boards is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenRegistry {
    paths: BTreeSet<Path>,
}

impl OpenRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a board as open.
    pub fn insert(&mut self, path: Path) {
        trace!(%path, "board opened");
        self.paths.insert(path);
    }

    /// Marks a board as resolved. Removing an absent path is a no-op.
    ///
    /// Returns true if the path was present.
    pub fn remove(&mut self, path: &Path) -> bool {
        let removed = self.paths.remove(path);
        if removed {
            trace!(%path, "board closed");
        }
        removed
    }

    /// Checks whether a board is open.
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Number of open boards.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if no board is open.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Forgets every board.
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Open paths in path order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }
}
