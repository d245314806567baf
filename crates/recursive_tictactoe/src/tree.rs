//! The game tree: root board, depth and open-board registry.

use crate::action::{GameError, PathFault};
use crate::node::BoardNode;
use crate::path::Path;
use crate::registry::OpenRegistry;
use crate::types::{Outcome, Player};
use tracing::{debug, info, instrument};

/// Owns the root board of a game of fixed depth.
///
/// All mutation of boards and of the registry goes through here, and every
/// applied move is followed by a full bottom-up update from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    depth: usize,
    root: BoardNode,
    open: OpenRegistry,
}

impl GameTree {
    /// Builds the full tree for a game of `depth` levels.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDepth`] if `depth` is 0.
    #[instrument]
    pub fn new(depth: usize) -> Result<Self, GameError> {
        if depth < 1 {
            return Err(GameError::InvalidDepth(depth));
        }
        let mut open = OpenRegistry::new();
        let root = BoardNode::new(Path::root(), depth - 1, &mut open);
        info!(depth, boards = open.len(), "game tree built");
        Ok(Self { depth, root, open })
    }

    /// Number of nesting levels (1 = ordinary tic-tac-toe).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The root board.
    pub fn root(&self) -> &BoardNode {
        &self.root
    }

    /// Outcome of the whole game.
    pub fn outcome(&self) -> Outcome {
        self.root.outcome()
    }

    /// Board (or leaf board) addressed by `path`, if the path fits the tree.
    pub fn node(&self, path: &Path) -> Option<&BoardNode> {
        path.positions()
            .iter()
            .try_fold(&self.root, |node, &pos| node.child(pos))
    }

    fn node_mut(&mut self, path: &Path) -> Option<&mut BoardNode> {
        let mut node = &mut self.root;
        for &pos in path.positions() {
            node = node.child_mut(pos)?;
        }
        Some(node)
    }

    /// Checks whether the board at `path` is still open.
    pub fn is_open(&self, path: &Path) -> bool {
        self.open.contains(path)
    }

    /// The open-board registry.
    pub fn registry(&self) -> &OpenRegistry {
        &self.open
    }

    /// Paths of every open board, in path order.
    pub fn open_paths(&self) -> impl Iterator<Item = &Path> {
        self.open.iter()
    }

    /// True once the root board is resolved.
    pub fn is_game_over(&self) -> bool {
        self.root.is_resolved()
    }

    /// Leaf board holding the cell at the end of a full-depth path.
    ///
    /// # Errors
    ///
    /// [`GameError::PathNotFound`] if the path does not have exactly `depth`
    /// levels or passes through a resolved board on the way down.
    pub fn leaf_for(&self, path: &Path) -> Result<&BoardNode, GameError> {
        if path.len() != self.depth {
            return Err(PathFault::WrongLength {
                len: path.len(),
                depth: self.depth,
            }
            .into());
        }

        let mut node = &self.root;
        for (level, &pos) in path.positions()[..path.len() - 1].iter().enumerate() {
            let child = node.child(pos).ok_or(PathFault::WrongLength {
                len: path.len(),
                depth: self.depth,
            })?;
            if child.is_resolved() {
                return Err(PathFault::ResolvedBoard { level: level + 1 }.into());
            }
            node = child;
        }
        Ok(node)
    }

    /// Places `player`'s mark at the cell addressed by `path`, then
    /// re-evaluates the whole tree.
    ///
    /// Returns true if any board became resolved. Nothing is changed when an
    /// error is returned.
    ///
    /// # Errors
    ///
    /// [`GameError::PathNotFound`] for malformed paths (see
    /// [`GameTree::leaf_for`]), [`GameError::IllegalMove`] if the leaf board
    /// is resolved or the cell is taken.
    #[instrument(skip(self, path), fields(path = %path))]
    pub fn apply_move_at(&mut self, path: &Path, player: Player) -> Result<bool, GameError> {
        let cell = path.last().ok_or(PathFault::WrongLength {
            len: 0,
            depth: self.depth,
        })?;
        self.leaf_for(path)?
            .accepts(cell)
            .map_err(|reason| GameError::illegal(path, reason))?;

        let depth = self.depth;
        let board = path.parent().unwrap_or_default();
        let leaf = self.node_mut(&board).ok_or(PathFault::WrongLength {
            len: path.len(),
            depth,
        })?;
        leaf.apply_move(cell, player)
            .map_err(|reason| GameError::illegal(path, reason))?;

        let open_before = self.open.len();
        let outcome = self.root.update(&mut self.open);
        let changed = self.open.len() < open_before;
        debug!(%outcome, changed, open = self.open.len(), "tree updated");
        Ok(changed)
    }

    /// Clears every board and reopens them all.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.open.clear();
        self.root.reset(&mut self.open);
        info!(boards = self.open.len(), "game tree reset");
    }
}
