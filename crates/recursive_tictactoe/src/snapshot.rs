//! Serializable read-only view of a game, for renderers.

use crate::game::Game;
use crate::node::BoardNode;
use crate::path::Path;
use crate::types::{Cell, Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// State of one board and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Path from the root.
    path: Path,
    /// Cached outcome.
    outcome: Outcome,
    /// Frozen against further moves.
    resolved: bool,
    /// Cells, for leaf boards.
    cells: Option<[Cell; 9]>,
    /// Child boards, for inner boards (empty on leaves).
    children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    fn capture(node: &BoardNode) -> Self {
        Self {
            path: node.path().clone(),
            outcome: node.outcome(),
            resolved: node.is_resolved(),
            cells: node.cells().copied(),
            children: node
                .children()
                .map(|children| children.iter().map(Self::capture).collect())
                .unwrap_or_default(),
        }
    }

    /// Board snapshot at `path` below this one.
    pub fn find(&self, path: &Path) -> Option<&NodeSnapshot> {
        path.positions()
            .iter()
            .try_fold(self, |node, pos| node.children.get(pos.to_index()))
    }

    /// Cell at the end of a leaf path.
    pub fn cell(&self, path: &Path) -> Option<Cell> {
        let cell = path.last()?;
        let board = self.find(&path.parent()?)?;
        board.cells.map(|cells| cells[cell.to_index()])
    }

    /// Visits this board and every descendant, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a NodeSnapshot)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Everything needed to redraw a game between moves.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Nesting levels.
    depth: usize,
    /// Player to move.
    current_player: Player,
    /// Region to highlight.
    active_region: Path,
    /// True once the root board is resolved.
    game_over: bool,
    /// The whole board tree.
    root: NodeSnapshot,
}

impl GameSnapshot {
    pub(crate) fn capture(game: &Game) -> Self {
        Self {
            depth: game.depth(),
            current_player: game.current_player(),
            active_region: game.active_region().clone(),
            game_over: game.is_game_over(),
            root: NodeSnapshot::capture(game.tree().root()),
        }
    }

    /// Outcome of the root board.
    pub fn outcome(&self) -> Outcome {
        self.root.outcome
    }

    /// Checks whether a move at `path` would currently be accepted.
    pub fn is_playable(&self, path: &Path) -> bool {
        if self.game_over || path.len() != self.depth {
            return false;
        }
        if !(self.active_region.is_empty() || path.starts_with(&self.active_region)) {
            return false;
        }
        let Some(board) = path.parent().and_then(|board| self.root.find(&board)) else {
            return false;
        };
        !board.resolved && self.root.cell(path) == Some(Cell::Empty)
    }

    /// Decided boards and their outcomes, in path order.
    pub fn decided_boards(&self) -> Vec<(Path, Outcome)> {
        let mut decided = Vec::new();
        self.root.walk(&mut |node| {
            if node.outcome.is_decided() {
                decided.push((node.path.clone(), node.outcome));
            }
        });
        decided.sort_by(|a, b| a.0.cmp(&b.0));
        decided
    }

    /// Serializes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
