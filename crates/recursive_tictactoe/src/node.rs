//! Board nodes of the recursive game tree.

use crate::action::IllegalMoveReason;
use crate::path::Path;
use crate::position::Position;
use crate::registry::OpenRegistry;
use crate::rules;
use crate::types::{Cell, Outcome, Player};
use tracing::{debug, instrument};

/// The nine slots of a board: terminal cells on a leaf board, child boards
/// everywhere else. Chosen once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slots {
    /// Leaf board holding symbols directly.
    Cells([Cell; 9]),
    /// Board whose slots are nested boards.
    Children(Box<[BoardNode; 9]>),
}

/// One 3x3 board at some nesting level.
///
/// Each node owns its nine children exclusively. A node is `resolved` once
/// its own outcome is decided or an ancestor's is; from then on it and its
/// whole subtree are frozen until [`BoardNode::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardNode {
    path: Path,
    depth_remaining: usize,
    outcome: Outcome,
    resolved: bool,
    slots: Slots,
}

impl BoardNode {
    /// Builds a node and its whole subtree, registering every board as open.
    ///
    /// `depth_remaining == 0` makes a leaf board.
    pub fn new(path: Path, depth_remaining: usize, registry: &mut OpenRegistry) -> Self {
        let slots = if depth_remaining == 0 {
            Slots::Cells([Cell::Empty; 9])
        } else {
            let children = std::array::from_fn(|index| {
                BoardNode::new(path.child(Position::ALL[index]), depth_remaining - 1, registry)
            });
            Slots::Children(Box::new(children))
        };
        registry.insert(path.clone());

        Self {
            path,
            depth_remaining,
            outcome: Outcome::Undecided,
            resolved: false,
            slots,
        }
    }

    /// Path of this board from the root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Levels below this board; `0` for a leaf board.
    pub fn depth_remaining(&self) -> usize {
        self.depth_remaining
    }

    /// Cached outcome from the last update.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether this board is frozen.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Returns true for a board holding cells.
    pub fn is_leaf(&self) -> bool {
        matches!(self.slots, Slots::Cells(_))
    }

    /// The nine slots.
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Cells of a leaf board.
    pub fn cells(&self) -> Option<&[Cell; 9]> {
        match &self.slots {
            Slots::Cells(cells) => Some(cells),
            Slots::Children(_) => None,
        }
    }

    /// Child boards of an inner board.
    pub fn children(&self) -> Option<&[BoardNode; 9]> {
        match &self.slots {
            Slots::Cells(_) => None,
            Slots::Children(children) => Some(children),
        }
    }

    /// Child board at `pos`.
    pub fn child(&self, pos: Position) -> Option<&BoardNode> {
        self.children().map(|children| &children[pos.to_index()])
    }

    pub(crate) fn child_mut(&mut self, pos: Position) -> Option<&mut BoardNode> {
        match &mut self.slots {
            Slots::Cells(_) => None,
            Slots::Children(children) => Some(&mut children[pos.to_index()]),
        }
    }

    /// Current outcomes of the nine slots, as fed to the win rule.
    pub fn slot_outcomes(&self) -> [Outcome; 9] {
        match &self.slots {
            Slots::Cells(cells) => cells.map(Outcome::from),
            Slots::Children(children) => std::array::from_fn(|i| children[i].outcome),
        }
    }

    /// Recomputes outcomes bottom-up through this subtree.
    ///
    /// A board whose outcome becomes decided resolves itself and its subtree.
    /// Returns the board's outcome so parents can compose it.
    pub fn update(&mut self, registry: &mut OpenRegistry) -> Outcome {
        let slots = match &mut self.slots {
            Slots::Cells(cells) => cells.map(Outcome::from),
            Slots::Children(children) => {
                let mut outcomes = [Outcome::Undecided; 9];
                for (outcome, child) in outcomes.iter_mut().zip(children.iter_mut()) {
                    *outcome = child.update(registry);
                }
                outcomes
            }
        };

        self.outcome = rules::evaluate(&slots);
        if self.outcome.is_decided() && !self.resolved {
            debug!(path = %self.path, outcome = %self.outcome, "board decided");
            self.resolve(registry);
        }
        self.outcome
    }

    /// Freezes this board and its whole subtree, closing them in the registry.
    ///
    /// Resolving an already resolved board only repeats the (harmless)
    /// registry removals.
    pub fn resolve(&mut self, registry: &mut OpenRegistry) {
        self.resolved = true;
        registry.remove(&self.path);
        if let Slots::Children(children) = &mut self.slots {
            for child in children.iter_mut() {
                child.resolve(registry);
            }
        }
    }

    /// Returns this board and its subtree to the freshly built state,
    /// reopening them in the registry.
    pub fn reset(&mut self, registry: &mut OpenRegistry) {
        self.resolved = false;
        self.outcome = Outcome::Undecided;
        registry.insert(self.path.clone());
        match &mut self.slots {
            Slots::Cells(cells) => *cells = [Cell::Empty; 9],
            Slots::Children(children) => {
                for child in children.iter_mut() {
                    child.reset(registry);
                }
            }
        }
    }

    /// Writes `player`'s mark into a cell of this leaf board.
    ///
    /// Does not descend into nested boards and does not update outcomes.
    ///
    /// # Errors
    ///
    /// Fails if the board is resolved, is not a leaf, or the cell is taken.
    #[instrument(level = "debug", skip(self), fields(board = %self.path))]
    pub fn apply_move(&mut self, cell: Position, player: Player) -> Result<(), IllegalMoveReason> {
        if self.resolved {
            return Err(IllegalMoveReason::BoardResolved);
        }
        match &mut self.slots {
            Slots::Children(_) => Err(IllegalMoveReason::NotALeaf),
            Slots::Cells(cells) => {
                let slot = &mut cells[cell.to_index()];
                if !slot.is_empty() {
                    return Err(IllegalMoveReason::CellOccupied);
                }
                *slot = Cell::Occupied(player);
                Ok(())
            }
        }
    }

    /// Checks whether a cell of this leaf board could take a mark.
    pub fn accepts(&self, cell: Position) -> Result<(), IllegalMoveReason> {
        if self.resolved {
            return Err(IllegalMoveReason::BoardResolved);
        }
        match &self.slots {
            Slots::Children(_) => Err(IllegalMoveReason::NotALeaf),
            Slots::Cells(cells) if !cells[cell.to_index()].is_empty() => {
                Err(IllegalMoveReason::CellOccupied)
            }
            Slots::Cells(_) => Ok(()),
        }
    }

    /// Visits this board and every descendant, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a BoardNode)) {
        visit(self);
        if let Slots::Children(children) = &self.slots {
            for child in children.iter() {
                child.walk(visit);
            }
        }
    }
}
