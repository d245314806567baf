//! Resolution invariants: decided boards are frozen, and freezing reaches
//! the whole subtree.

use super::Invariant;
use crate::node::BoardNode;
use crate::tree::GameTree;

/// Invariant: a board with a decided outcome is resolved, and a resolved
/// board with an undecided outcome sits under a decided ancestor.
pub struct DecidedResolvedInvariant;

fn decided_resolved(node: &BoardNode, ancestor_decided: bool) -> bool {
    let decided = node.outcome().is_decided();
    let consistent = if decided {
        node.is_resolved()
    } else {
        node.is_resolved() == ancestor_decided
    };
    consistent
        && node.children().is_none_or(|children| {
            children
                .iter()
                .all(|child| decided_resolved(child, ancestor_decided || decided))
        })
}

impl Invariant<GameTree> for DecidedResolvedInvariant {
    fn holds(tree: &GameTree) -> bool {
        decided_resolved(tree.root(), false)
    }

    fn description() -> &'static str {
        "Decided boards are resolved; undecided boards are resolved only under a decided ancestor"
    }
}

/// Invariant: every child of a resolved board is resolved.
pub struct DownwardResolutionInvariant;

impl Invariant<GameTree> for DownwardResolutionInvariant {
    fn holds(tree: &GameTree) -> bool {
        let mut holds = true;
        tree.root().walk(&mut |node| {
            if node.is_resolved()
                && let Some(children) = node.children()
            {
                holds &= children.iter().all(BoardNode::is_resolved);
            }
        });
        holds
    }

    fn description() -> &'static str {
        "Resolution is monotone downward"
    }
}
