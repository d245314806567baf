//! Derived outcome invariant: outcomes follow from the slots below.

use super::Invariant;
use crate::rules;
use crate::tree::GameTree;

/// Invariant: every board's outcome is the win rule applied to its slots.
pub struct DerivedOutcomeInvariant;

impl Invariant<GameTree> for DerivedOutcomeInvariant {
    fn holds(tree: &GameTree) -> bool {
        let mut holds = true;
        tree.root().walk(&mut |node| {
            holds &= node.outcome() == rules::evaluate(&node.slot_outcomes());
        });
        holds
    }

    fn description() -> &'static str {
        "Board outcomes are derived from their slots"
    }
}
