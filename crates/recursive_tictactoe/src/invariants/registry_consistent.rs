//! Registry invariant: the open-board registry mirrors the tree.

use super::Invariant;
use crate::path::Path;
use crate::tree::GameTree;

/// Invariant: the registry holds exactly the paths of unresolved boards.
pub struct RegistryConsistentInvariant;

impl Invariant<GameTree> for RegistryConsistentInvariant {
    fn holds(tree: &GameTree) -> bool {
        let mut unresolved: Vec<&Path> = Vec::new();
        tree.root().walk(&mut |node| {
            if !node.is_resolved() {
                unresolved.push(node.path());
            }
        });
        unresolved.sort();
        unresolved.len() == tree.registry().len()
            && unresolved.into_iter().eq(tree.registry().iter())
    }

    fn description() -> &'static str {
        "Open registry matches the unresolved boards"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_holds_through_reset() {
        let mut tree = GameTree::new(2).unwrap();
        for cell in [6, 7, 8] {
            let path = Path::root().child(Position::Center).child(Position::ALL[cell]);
            tree.apply_move_at(&path, Player::O).unwrap();
        }
        assert!(RegistryConsistentInvariant::holds(&tree));
        tree.reset_all();
        assert!(RegistryConsistentInvariant::holds(&tree));
    }
}
