//! Random playthroughs keep the tree invariants and freeze decided boards.

use proptest::prelude::*;
use proptest::sample::Index;
use recursive_tictactoe::invariants::{InvariantSet, TreeInvariants};
use recursive_tictactoe::{Game, Path, Position};

/// A full-depth path into the board at `board`.
fn cell_under(board: &Path, depth: usize) -> Path {
    let mut path = board.clone();
    while path.len() < depth {
        path = path.child(Position::Center);
    }
    path
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_playthroughs_keep_invariants(
        depth in 1usize..=3,
        picks in proptest::collection::vec(any::<Index>(), 1..300),
    ) {
        let mut game = Game::new(depth).unwrap();
        let mut frozen: Vec<Path> = Vec::new();

        for pick in picks {
            let legal = game.legal_moves();
            if legal.is_empty() {
                prop_assert!(game.is_game_over());
                break;
            }
            prop_assert!(!game.is_game_over());

            // Nothing inside a frozen board is ever accepted
            for board in frozen.iter().take(8) {
                let before = game.snapshot();
                let target = cell_under(board, depth);
                prop_assert!(game.submit_move(&target.indices()).is_err());
                prop_assert_eq!(game.snapshot(), before);
            }

            let target = pick.get(&legal).clone();
            let report = game.submit_move(&target.indices());
            prop_assert!(report.is_ok(), "legal move {} rejected: {:?}", target, report);
            prop_assert!(TreeInvariants::check_all(game.tree()).is_ok());

            for board in &frozen {
                prop_assert!(game.tree().node(board).unwrap().is_resolved());
            }
            frozen.clear();
            game.tree().root().walk(&mut |node| {
                if node.is_resolved() {
                    frozen.push(node.path().clone());
                }
            });
        }
    }

    #[test]
    fn active_region_is_open_or_root(
        depth in 2usize..=3,
        picks in proptest::collection::vec(any::<Index>(), 1..120),
    ) {
        let mut game = Game::new(depth).unwrap();
        for pick in picks {
            let legal = game.legal_moves();
            if legal.is_empty() {
                break;
            }
            let target = pick.get(&legal).clone();
            game.submit_move(&target.indices()).unwrap();

            let region = game.active_region();
            prop_assert!(region.len() < depth);
            if !region.is_empty() {
                prop_assert!(game.tree().is_open(region));
            }

            // The played cell, shifted up a level, cut back to its deepest open board
            let mut shifted = target.clone();
            shifted.pop_front();
            let expected = (0..=shifted.len())
                .rev()
                .map(|len| Path::from(shifted.positions()[..len].to_vec()))
                .find(|board| board.is_empty() || game.tree().is_open(board))
                .unwrap_or_default();
            prop_assert_eq!(region, &expected);
        }
    }
}
