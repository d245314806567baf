//! Scripted sessions through the orchestrator.

use recursive_games::players::SharedInput;
use recursive_games::{
    HumanPlayer, Orchestrator, Overrides, Player, PlayerKind, RandomPlayer, Settings,
};
use recursive_tictactoe::{Cell, Game, Path, Player as Mark};
use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;

fn script(lines: &str) -> SharedInput<Cursor<Vec<u8>>> {
    Rc::new(RefCell::new(Cursor::new(lines.as_bytes().to_vec())))
}

#[test]
fn test_clicks_and_typed_paths_mix() {
    let settings = Settings::load(
        None,
        &Overrides {
            depth: Some(2),
            ..Overrides::default()
        },
    )
    .unwrap();
    assert_eq!(settings.side(), 792);

    let input = script("click 300 300\n0 8\nclick 700 700\nq\n");
    let x = HumanPlayer::new("X", Rc::clone(&input), std::io::sink(), settings.side());
    let o = HumanPlayer::new("O", input, std::io::sink(), settings.side());

    let mut out = Vec::new();
    let mut orchestrator =
        Orchestrator::new(Game::new(2).unwrap(), Box::new(x), Box::new(o), &mut out);
    orchestrator.run().unwrap();

    let snapshot = orchestrator.game().snapshot();
    let paths: Vec<Path> = orchestrator
        .game()
        .history()
        .iter()
        .map(|action| action.path().clone())
        .collect();
    assert_eq!(
        paths,
        vec![
            Path::from_indices(&[4, 0]).unwrap(),
            Path::from_indices(&[0, 8]).unwrap(),
            Path::from_indices(&[8, 4]).unwrap(),
        ]
    );
    let last = Path::from_indices(&[8, 4]).unwrap();
    assert_eq!(snapshot.root().cell(&last), Some(Cell::Occupied(Mark::X)));
    assert_eq!(snapshot.active_region(), &Path::from_indices(&[4]).unwrap());
}

#[test]
fn test_human_against_random_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "depth = 1\nplayer_o = \"random\"\nseed = 5").unwrap();
    let settings = Settings::load(Some(file.path()), &Overrides::default()).unwrap();
    assert_eq!(*settings.player_x(), PlayerKind::Human);
    assert_eq!(*settings.player_o(), PlayerKind::Random);
    assert!(settings.has_human());

    // X types every cell in order; taken cells are rejected and X moves on to the next
    let x = HumanPlayer::new(
        "X",
        script("0\n1\n2\n3\n4\n5\n6\n7\n8\nq\n"),
        std::io::sink(),
        settings.side(),
    );
    let o = RandomPlayer::new("O", settings.seed().unwrap_or_default());
    assert!(x.is_human());
    assert!(!o.is_human());

    let mut out = Vec::new();
    let game = Game::new(*settings.depth()).unwrap();
    let outcome = Orchestrator::new(game, Box::new(x), Box::new(o), &mut out)
        .run()
        .unwrap();

    assert!(outcome.is_decided());
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Game over: "));
}
