//! Log events emitted by the game engine. Runs in its own process so the
//! capturing logger can be installed globally.

use std::sync::Mutex;

use connect_four::game::{GameState, Player, HEIGHT, WIDTH};
use log::{LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct Capture;

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

fn captured() -> Vec<String> {
    RECORDS.lock().unwrap().clone()
}

#[test]
fn every_constructor_logs_new_game() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let _ = GameState::starting_with(Player::Two);
    assert!(captured().contains(&"new 7x6 game, Player 2 to move".to_string()));

    let _ = GameState::initial();
    let _ = GameState::new(WIDTH, HEIGHT).unwrap();
    let new_games = captured()
        .iter()
        .filter(|line| *line == "new 7x6 game, Player 1 to move")
        .count();
    assert_eq!(new_games, 2);

    let mut state = GameState::new(5, 4).unwrap();
    assert!(captured().contains(&"new 5x4 game, Player 1 to move".to_string()));

    state.reset();
    assert!(captured().contains(&"game reset".to_string()));
}
