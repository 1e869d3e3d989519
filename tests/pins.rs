// tests/pins.rs

use cookplan::pins::{PIN_CAPACITY, PinBoard};
use cookplan_test_utils::builders::TaskBuilder;

fn ids(board: &PinBoard) -> Vec<&str> {
    board.pinned().iter().map(|t| t.id.as_str()).collect()
}

fn task(id: &str) -> cookplan::plan::Task {
    TaskBuilder::new(id, "L", 0.0, 1.0).build()
}

#[test]
fn newest_pin_goes_first() {
    let mut board = PinBoard::new();
    board.pin(task("a"));
    board.pin(task("b"));

    assert_eq!(ids(&board), vec!["b", "a"]);
}

#[test]
fn oldest_pin_drops_past_capacity() {
    let mut board = PinBoard::new();
    for id in ["a", "b", "c", "d"] {
        board.pin(task(id));
    }

    assert_eq!(board.pinned().len(), PIN_CAPACITY);
    assert_eq!(ids(&board), vec!["d", "c", "b"]);
}

#[test]
fn repinning_moves_to_front_without_duplicating() {
    let mut board = PinBoard::new();
    for id in ["a", "b", "c"] {
        board.pin(task(id));
    }
    board.pin(task("a"));

    assert_eq!(ids(&board), vec!["a", "c", "b"]);
}

#[test]
fn unpin_and_clear() {
    let mut board = PinBoard::new();
    board.pin(task("a"));
    board.pin(task("b"));

    assert!(board.unpin("a"));
    assert!(!board.unpin("a"));
    assert_eq!(ids(&board), vec!["b"]);

    board.clear();
    assert!(board.pinned().is_empty());
}
