//! GameView tests - snapshot to framebuffer, no terminal involved

use tui_merge::core::{GameSnapshot, GameState};
use tui_merge::term::{GameView, Viewport};
use tui_merge::types::{Command, GameStatus};

fn screen_text(snap: &GameSnapshot) -> Vec<String> {
    let view = GameView::default();
    let fb = view.render(snap, Viewport::new(80, 24));
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

fn any_row_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

#[test]
fn test_renders_placed_blocks_and_panel() {
    let mut state = GameState::new(1);
    state.process_turn(Command::ColumnSelect(1));
    let rows = screen_text(&state.snapshot());

    assert!(any_row_contains(&rows, "    2"), "block value missing");
    assert!(any_row_contains(&rows, "NEXT"));
    assert!(any_row_contains(&rows, "[[ 4 ]]"), "pending block missing");
    assert!(any_row_contains(&rows, "MOVES"));
}

#[test]
fn test_renders_column_headers_in_order() {
    let state = GameState::new(1);
    let rows = screen_text(&state.snapshot());

    let header = rows
        .iter()
        .find(|row| ('1'..='5').all(|d| row.contains(d)))
        .expect("header row missing");
    let positions: Vec<usize> = ('1'..='5').map(|d| header.find(d).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_renders_diagnostic_message() {
    let mut state = GameState::new(1);
    state.process_turn(Command::Unknown);
    let rows = screen_text(&state.snapshot());
    assert!(any_row_contains(&rows, "unknown command"));
}

#[test]
fn test_game_over_overlay() {
    let mut snap = GameState::new(1).snapshot();
    snap.status = GameStatus::Lost;
    let rows = screen_text(&snap);
    assert!(any_row_contains(&rows, "GAME OVER"));
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let state = GameState::new(1);
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (10, 3), (20, 5)] {
        let fb = view.render(&state.snapshot(), Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}
