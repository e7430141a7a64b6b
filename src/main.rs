//! Terminal merge-drop runner.
//!
//! Renders the board, blocks on the next key event, maps it to a command
//! and hands it to the core. One command is processed to completion
//! (cascade included) per iteration.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_merge::core::{GameSnapshot, GameState};
use tui_merge::input::map_key_event;
use tui_merge::term::{GameView, TerminalRenderer, Viewport};
use tui_merge::types::GameStatus;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::process::id();
    let mut state = GameState::new(seed);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();

    loop {
        state.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        match state.status() {
            GameStatus::Quit => return Ok(()),
            GameStatus::Lost => {
                // Leave the final frame up until the player presses a key.
                wait_for_key()?;
                return Ok(());
            }
            GameStatus::Playing => {}
        }

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                state.process_turn(map_key_event(key));
            }
        }
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
