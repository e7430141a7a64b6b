//! Input module - keyboard handling for game controls

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a keyboard event to a game command.
///
/// Digits 1-5 select a column, `q` and Ctrl-C quit. Every other key maps
/// to `Command::Unknown` so the core can surface a diagnostic instead of
/// the event being silently dropped.
pub fn map_key_event(key: KeyEvent) -> Command {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='5') => Command::ColumnSelect(c as u8 - b'0'),
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        KeyCode::Esc => Command::Quit,
        _ => Command::Unknown,
    }
}
