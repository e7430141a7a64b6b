//! TUI Merge: a five-column power-of-two merge-drop game.
//!
//! `core` holds the pure game logic (no I/O), `input` maps key events to
//! abstract commands, `term` renders snapshots to the terminal.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
