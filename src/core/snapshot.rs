//! Read-only snapshot of a game, consumed by renderers and tests.

use crate::types::{BlockValue, GameStatus, COLS, ROWS};

/// Plain-data view of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Visible grid, `board[col][row]`, row 0 at the bottom; `0` is empty.
    pub board: [[BlockValue; ROWS]; COLS],
    pub fill_heights: [usize; COLS],
    pub total: usize,
    pub moves: u32,
    pub next: BlockValue,
    pub peek: BlockValue,
    pub status: GameStatus,
    /// Current diagnostic line; empty after a successful turn.
    pub message: &'static str,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; ROWS]; COLS],
            fill_heights: [0; COLS],
            total: 0,
            moves: 0,
            next: 0,
            peek: 0,
            status: GameStatus::Playing,
            message: "",
        }
    }
}
