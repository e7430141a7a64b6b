//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const COLS: usize = 5;
pub const ROWS: usize = 5;

/// A block value. `0` is an empty cell; any positive value is an exact
/// power of two.
pub type BlockValue = u32;

/// Initial generator state: the first two blocks and the exponent ceiling.
pub const START_NEXT: BlockValue = 2;
pub const START_PEEK: BlockValue = 4;
pub const START_MAX_BASE: u32 = 2;

/// Abstract input command, produced at the input boundary.
///
/// Anything the keyboard can emit maps to exactly one of these; unmapped
/// keys become `Unknown` rather than being dropped, so the game can surface
/// a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop the pending block into a column, 1-based (`1..=COLS`).
    ColumnSelect(u8),
    Quit,
    Unknown,
}

/// Terminal status of a game.
///
/// There is no win state: play continues until the board fills with no
/// legal move, or the player quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Lost,
    Quit,
}

impl GameStatus {
    /// True once no further turns will be accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Optional rule toggles carried by the second observed rule set.
///
/// The default is the vertical-only canonical rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    /// Collapse three equal horizontal neighbors into the center (x4).
    pub horizontal_merge: bool,
    /// Allow a drop into a full column when its top cell matches the
    /// incoming value.
    pub top_match_drop: bool,
}
