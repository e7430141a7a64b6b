//! Merge engine - resolves the cascade triggered by a single drop
//!
//! Starting from the just-filled cell, collapse rules are applied in a
//! fixed priority order until neither applies: first the horizontal triple
//! (when enabled), then the vertical pair. A vertical merge moves the
//! cascade to the merge target one row down and the process repeats.
//!
//! Each vertical merge strictly lowers the column's fill height, so the
//! loop runs at most ROWS times per drop (plus one for the guard row).

use crate::core::board::Board;
use crate::core::generator::BlockGenerator;
use crate::types::Rules;

/// What a cascade did; consumed by the controller and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeOutcome {
    pub vertical_merges: u32,
    pub horizontal_merges: u32,
    /// Largest value any merge produced, `0` if nothing merged.
    pub peak_value: u32,
}

impl CascadeOutcome {
    pub fn merges(&self) -> u32 {
        self.vertical_merges + self.horizontal_merges
    }
}

/// Fully resolve the cascade for the block just placed at the top of `col`.
///
/// Mutates the board and, through `raise_ceiling`, the generator. Returns
/// once no rule applies; no partial state is observable from outside.
pub fn resolve_cascade(
    board: &mut Board,
    generator: &mut BlockGenerator,
    rules: Rules,
    col: usize,
) -> CascadeOutcome {
    let mut outcome = CascadeOutcome::default();
    debug_assert!(board.fill_height(col) > 0, "cascade on an empty column");
    let mut row = board.fill_height(col) - 1;

    loop {
        if rules.horizontal_merge && board.horizontal_triple_at(col, row) {
            let merged = board.merge_horizontal_triple(col, row);
            outcome.horizontal_merges += 1;
            outcome.peak_value = outcome.peak_value.max(merged);
        }

        // vertical_pair_at is false at row 0, which also terminates the
        // loop after a merge reaches the bottom.
        if !board.vertical_pair_at(col, row) {
            break;
        }
        let merged = board.merge_vertical(col, row);
        generator.raise_ceiling(merged);
        outcome.vertical_merges += 1;
        outcome.peak_value = outcome.peak_value.max(merged);
        row -= 1;
    }

    outcome
}
