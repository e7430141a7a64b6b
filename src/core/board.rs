//! Board module - column stacks of power-of-two blocks
//!
//! The board is COLS columns of ROWS cells each, filled bottom-up: row 0 is
//! the bottom. Every column is a contiguous stack — all rows below the fill
//! height are occupied, everything above is empty. One guard row sits above
//! ROWS so a drop onto a matching full column (the opt-in rule) has
//! somewhere to land before the cascade pulls it back down; it must read as
//! empty whenever an operation has completed.

use crate::types::{BlockValue, Rules, COLS, ROWS};

/// The game board: fixed column-major storage plus per-column fill heights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// `cells[col][row]`, row 0 at the bottom. Row ROWS is the guard row.
    cells: [[BlockValue; ROWS + 1]; COLS],
    /// Index of the first empty row in each column.
    next_row: [usize; COLS],
    /// Number of occupied cells; always equals `next_row.iter().sum()`.
    total: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[0; ROWS + 1]; COLS],
            next_row: [0; COLS],
            total: 0,
        }
    }

    /// Value at (col, row); `0` means empty.
    pub fn value(&self, col: usize, row: usize) -> BlockValue {
        self.cells[col][row]
    }

    /// Fill height of a column (index of its first empty row).
    pub fn fill_height(&self, col: usize) -> usize {
        self.next_row[col]
    }

    /// Number of occupied cells on the whole board.
    pub fn total(&self) -> usize {
        self.total
    }

    /// True when every visible cell is occupied.
    pub fn is_full(&self) -> bool {
        self.total == COLS * ROWS
    }

    /// Topmost value of a column, or `0` if the column is empty.
    pub fn top_value(&self, col: usize) -> BlockValue {
        match self.next_row[col] {
            0 => 0,
            h => self.cells[col][h - 1],
        }
    }

    /// Whether a drop of `incoming` into `col` is legal.
    ///
    /// A column accepts while it has visible space. Under
    /// `Rules::top_match_drop` a full column additionally accepts a value
    /// equal to its top cell; the placed block lands on the guard row and
    /// the cascade immediately merges it down.
    pub fn can_accept(&self, col: usize, incoming: BlockValue, rules: Rules) -> bool {
        if self.next_row[col] < ROWS {
            return true;
        }
        rules.top_match_drop && self.next_row[col] == ROWS && self.top_value(col) == incoming
    }

    /// Place `value` at the top of `col`.
    ///
    /// Fatal if the column has no room (callers must check `can_accept`
    /// first). May leave a block on the guard row; the caller is required
    /// to resolve the cascade before the board is observed.
    pub fn place(&mut self, col: usize, value: BlockValue) {
        let row = self.next_row[col];
        assert!(row <= ROWS, "place into over-full column {col}");
        assert!(value > 0, "place of empty value");
        self.cells[col][row] = value;
        self.next_row[col] += 1;
        self.total += 1;
    }

    /// Whether the vertical rule applies at (col, row): the cell equals the
    /// cell directly below it.
    pub fn vertical_pair_at(&self, col: usize, row: usize) -> bool {
        row > 0 && self.cells[col][row] != 0 && self.cells[col][row] == self.cells[col][row - 1]
    }

    /// Merge the cell at (col, row) into the one below it, doubling it.
    ///
    /// Requires the two cells to hold the same value and `row` to be the
    /// top of its column, so no gap can form. Returns the merged value.
    pub fn merge_vertical(&mut self, col: usize, row: usize) -> BlockValue {
        assert!(row > 0, "vertical merge at the bottom row");
        assert!(
            self.cells[col][row] == self.cells[col][row - 1],
            "vertical merge on unequal values"
        );
        debug_assert_eq!(row + 1, self.next_row[col], "vertical merge below the top");

        let merged = self.cells[col][row] * 2;
        self.cells[col][row - 1] = merged;
        self.cells[col][row] = 0;
        self.next_row[col] -= 1;
        self.total -= 1;
        merged
    }

    /// Whether the horizontal-triple rule applies at (col, row): both
    /// horizontal neighbors hold the same value as the cell.
    ///
    /// The neighbor-height check is part of the rule: a neighbor column
    /// whose stack does not reach `row` cannot participate, since removing
    /// a cell it does not own would desynchronize its fill height.
    pub fn horizontal_triple_at(&self, col: usize, row: usize) -> bool {
        if col == 0 || col + 1 >= COLS {
            return false;
        }
        let v = self.cells[col][row];
        v != 0
            && self.next_row[col - 1] > row
            && self.next_row[col + 1] > row
            && self.cells[col - 1][row] == v
            && self.cells[col + 1][row] == v
    }

    /// Collapse three equal horizontal neighbors into the center cell.
    ///
    /// The center quadruples (two doublings); each neighbor column's stack
    /// shifts down by one from `row`. Fatal unless `horizontal_triple_at`
    /// holds. Returns the new center value.
    pub fn merge_horizontal_triple(&mut self, col: usize, row: usize) -> BlockValue {
        assert!(
            self.horizontal_triple_at(col, row),
            "horizontal merge without a matching triple"
        );

        self.cells[col][row] <<= 2;
        self.remove_at(col - 1, row);
        self.remove_at(col + 1, row);
        self.cells[col][row]
    }

    /// Remove the cell at (col, row) by shifting the rest of the stack down.
    fn remove_at(&mut self, col: usize, row: usize) {
        let top = self.next_row[col];
        debug_assert!(row < top);
        for i in row..top - 1 {
            self.cells[col][i] = self.cells[col][i + 1];
        }
        self.cells[col][top - 1] = 0;
        self.next_row[col] -= 1;
        self.total -= 1;
    }

    /// Copy the visible grid into a plain array, `out[col][row]`.
    pub fn write_grid(&self, out: &mut [[BlockValue; ROWS]; COLS]) {
        for col in 0..COLS {
            out[col].copy_from_slice(&self.cells[col][..ROWS]);
        }
    }

    /// Check the contiguity invariants; used by tests after every operation.
    pub fn check_invariants(&self) {
        let mut counted = 0;
        for col in 0..COLS {
            let h = self.next_row[col];
            assert!(h <= ROWS, "column {col} height {h} exceeds ROWS");
            for row in 0..ROWS + 1 {
                if row < h {
                    assert!(self.cells[col][row] != 0, "gap at ({col}, {row})");
                } else {
                    assert!(self.cells[col][row] == 0, "stray block at ({col}, {row})");
                }
            }
            counted += h;
        }
        assert_eq!(counted, self.total, "total count out of sync");
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.total(), 0);
        for col in 0..COLS {
            assert_eq!(board.fill_height(col), 0);
            assert_eq!(board.top_value(col), 0);
        }
        board.check_invariants();
    }

    #[test]
    fn place_stacks_bottom_up() {
        let mut board = Board::new();
        board.place(2, 2);
        board.place(2, 4);
        assert_eq!(board.value(2, 0), 2);
        assert_eq!(board.value(2, 1), 4);
        assert_eq!(board.fill_height(2), 2);
        assert_eq!(board.top_value(2), 4);
        assert_eq!(board.total(), 2);
        board.check_invariants();
    }

    #[test]
    fn merge_vertical_doubles_into_lower_cell() {
        let mut board = Board::new();
        board.place(0, 2);
        board.place(0, 2);
        assert!(board.vertical_pair_at(0, 1));

        let merged = board.merge_vertical(0, 1);
        assert_eq!(merged, 4);
        assert_eq!(board.value(0, 0), 4);
        assert_eq!(board.value(0, 1), 0);
        assert_eq!(board.fill_height(0), 1);
        assert_eq!(board.total(), 1);
        board.check_invariants();
    }

    #[test]
    #[should_panic(expected = "unequal values")]
    fn merge_vertical_rejects_unequal_values() {
        let mut board = Board::new();
        board.place(0, 2);
        board.place(0, 4);
        board.merge_vertical(0, 1);
    }

    #[test]
    fn horizontal_triple_requires_neighbor_height() {
        let mut board = Board::new();
        // Center column two high, neighbors only one high: the rule must
        // not apply at row 1 even if values were to match.
        board.place(1, 4);
        board.place(2, 4);
        board.place(2, 4);
        board.place(3, 4);
        assert!(board.horizontal_triple_at(2, 0));
        assert!(!board.horizontal_triple_at(2, 1));
    }

    #[test]
    fn horizontal_triple_quadruples_and_shifts_neighbors() {
        let mut board = Board::new();
        board.place(0, 2);
        board.place(0, 8); // above the merge row, must shift down
        board.place(1, 2);
        board.place(2, 2);

        let merged = board.merge_horizontal_triple(1, 0);
        assert_eq!(merged, 8);
        assert_eq!(board.value(1, 0), 8);
        // Left neighbor lost its row-0 cell; the 8 above dropped down.
        assert_eq!(board.value(0, 0), 8);
        assert_eq!(board.fill_height(0), 1);
        assert_eq!(board.fill_height(2), 0);
        assert_eq!(board.total(), 2);
        board.check_invariants();
    }

    #[test]
    fn horizontal_triple_not_at_edges() {
        let mut board = Board::new();
        board.place(0, 2);
        assert!(!board.horizontal_triple_at(0, 0));
        assert!(!board.horizontal_triple_at(COLS - 1, 0));
    }

    #[test]
    fn can_accept_full_column() {
        let mut board = Board::new();
        for v in [2, 4, 2, 4, 2] {
            board.place(3, v);
        }
        assert!(!board.can_accept(3, 2, Rules::default()));

        let rules = Rules {
            top_match_drop: true,
            ..Rules::default()
        };
        assert!(board.can_accept(3, 2, rules));
        assert!(!board.can_accept(3, 4, rules));
    }

    #[test]
    fn place_on_guard_row_then_merge_restores_invariants() {
        let mut board = Board::new();
        for v in [4, 8, 4, 8, 2] {
            board.place(3, v);
        }
        // Matching drop onto the full column lands on the guard row.
        board.place(3, 2);
        assert_eq!(board.fill_height(3), ROWS + 1);
        assert!(board.vertical_pair_at(3, ROWS));

        board.merge_vertical(3, ROWS);
        assert_eq!(board.fill_height(3), ROWS);
        assert_eq!(board.top_value(3), 4);
        board.check_invariants();
    }
}
