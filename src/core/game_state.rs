//! Game state module - sequences one turn at a time
//!
//! Ties the board, the merge engine and the block generator together.
//! A turn is: validate the command, place the pending block, resolve the
//! cascade, advance the generator, then check for the end of the game.
//! Rejected commands leave all state untouched apart from the diagnostic.

use crate::core::board::Board;
use crate::core::generator::BlockGenerator;
use crate::core::merge::{resolve_cascade, CascadeOutcome};
use crate::core::snapshot::GameSnapshot;
use crate::types::{Command, GameStatus, Rules, COLS};

/// Diagnostic lines surfaced to the renderer.
pub const MSG_GREETING: &str = "drop blocks with 1-5, quit with q";
pub const MSG_INVALID_COLUMN: &str = "invalid column";
pub const MSG_COLUMN_FULL: &str = "column full";
pub const MSG_UNKNOWN_COMMAND: &str = "unknown command";
pub const MSG_GAME_OVER: &str = "no move left - game over";
pub const MSG_QUIT: &str = "bye";

/// Complete game state; one instance per run, mutated only by
/// `process_turn`.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    generator: BlockGenerator,
    rules: Rules,
    /// Successful drops so far; advisory.
    moves: u32,
    status: GameStatus,
    message: &'static str,
}

impl GameState {
    /// Create a new game with the given RNG seed and the default
    /// (vertical-only) rule set.
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    pub fn with_rules(seed: u32, rules: Rules) -> Self {
        Self::from_parts(Board::new(), BlockGenerator::new(seed), rules)
    }

    /// Assemble a game from existing parts. Lets tests and tools start
    /// from a crafted position.
    pub fn from_parts(board: Board, generator: BlockGenerator, rules: Rules) -> Self {
        Self {
            board,
            generator,
            rules,
            moves: 0,
            status: GameStatus::Playing,
            message: MSG_GREETING,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generator(&self) -> &BlockGenerator {
        &self.generator
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Process one command to completion, cascade included.
    ///
    /// Returns whether the command changed the game (a successful drop or
    /// a quit). Rejections only update the diagnostic message.
    pub fn process_turn(&mut self, command: Command) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        match command {
            Command::Quit => {
                self.status = GameStatus::Quit;
                self.message = MSG_QUIT;
                true
            }
            Command::ColumnSelect(n) => self.drop_into(n),
            Command::Unknown => {
                self.message = MSG_UNKNOWN_COMMAND;
                false
            }
        }
    }

    fn drop_into(&mut self, n: u8) -> bool {
        if n < 1 || n as usize > COLS {
            self.message = MSG_INVALID_COLUMN;
            return false;
        }
        let col = (n - 1) as usize;

        let incoming = self.generator.next();
        if !self.board.can_accept(col, incoming, self.rules) {
            self.message = MSG_COLUMN_FULL;
            return false;
        }

        self.board.place(col, incoming);
        let _ = self.resolve(col);
        self.moves += 1;
        self.generator.advance();
        self.message = "";

        // The generator has advanced, so the scan compares against the
        // block the player will drop next.
        if self.board.is_full() && !self.has_legal_move() {
            self.status = GameStatus::Lost;
            self.message = MSG_GAME_OVER;
        }
        true
    }

    fn resolve(&mut self, col: usize) -> CascadeOutcome {
        resolve_cascade(&mut self.board, &mut self.generator, self.rules, col)
    }

    /// Whether any column still accepts the pending block.
    pub fn has_legal_move(&self) -> bool {
        let next = self.generator.next();
        (0..COLS).any(|col| self.board.can_accept(col, next, self.rules))
    }

    /// Fill a snapshot for the renderer without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        for col in 0..COLS {
            out.fill_heights[col] = self.board.fill_height(col);
        }
        out.total = self.board.total();
        out.moves = self.moves;
        out.next = self.generator.next();
        out.peek = self.generator.peek();
        out.status = self.status;
        out.message = self.message;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_drop_places_the_opening_two() {
        let mut state = GameState::new(1);
        assert!(state.process_turn(Command::ColumnSelect(1)));
        assert_eq!(state.board().value(0, 0), 2);
        assert_eq!(state.board().fill_height(0), 1);
        assert_eq!(state.moves(), 1);
        assert_eq!(state.message(), "");
        // peek was 4, so it is now the pending block
        assert_eq!(state.generator().next(), 4);
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let mut state = GameState::new(1);
        assert!(!state.process_turn(Command::ColumnSelect(0)));
        assert_eq!(state.message(), MSG_INVALID_COLUMN);
        assert!(!state.process_turn(Command::ColumnSelect(6)));
        assert_eq!(state.board().total(), 0);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn unknown_command_only_updates_the_message() {
        let mut state = GameState::new(1);
        assert!(!state.process_turn(Command::Unknown));
        assert_eq!(state.message(), MSG_UNKNOWN_COMMAND);
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn quit_is_honored_immediately() {
        let mut state = GameState::new(1);
        assert!(state.process_turn(Command::Quit));
        assert_eq!(state.status(), GameStatus::Quit);
        // Terminal: further commands are ignored.
        assert!(!state.process_turn(Command::ColumnSelect(1)));
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn snapshot_reflects_the_board() {
        let mut state = GameState::new(1);
        state.process_turn(Command::ColumnSelect(3));
        let snap = state.snapshot();
        assert_eq!(snap.board[2][0], 2);
        assert_eq!(snap.fill_heights[2], 1);
        assert_eq!(snap.total, 1);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.next, 4);
        assert!(snap.playable());
    }
}
