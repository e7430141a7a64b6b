//! Core module - pure game logic with no external dependencies
//!
//! Board simulation, merge cascade, block generation and turn sequencing.
//! Zero dependencies on UI or I/O.

pub mod board;
pub mod game_state;
pub mod generator;
pub mod merge;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::GameState;
pub use generator::{BlockGenerator, SimpleRng};
pub use merge::{resolve_cascade, CascadeOutcome};
pub use snapshot::GameSnapshot;
