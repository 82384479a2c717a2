//! Game rules for Gomoku
//!
//! Pure functions over a single board snapshot:
//! - Win detection (first five-in-a-row in scan order)
//! - Draw detection (full board)
//! - Move legality

pub mod draw;
pub mod legal;
pub mod win;

// Re-exports for convenient access
pub use draw::{is_draw, is_full};
pub use legal::{check_index, check_move, is_valid_move, MoveRejection};
pub use win::{find_winning_line, find_winning_line_with, winner, Line};
