//! Draw detection

use tracing::instrument;

use crate::board::Board;

use super::win::find_winning_line;

/// True when every cell is occupied.
///
/// This is the raw full-board check; a full board may still hold a winning
/// line, so callers must look for a winner first (or use [`is_draw`]).
#[instrument(level = "trace", skip_all)]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Full board with no winning line
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_winning_line(board).is_none()
}
