//! Five-in-a-row detection
//!
//! The board is scanned row-major. From every occupied cell four directions
//! are tried in a fixed order and the first complete run is returned, so the
//! same snapshot always reports the same line even when several lines exist.

use tracing::instrument;

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors in scan order
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Winning line, cells ordered from lowest to highest index
pub type Line = Vec<Pos>;

/// Find the first `WIN_LENGTH` run of identical stones in scan order
pub fn find_winning_line(board: &Board) -> Option<Line> {
    find_winning_line_with(board, WIN_LENGTH)
}

/// Same as [`find_winning_line`] for an arbitrary run length
#[instrument(level = "trace", skip(board))]
pub fn find_winning_line_with(board: &Board, win_length: usize) -> Option<Line> {
    if win_length == 0 {
        return None;
    }

    // occupied() yields ascending indices, which is row-major order
    for start in board.occupied() {
        for &(dr, dc) in &DIRECTIONS {
            if let Some(line) = run_from(board, start, dr, dc, win_length) {
                return Some(line);
            }
        }
    }
    None
}

/// Color of the first winning line, if any
pub fn winner(board: &Board) -> Option<Stone> {
    find_winning_line(board).map(|line| board.get(line[0]))
}

/// Collect `len` cells from `start` stepping by (dr, dc), all matching the start stone.
///
/// Fails as soon as the run would leave the board, so lines never wrap
/// from one row into the next.
fn run_from(board: &Board, start: Pos, dr: i32, dc: i32, len: usize) -> Option<Line> {
    let stone = board.get(start);
    if stone == Stone::Empty {
        return None;
    }

    let mut line = Vec::with_capacity(len);
    line.push(start);
    for i in 1..len as i32 {
        let r = start.row as i32 + dr * i;
        let c = start.col as i32 + dc * i;
        if !Pos::is_valid(r, c) {
            return None;
        }
        let next = Pos::new(r as u8, c as u8);
        if board.get(next) != stone {
            return None;
        }
        line.push(next);
    }
    Some(line)
}
