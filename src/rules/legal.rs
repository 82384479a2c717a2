//! Move legality

use derive_more::{Display, Error};
use tracing::instrument;

use crate::board::{Board, Pos};

use super::draw::is_full;
use super::win::find_winning_line;

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// The current position already contains a winning line
    #[display("game is already won")]
    GameWon,
    /// Every cell is taken
    #[display("board is full")]
    BoardFull,
    #[display("cell {_0} is already occupied")]
    Occupied(#[error(not(source))] usize),
    #[display("cell {_0} is off the board")]
    OutOfBounds(#[error(not(source))] usize),
}

/// Check whether a stone may be placed at `pos` on `board`.
///
/// Order of checks: a finished game refuses every move before the target
/// cell itself is looked at.
#[instrument(level = "trace", skip(board))]
pub fn check_move(board: &Board, pos: Pos) -> Result<(), MoveRejection> {
    if find_winning_line(board).is_some() {
        return Err(MoveRejection::GameWon);
    }
    if is_full(board) {
        return Err(MoveRejection::BoardFull);
    }
    if !board.is_empty(pos) {
        return Err(MoveRejection::Occupied(pos.to_index()));
    }
    Ok(())
}

/// Same as [`check_move`] for a raw cell index
pub fn check_index(board: &Board, index: usize) -> Result<Pos, MoveRejection> {
    let pos = Pos::try_from_index(index).ok_or(MoveRejection::OutOfBounds(index))?;
    check_move(board, pos)?;
    Ok(pos)
}

/// Check if a move is legal
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    check_move(board, pos).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_empty_cell_is_valid() {
        let board = Board::new();
        assert!(is_valid_move(&board, Pos::new(0, 0)));
        assert_eq!(check_index(&board, 42), Ok(Pos::new(4, 2)));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let board = Board::new().with_stone(Pos::new(3, 3), Stone::Black);
        assert_eq!(check_move(&board, Pos::new(3, 3)), Err(MoveRejection::Occupied(33)));
        assert!(is_valid_move(&board, Pos::new(3, 4)));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let board = Board::new();
        assert_eq!(check_index(&board, 100), Err(MoveRejection::OutOfBounds(100)));
        assert_eq!(check_index(&board, usize::MAX), Err(MoveRejection::OutOfBounds(usize::MAX)));
    }

    #[test]
    fn test_last_cell_index_accepted() {
        let board = Board::new();
        assert_eq!(check_index(&board, 99), Ok(Pos::new(9, 9)));
        assert_eq!(check_index(&board, 0), Ok(Pos::new(0, 0)));
    }

    #[test]
    fn test_won_game_rejects_every_cell() {
        let mut board = Board::new();
        for col in 0..5 {
            board = board.with_stone(Pos::new(0, col), Stone::White);
        }
        assert_eq!(check_move(&board, Pos::new(9, 9)), Err(MoveRejection::GameWon));
        // Win takes precedence over the occupied-cell check
        assert_eq!(check_move(&board, Pos::new(0, 0)), Err(MoveRejection::GameWon));
    }

    #[test]
    fn test_full_board_rejected() {
        let mut board = Board::new();
        for row in 0..10u8 {
            for col in 0..10u8 {
                let stone = if (col / 2 + row) % 2 == 0 { Stone::Black } else { Stone::White };
                board = board.with_stone(Pos::new(row, col), stone);
            }
        }
        assert_eq!(check_move(&board, Pos::new(5, 5)), Err(MoveRejection::BoardFull));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(MoveRejection::Occupied(7).to_string(), "cell 7 is already occupied");
        assert_eq!(MoveRejection::GameWon.to_string(), "game is already won");
    }
}
