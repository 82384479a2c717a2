//! Immutable board snapshot

use super::bitboard::Bitboard;
use super::{Pos, Stone, TOTAL_CELLS};

/// One board configuration in the game history.
///
/// Snapshots are plain values: placing a stone yields a new `Board` and leaves
/// the original untouched, so a recorded position can never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    /// Cell played to reach this snapshot (None for the empty start board)
    last_move: Option<Pos>,
}

impl Board {
    /// Empty board with no last move
    pub const fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            last_move: None,
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// New snapshot with `stone` placed at `pos`, recording `pos` as the last move.
    ///
    /// Placing `Stone::Empty` only moves the last-move marker.
    #[must_use]
    pub fn with_stone(&self, pos: Pos, stone: Stone) -> Board {
        let mut next = *self;
        match stone {
            Stone::Black => next.black.set(pos),
            Stone::White => next.white.set(pos),
            Stone::Empty => {}
        }
        next.last_move = Some(pos);
        next
    }

    /// Cell played to reach this snapshot
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// All occupied cells, ascending by index
    pub fn occupied(&self) -> impl Iterator<Item = Pos> {
        self.black.union(&self.white).iter_ones()
    }

    /// Cell values in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Stone> + '_ {
        (0..TOTAL_CELLS).map(move |idx| self.get(Pos::from_index(idx)))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// True when no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}
