//! Cells, positions and board snapshots

pub mod bitboard;
pub mod board;


pub use bitboard::Bitboard;
pub use board::Board;

/// Side length of the square board
pub const BOARD_SIZE: usize = 10;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Run length that wins the game
pub const WIN_LENGTH: usize = 5;

/// Contents of one cell. Black moves on even steps, starting with the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// "X" for Black, "O" for White, as shown on the board and in the status line
    pub fn symbol(self) -> &'static str {
        match self {
            Stone::Black => "X",
            Stone::White => "O",
            Stone::Empty => "",
        }
    }
}

/// Zero-based cell coordinates; cell index is `row * BOARD_SIZE + col`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Caller guarantees `idx < TOTAL_CELLS`
    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// None for indices past the last cell
    #[inline]
    pub fn try_from_index(idx: usize) -> Option<Self> {
        (idx < TOTAL_CELLS).then(|| Self::from_index(idx))
    }

    /// Signed coordinates, so direction steps can be tested before building a `Pos`
    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }
}

// Row-major order, same as cell index
impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
