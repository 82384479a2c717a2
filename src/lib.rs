//! Two-player Gomoku with a navigable move history
//!
//! Players alternate placing marks on a 10x10 board; the first to line up
//! five in a row horizontally, vertically or diagonally wins, and a full
//! board without such a line is a draw. Every position reached is kept, so
//! the game can be rewound to any earlier step and continued from there.
//!
//! # Architecture
//!
//! - [`board`]: Immutable board snapshots backed by bitboards
//! - [`rules`]: Win, draw and move-legality checks on a single snapshot
//! - [`history`]: Snapshot list, cursor and move-list order
//! - [`ui`]: egui front end that renders the history and forwards input
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameHistory, GameStatus, Stone};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 90, 1, 91, 2, 92, 3, 93, 4] {
//!     game.play_move(cell);
//! }
//!
//! match game.status() {
//!     GameStatus::Won { winner, line } => {
//!         assert_eq!(winner, Stone::Black);
//!         assert_eq!(line.len(), 5);
//!     }
//!     other => panic!("unexpected status: {other}"),
//! }
//! ```

pub mod board;
pub mod history;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS, WIN_LENGTH};
pub use history::{player_for_step, GameHistory, GameStatus, HistoryError, MoveLabel};
pub use rules::{Line, MoveRejection};
