//! Game history with time travel
//!
//! [`GameHistory`] is the single state container behind the GUI. It owns the
//! ordered list of board snapshots, the step currently shown, and the order in
//! which the move list is displayed. Whose turn it is, whether the game is won
//! and whether it is drawn are all derived from the current snapshot and step
//! on demand; none of them is stored.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameHistory, Stone};
//!
//! let mut game = GameHistory::new();
//! game.play_move(0);
//! game.play_move(11);
//! assert_eq!(game.len(), 3);
//! assert_eq!(game.next_player(), Stone::Black);
//!
//! game.jump_to(1).unwrap();
//! assert_eq!(game.next_player(), Stone::White);
//!
//! // Playing from an earlier step discards the later snapshots
//! game.play_move(55);
//! assert_eq!(game.len(), 3);
//! ```

use std::fmt;

use derive_more::{Display, Error};
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::rules::{self, Line, MoveRejection};

/// Errors from history navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    #[display("step {step} is outside history of length {len}")]
    StepOutOfRange { step: usize, len: usize },
}

/// Player to move at a given step. Black moves on even steps.
#[inline]
pub fn player_for_step(step: usize) -> Stone {
    if step % 2 == 0 {
        Stone::Black
    } else {
        Stone::White
    }
}

/// Outcome of the position at the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Won { winner: Stone, line: Line },
    Draw,
    InProgress { next: Stone },
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner.symbol()),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next.symbol()),
        }
    }
}

/// Move-list entry for one history step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveLabel {
    /// Step 0, the empty board
    Start,
    /// A played move. `row` and `col` are 1-based.
    Move { number: usize, row: usize, col: usize },
}

impl fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveLabel::Start => write!(f, "Go to game start"),
            MoveLabel::Move { number, row, col } => {
                write!(f, "Go to move #{}: ({},{})", number, col, row)
            }
        }
    }
}

/// Snapshots, cursor and move-list order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    /// Never empty; element 0 is the empty board
    snapshots: Vec<Board>,
    /// Index of the snapshot being shown
    step: usize,
    ascending: bool,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    /// Empty board at step 0, move list ascending
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            step: 0,
            ascending: true,
        }
    }

    /// Snapshot at the cursor
    #[inline]
    pub fn current(&self) -> &Board {
        &self.snapshots[self.step]
    }

    /// Snapshot at an arbitrary step
    pub fn snapshot(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Number of snapshots, including the start board
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// The start board is never removed, so this is always false
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Cursor position
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Player to move, derived from the cursor
    #[inline]
    pub fn next_player(&self) -> Stone {
        player_for_step(self.step)
    }

    /// Winning line on the current snapshot
    pub fn winning_line(&self) -> Option<Line> {
        rules::find_winning_line(self.current())
    }

    /// True when the current snapshot is full and has no winning line
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current())
    }

    /// Win, draw, or who moves next
    pub fn status(&self) -> GameStatus {
        let board = self.current();
        if let Some(line) = rules::find_winning_line(board) {
            GameStatus::Won {
                winner: board.get(line[0]),
                line,
            }
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Play at a cell index; illegal moves are ignored.
    pub fn play_move(&mut self, index: usize) {
        if let Err(reason) = self.try_play_index(index) {
            debug!(index, %reason, "move ignored");
        }
    }

    /// Play at a cell index, reporting why an illegal move was refused
    pub fn try_play_index(&mut self, index: usize) -> Result<usize, MoveRejection> {
        let pos = rules::check_index(self.current(), index)?;
        self.try_play(pos)
    }

    /// Play at `pos` from the current step.
    ///
    /// Snapshots after the cursor are discarded before the new one is appended.
    /// Returns the new step. On rejection nothing changes.
    pub fn try_play(&mut self, pos: Pos) -> Result<usize, MoveRejection> {
        let board = *self.current();
        rules::check_move(&board, pos)?;

        let player = self.next_player();
        let next = board.with_stone(pos, player);

        let discarded = self.snapshots.len() - self.step - 1;
        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(next);
        self.step = self.snapshots.len() - 1;

        debug!(
            step = self.step,
            row = pos.row,
            col = pos.col,
            player = player.symbol(),
            discarded,
            "move played"
        );

        if let Some(line) = rules::find_winning_line(&next) {
            let cells: Vec<usize> = line.iter().map(|p| p.to_index()).collect();
            info!(winner = player.symbol(), ?cells, "five in a row");
        } else if rules::is_full(&next) {
            info!(step = self.step, "board full, game drawn");
        }

        Ok(self.step)
    }

    /// Move the cursor to `step`. History contents are untouched.
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.snapshots.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }
        self.step = step;
        debug!(step, "jumped");
        Ok(())
    }

    /// Reverse the move-list order
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "move list order toggled");
    }

    #[inline]
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Label for the move list. None if `step` is past the end.
    pub fn move_label(&self, step: usize) -> Option<MoveLabel> {
        let board = self.snapshots.get(step)?;
        Some(match board.last_move() {
            Some(pos) if step > 0 => MoveLabel::Move {
                number: step,
                row: pos.row as usize + 1,
                col: pos.col as usize + 1,
            },
            _ => MoveLabel::Start,
        })
    }

    /// Step indices in display order
    pub fn ordered_steps(&self) -> Box<dyn Iterator<Item = usize>> {
        let steps = 0..self.snapshots.len();
        if self.ascending {
            Box::new(steps)
        } else {
            Box::new(steps.rev())
        }
    }
}
