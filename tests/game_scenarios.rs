//! End-to-end games driven through the public API.

use gomoku::{player_for_step, GameHistory, GameStatus, MoveLabel, Pos, Stone, BOARD_SIZE};

fn line_indices(game: &GameHistory) -> Option<Vec<usize>> {
    game.winning_line()
        .map(|line| line.iter().map(|p| p.to_index()).collect())
}

/// Cell order that fills the board without any five-in-a-row.
///
/// X cells are those with `(col / 2 + row)` even. Black takes X cells and
/// White takes O cells alternately, so the final board never contains a run
/// longer than two.
fn drawing_sequence() -> Vec<usize> {
    let (mut x, mut o) = (Vec::new(), Vec::new());
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let idx = row * BOARD_SIZE + col;
            if (col / 2 + row) % 2 == 0 {
                x.push(idx);
            } else {
                o.push(idx);
            }
        }
    }
    x.into_iter().zip(o).flat_map(|(a, b)| [a, b]).collect()
}

#[test]
fn test_top_row_win() {
    let mut game = GameHistory::new();
    for cell in [0, 50, 1, 51, 2, 52, 3, 53, 4] {
        game.play_move(cell);
    }
    assert_eq!(line_indices(&game), Some(vec![0, 1, 2, 3, 4]));
    assert!(matches!(game.status(), GameStatus::Won { winner: Stone::Black, .. }));
}

#[test]
fn test_full_board_draw() {
    let mut game = GameHistory::new();
    let sequence = drawing_sequence();
    assert_eq!(sequence.len(), 100);

    for cell in sequence {
        game.try_play_index(cell).unwrap();
    }

    assert_eq!(game.len(), 101);
    assert!(game.current().is_full());
    assert_eq!(game.winning_line(), None);
    assert!(game.is_draw());
    assert_eq!(game.status(), GameStatus::Draw);

    // Drawn game refuses further input but still navigates
    let before = game.clone();
    game.play_move(0);
    assert_eq!(game, before);
    game.jump_to(50).unwrap();
    assert!(!game.is_draw());
}

#[test]
fn test_jump_to_start_shows_empty_board() {
    let mut game = GameHistory::new();
    for cell in [44, 45, 54, 55, 64] {
        game.play_move(cell);
    }
    game.jump_to(0).unwrap();
    assert!(game.current().is_board_empty());
    assert_eq!(game.current(), GameHistory::new().current());
    assert_eq!(game.next_player(), Stone::Black);
}

#[test]
fn test_turn_parity_holds_across_jumps() {
    let mut game = GameHistory::new();
    let cells = [11, 22, 33, 44, 56, 67, 78];
    for (n, &cell) in cells.iter().enumerate() {
        game.play_move(cell);
        let expected = if (n + 1) % 2 == 0 { Stone::Black } else { Stone::White };
        assert_eq!(game.next_player(), expected);
    }

    for step in [3, 0, 6, 1, 7, 4] {
        game.jump_to(step).unwrap();
        assert_eq!(game.next_player(), player_for_step(step));
    }
}

#[test]
fn test_branching_replaces_future() {
    let mut game = GameHistory::new();
    for cell in [0, 1, 2, 3, 4, 5] {
        game.play_move(cell);
    }
    assert_eq!(game.len(), 7);

    game.jump_to(2).unwrap();
    game.play_move(99);

    assert_eq!(game.len(), 4);
    assert_eq!(game.step(), 3);
    assert_eq!(game.current().get(Pos::from_index(99)), Stone::Black);
    assert_eq!(game.current().stone_count(), 3);
    assert_eq!(game.move_label(3), Some(MoveLabel::Move { number: 3, row: 10, col: 10 }));
}

#[test]
fn test_winning_then_rewinding_reopens_play() {
    let mut game = GameHistory::new();
    for cell in [0, 50, 10, 51, 20, 52, 30, 53, 40] {
        game.play_move(cell);
    }
    assert_eq!(line_indices(&game), Some(vec![0, 10, 20, 30, 40]));

    game.jump_to(8).unwrap();
    assert_eq!(game.winning_line(), None);
    game.play_move(60);
    assert_eq!(game.len(), 10);
    assert_eq!(game.status(), GameStatus::InProgress { next: Stone::White });
}
