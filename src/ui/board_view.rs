//! Board rendering for the Gomoku GUI

use crate::{Board, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks are reported for any cell; legality is decided by the caller.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        next: Stone,
        winning_line: Option<&[Pos]>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = (available_size.x.min(available_size.y) - 20.0).max(2.0 * BOARD_MARGIN + 10.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        if let Some(line) = winning_line {
            self.draw_winning_cells(&painter, line);
        }

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = board.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        let mut clicked_pos = None;

        if let Some(pointer_pos) = response.hover_pos() {
            if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                if !game_over && board.is_empty(board_pos) {
                    self.draw_hover_preview(&painter, board_pos, next);
                }
                if response.clicked() {
                    clicked_pos = Some(board_pos);
                }
            }
        }

        clicked_pos
    }

    /// Draw cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw 1-based column and row numbers, matching the move list
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let label = format!("{}", i + 1);
            let along = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            let top = Pos2::new(self.board_rect.min.x + along, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, self.board_rect.min.y + along);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (idx, stone) in board.cells().enumerate() {
            if stone != Stone::Empty {
                self.draw_mark(painter, Pos::from_index(idx), stone, 255);
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, pos: Pos, stone: Stone, alpha: u8) {
        let color = match stone {
            Stone::Black => BLACK_MARK,
            Stone::White => WHITE_MARK,
            Stone::Empty => return,
        };
        let color = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha);

        painter.text(
            self.board_to_screen(pos),
            egui::Align2::CENTER_CENTER,
            stone.symbol(),
            FontId::monospace(self.cell_size * MARK_SIZE_RATIO),
            color,
        );
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).right_top() + Vec2::new(-5.0, 5.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Fill and outline the cells of the winning line
    fn draw_winning_cells(&self, painter: &Painter, line: &[Pos]) {
        for &pos in line {
            let rect = self.cell_rect(pos).shrink(1.0);
            painter.rect_filled(rect, CornerRadius::same(2), WIN_CELL_BG);
            painter.rect_stroke(rect, CornerRadius::same(2), Stroke::new(2.0, WIN_HIGHLIGHT), StrokeKind::Inside);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, next: Stone) {
        painter.rect_filled(self.cell_rect(pos).shrink(1.0), CornerRadius::same(2), hover_valid());
        self.draw_mark(painter, pos, next, 90);
    }

    /// Screen-space rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
