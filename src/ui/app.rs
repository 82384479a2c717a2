//! Main application for the Gomoku GUI
//!
//! The app owns a [`GameHistory`] and nothing else that affects play. Every
//! frame it reads the current snapshot and derived status from the history,
//! draws them, and forwards clicks and key presses back into it.

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};
use tracing::warn;

use crate::{GameHistory, GameStatus, Stone};
use super::board_view::BoardView;
use super::theme::*;

/// Main Gomoku application
#[derive(Default)]
pub struct GomokuApp {
    history: GameHistory,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn jump(&mut self, step: usize) {
        if let Err(err) = self.history.jump_to(step) {
            warn!(%err, "jump ignored");
        }
    }

    fn render_title_bar(&self, ctx: &Context) {
        TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("GOMOKU").size(20.0).strong().color(TEXT_PRIMARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("T: order  Home/End: first/last").size(11.0).color(TEXT_MUTED));
                });
            });
        });
    }

    /// Render the side panel with status and move list
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(6.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_history_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Status line plus the move-list order toggle
    fn render_status_card(&mut self, ui: &mut egui::Ui) {
        let status = self.history.status();
        let color = match status {
            GameStatus::Won { .. } => WIN_HIGHLIGHT,
            GameStatus::Draw => STATUS_DRAW,
            GameStatus::InProgress { .. } => STATUS_PLAYING,
        };

        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(status.to_string()).size(18.0).strong().color(color));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let arrow = if self.history.is_ascending() { "⬆" } else { "⬇" };
                    let toggle = egui::Button::new(RichText::new(arrow).size(16.0).color(TEXT_PRIMARY)).fill(BUTTON_BG);
                    if ui.add(toggle).on_hover_text("Reverse move list").clicked() {
                        self.history.toggle_order();
                    }
                });
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Step {} of {}", self.history.step(), self.history.len() - 1))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Move list; clicking an entry jumps to that step
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let mut target = None;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for step in self.history.ordered_steps() {
                    let Some(label) = self.history.move_label(step) else {
                        continue;
                    };
                    let selected = step == self.history.step();
                    let fill = if selected { BUTTON_SELECTED } else { BUTTON_BG };
                    let text = RichText::new(format!("{}. {}", step + 1, label)).size(12.0).color(TEXT_PRIMARY);
                    if ui.add(egui::Button::new(text).fill(fill)).clicked() {
                        target = Some(step);
                    }
                }
            });
        });

        if let Some(step) = target {
            self.jump(step);
        }
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let board = *self.history.current();
            let status = self.history.status();
            let line = match &status {
                GameStatus::Won { line, .. } => Some(line.as_slice()),
                _ => None,
            };
            let next = match status {
                GameStatus::InProgress { next } => next,
                _ => Stone::Empty,
            };

            let clicked = self.board_view.show(ui, &board, next, line, next == Stone::Empty);

            // Illegal clicks are dropped inside play_move
            if let Some(pos) = clicked {
                self.history.play_move(pos.to_index());
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (toggle, first, last) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::Home),
                i.key_pressed(egui::Key::End),
            )
        });

        if toggle {
            self.history.toggle_order();
        }
        if first {
            self.jump(0);
        }
        if last {
            self.jump(self.history.len() - 1);
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_title_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
