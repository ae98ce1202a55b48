//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{Align2, CentralPanel, Context, Frame, RichText, TopBottomPanel, Vec2};

use super::board_view::{BoardSnapshot, BoardView};
use super::session::Session;
use super::theme::*;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    session: Session,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session) -> Self {
        Self {
            session,
            board_view: BoardView::default(),
        }
    }

    /// Render the bottom panel with status and restart control
    fn render_controls(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("controls")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(self.session.status_text())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new(format!("Move #{}", self.session.game().move_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(6.0);

                    if ui.button(RichText::new("Restart Game").size(16.0)).clicked() {
                        self.session.restart();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                let game = self.session.game();
                let snapshot = BoardSnapshot {
                    board: game.board(),
                    current_player: game.current_player(),
                    last_move: game.last_move(),
                    winning_line: game.winning_line(),
                    accepts_input: self.session.accepts_input(),
                };

                let clicked = ui
                    .vertical_centered(|ui| self.board_view.show(ui, &snapshot))
                    .inner;

                // Handle click
                if let Some(pos) = clicked {
                    let _ = self.session.click(pos.row as usize, pos.col as usize);
                }
            });
    }

    /// Modal-style message when the game ends
    fn render_notification(&mut self, ctx: &Context) {
        let Some(note) = self.session.notification() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(note.title())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(note.message()).size(20.0).strong());
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.session.dismiss_notification();
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (restart, dismiss) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::R) || i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter),
            )
        });

        if restart {
            self.session.restart();
        } else if dismiss {
            self.session.dismiss_notification();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_controls(ctx);
        self.render_board(ctx);
        self.render_notification(ctx);
    }
}
