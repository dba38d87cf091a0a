//! Main application for the Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::session::{GameMode, Session, SessionConfig};
use super::theme::*;
use crate::Stone;

/// Main Gomoku application
pub struct GomokuApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SessionConfig) -> Self {
        Self {
            session: Session::new(config),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.session.on_reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Play vs AI as Black").clicked() {
                        self.session.set_mode(GameMode::PvE { human_color: Stone::Black });
                        ui.close_menu();
                    }
                    if ui.button("Play vs AI as White").clicked() {
                        self.session.set_mode(GameMode::PvE { human_color: Stone::White });
                        ui.close_menu();
                    }
                    if ui.button("Two Players").clicked() {
                        self.session.set_mode(GameMode::PvP);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.config.mode {
                        GameMode::PvE { human_color } => format!("vs AI - You: {human_color}"),
                        GameMode::PvP => "Two Players".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title(ui);
                ui.add_space(12.0);

                if let Some(message) = self.session.game.result_message() {
                    self.render_result_card(ui, &message);
                } else {
                    self.render_turn_card(ui);
                }
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row · 15×15").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.game.current_player();
            let (fill, text) = if turn == Stone::Black {
                (BLACK_STONE, TEXT_PRIMARY)
            } else {
                (WHITE_STONE, BLACK_STONE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(44.0, 44.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    if turn == Stone::Black { "B" } else { "W" },
                    egui::FontId::proportional(18.0),
                    text,
                );
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if self.session.is_ai_turn() {
                        ("AI thinking...", STATUS_WAITING)
                    } else {
                        ("Your turn", STATUS_READY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_result_card(&mut self, ui: &mut egui::Ui, message: &str) {
        Frame::new()
            .fill(RESULT_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(message).size(20.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(10.0);
                    if ui.button(RichText::new("New Game").size(14.0)).clicked() {
                        self.session.on_reset();
                    }
                });
            });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Restart").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.session.on_reset();
                    }
                });

                if self.session.config.mode == GameMode::PvP {
                    ui.add_space(4.0);
                    btn_frame.show(ui, |ui| {
                        let label = egui::Label::new(RichText::new("Hint (H)").size(12.0).color(TEXT_PRIMARY));
                        if ui.add(label.sense(egui::Sense::click())).clicked() {
                            self.session.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            let moves = self.session.game.move_count();
            ui.label(RichText::new(format!("Move #{moves}")).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                return;
            };
            ui.label(RichText::new(format!("Score: {:.1}", result.score)).size(11.0).color(TEXT_SECONDARY));
            ui.label(RichText::new(format!("Tied cells: {}", result.candidates)).size(10.0).color(TEXT_SECONDARY));
            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_MUTED));
            if let Some(pos) = result.best_move {
                let col = (b'A' + pos.col) as char;
                let row = crate::BOARD_SIZE - pos.row as usize;
                ui.label(RichText::new(format!("→ {col}{row}")).size(12.0).strong().color(STATUS_READY));
            }
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let game = &self.session.game;
                let frame = BoardFrame {
                    board: game.board(),
                    current_turn: game.current_player(),
                    last_move: game.last_move(),
                    suggested_move: self.session.suggested_move,
                    winning_line: game.winning_cells(),
                    accepts_input: self.session.is_human_turn(),
                };

                if let Some(pos) = self.board_view.show(ui, &frame) {
                    self.session.on_cell_activated(pos);
                }
            });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) && self.session.config.mode == GameMode::PvP {
                self.session.request_suggestion();
            }
            if i.key_pressed(egui::Key::N) {
                self.session.on_reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = Instant::now();
        self.session.tick(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Wake up again when the computer is due to move
        if let Some(remaining) = self.session.ai_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
