//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};
use tracing::{debug, info};

use super::board_view::BoardView;
use super::move_list::MoveOrder;
use super::theme::*;
use crate::game::{Game, Status};

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    game: Game,
    board_view: BoardView,
    order: MoveOrder,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_order(MoveOrder::default())
    }
}

impl TicTacToeApp {
    /// Create the app for eframe
    pub fn new(_cc: &eframe::CreationContext<'_>, order: MoveOrder) -> Self {
        Self::with_order(order)
    }

    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            game: Game::new(),
            board_view: BoardView::default(),
            order,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn order(&self) -> MoveOrder {
        self.order
    }

    pub fn new_game(&mut self) {
        info!("New game");
        self.game = Game::new();
    }

    /// Forward a click to the game; rejected moves are ignored
    pub fn click_cell(&mut self, index: usize) {
        if let Err(err) = self.game.play_cell(index) {
            debug!(%err, "Click ignored");
        }
    }

    pub fn jump(&mut self, step: usize) {
        if let Err(err) = self.game.jump_to(step) {
            debug!(%err, "Jump ignored");
        }
    }

    /// Previous step; ignored at the game start
    pub fn step_back(&mut self) {
        if let Err(err) = self.game.step_back() {
            debug!(%err, "Step back ignored");
        }
    }

    /// Next recorded step; ignored at the end of the history
    pub fn step_forward(&mut self) {
        if let Err(err) = self.game.step_forward() {
            debug!(%err, "Step forward ignored");
        }
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Move order toggled");
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button(format!("Move order: {} (O)", self.order.label())).clicked() {
                        self.toggle_order();
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the side panel with status and history
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
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

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let status = self.game.status();
            let color = match status {
                Status::Winner(_) => WIN_HIGHLIGHT,
                Status::Draw => TEXT_SECONDARY,
                Status::InProgress(_) => TEXT_PRIMARY,
            };
            ui.label(RichText::new(status.to_string()).size(18.0).strong().color(color));

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Step {} of {}", self.game.current_step(), self.game.len() - 1))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Jump buttons plus the order toggle
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let mut jump = None;
        let mut toggle = false;

        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    toggle = ui.button(self.order.label()).clicked();
                });
            });
            ui.add_space(6.0);

            ScrollArea::vertical().show(ui, |ui| {
                for descriptor in self.order.apply(self.game.move_list()) {
                    let text = if descriptor.is_current {
                        RichText::new(&descriptor.label).strong().color(CURRENT_STEP)
                    } else {
                        RichText::new(&descriptor.label).color(TEXT_PRIMARY)
                    };
                    if ui.button(text).clicked() {
                        jump = Some(descriptor.step);
                    }
                }
            });
        });

        if toggle {
            self.toggle_order();
        }
        if let Some(step) = jump {
            self.jump(step);
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let game_over = self.game.is_over();
            let clicked = self.board_view.show(ui, self.game.current(), game_over);

            if let Some(index) = clicked {
                self.click_cell(index);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle, back, forward) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::O),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });

        if new_game {
            self.new_game();
        }
        if toggle {
            self.toggle_order();
        }
        if back {
            self.step_back();
        }
        if forward {
            self.step_forward();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_rejected_click_is_silent() {
        let mut app = TicTacToeApp::default();
        app.click_cell(4);
        app.click_cell(4);
        app.click_cell(42);

        assert_eq!(app.game().len(), 2);
        assert_eq!(app.game().next_player(), Player::O);
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut app = TicTacToeApp::default();
        app.click_cell(0);
        app.jump(7);
        assert_eq!(app.game().current_step(), 1);

        app.jump(0);
        assert_eq!(app.game().current_step(), 0);
    }

    #[test]
    fn test_arrow_steps_stop_at_history_ends() {
        let mut app = TicTacToeApp::default();
        app.click_cell(4);

        app.step_forward();
        assert_eq!(app.game().current_step(), 1);

        app.step_back();
        app.step_back();
        assert_eq!(app.game().current_step(), 0);
        assert_eq!(app.game().len(), 2);

        app.step_forward();
        assert_eq!(app.game().current_step(), 1);
    }

    #[test]
    fn test_new_game_resets_history_but_keeps_order() {
        let mut app = TicTacToeApp::with_order(MoveOrder::Descending);
        app.click_cell(0);
        app.click_cell(1);
        app.new_game();

        assert_eq!(app.game(), &Game::new());
        assert_eq!(app.order(), MoveOrder::Descending);
    }

    #[test]
    fn test_toggle_order_does_not_touch_game() {
        let mut app = TicTacToeApp::default();
        app.click_cell(0);
        let before = app.game().clone();

        app.toggle_order();
        assert_eq!(app.order(), MoveOrder::Descending);
        assert_eq!(app.game(), &before);
    }
}
