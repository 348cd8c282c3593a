//! Board rendering for the tic-tac-toe GUI

use crate::board::{Cell, Pos, BOARD_SIZE};
use crate::game::HistoryEntry;
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render `entry` and return the clicked cell index, if any.
    ///
    /// Clicks on occupied cells are still reported; the game decides
    /// whether the move is accepted.
    pub fn show(&mut self, ui: &mut egui::Ui, entry: &HistoryEntry, game_over: bool) -> Option<usize> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y).max(120.0) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        self.draw_winning_cells(&painter, entry);
        self.draw_grid(&painter);
        self.draw_marks(&painter, entry);

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));

        if !game_over {
            if let Some(pos) = hovered {
                if entry.board().is_empty(pos) {
                    painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::same(4), hover_valid());
                }
            }
        }

        if response.clicked() {
            hovered.map(Pos::to_index)
        } else {
            None
        }
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let span = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment([origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)], stroke);

            // Horizontal line
            painter.line_segment([origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)], stroke);
        }
    }

    fn draw_winning_cells(&self, painter: &Painter, entry: &HistoryEntry) {
        for pos in Pos::all().filter(|&pos| entry.is_winning_cell(pos)) {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, WIN_CELL_BG);
        }
    }

    fn draw_marks(&self, painter: &Painter, entry: &HistoryEntry) {
        for pos in Pos::all() {
            let highlight = entry.is_winning_cell(pos);
            match entry.board().get(pos) {
                Cell::X => self.draw_x(painter, pos, highlight),
                Cell::O => self.draw_o(painter, pos, highlight),
                Cell::Empty => {}
            }
        }
    }

    fn mark_stroke(&self, highlight: bool, base: egui::Color32) -> Stroke {
        let color = if highlight { WIN_HIGHLIGHT } else { base };
        Stroke::new(self.cell_size * MARK_STROKE_RATIO, color)
    }

    fn draw_x(&self, painter: &Painter, pos: Pos, highlight: bool) {
        let center = self.board_to_screen(pos);
        let r = self.cell_size * MARK_SIZE_RATIO;
        let stroke = self.mark_stroke(highlight, X_MARK);

        painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
        painter.line_segment([center + Vec2::new(-r, r), center + Vec2::new(r, -r)], stroke);
    }

    fn draw_o(&self, painter: &Painter, pos: Pos, highlight: bool) {
        let center = self.board_to_screen(pos);
        let r = self.cell_size * MARK_SIZE_RATIO;
        painter.circle_stroke(center, r, self.mark_stroke(highlight, O_MARK));
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::splat(BOARD_MARGIN)
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(300.0 + 2.0 * BOARD_MARGIN)),
        }
    }

    #[test]
    fn test_screen_round_trip_on_cell_centers() {
        let view = view();
        for pos in Pos::all() {
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_margin_is_outside_board() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(1.0, 1.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(BOARD_MARGIN + 310.0, 50.0)), None);
    }
}
