//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 232, 222);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 60, 66);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(200, 70, 60);
pub const O_MARK: Color32 = Color32::from_rgb(50, 100, 190);

// Winning line
pub const WIN_CELL_BG: Color32 = Color32::from_rgb(170, 225, 160);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 170, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const CARD_BG: Color32 = Color32::from_rgb(42, 45, 50);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const CURRENT_STEP: Color32 = Color32::from_rgb(255, 200, 80);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_STROKE_RATIO: f32 = 0.08;
pub const MARK_SIZE_RATIO: f32 = 0.3;
