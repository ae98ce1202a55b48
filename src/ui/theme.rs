//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 240, 230);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 60, 70);
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(200, 55, 60);
pub const O_MARK: Color32 = Color32::from_rgb(45, 100, 190);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 190, 80);

// Functions for colors that can't be const
pub fn hover_preview(base: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), 70)
}

pub fn last_move_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 215, 120, 90)
}

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const MARK_STROKE_WIDTH: f32 = 10.0;
pub const MARK_INSET_RATIO: f32 = 0.22;
pub const WIN_LINE_WIDTH: f32 = 8.0;
