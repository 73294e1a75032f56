//! Colors and sizes for the Gomoku GUI
//!
//! The board is a green felt with black grid lines; Black plays white X
//! marks and White plays white O rings.

use egui::Color32;

pub const FELT: Color32 = Color32::from_rgb(34, 139, 34); // #228B22
pub const GRID: Color32 = Color32::BLACK;
pub const MARK: Color32 = Color32::WHITE;
pub const LAST_MOVE: Color32 = Color32::from_rgb(255, 215, 0);
pub const WIN_LINE: Color32 = Color32::from_rgb(255, 99, 71);

pub const fn ghost_mark() -> Color32 {
    Color32::from_rgba_premultiplied(120, 120, 120, 120)
}

pub const fn refused_cell() -> Color32 {
    Color32::from_rgba_premultiplied(110, 20, 20, 110)
}

// Side panel
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const WARN: Color32 = Color32::from_rgb(255, 180, 50);
pub const ALERT: Color32 = Color32::from_rgb(255, 70, 70);

/// Gap between the board and the panel edge, in points
pub const BOARD_PADDING: f32 = 12.0;
/// Grid stroke width
pub const GRID_WIDTH: f32 = 2.0;
/// Mark stroke width
pub const MARK_WIDTH: f32 = 3.0;
/// Half the extent of an X or the radius of an O, as a share of a cell
pub const MARK_REACH: f32 = 1.0 / 3.0;
