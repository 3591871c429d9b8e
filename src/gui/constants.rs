//! GUI-specific constants for layout, colors and card sizes

use egui;

pub const APP_ID: &str = "portfolio-showcase";

/// Window dimensions
pub const WINDOW_MIN_WIDTH: f32 = 640.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

/// Layout spacing
pub const PADDING: f32 = 10.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Cards and orbs
pub const CARD_WIDTH: f32 = 300.0;
pub const ORB_WIDTH: f32 = 150.0;
pub const CARD_MARGIN: i8 = 12;
pub const MODAL_WIDTH: f32 = 560.0;

/// Colors
pub const ACCENT_FALLBACK: egui::Color32 = egui::Color32::from_rgb(0xC4, 0xA7, 0x7D);
pub const HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(0xE8, 0xC5, 0x47);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(0x9A, 0x8F, 0x80);
pub const STATUS_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 170, 90);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 60, 60);
pub const STATUS_PENDING: egui::Color32 = egui::Color32::from_rgb(200, 170, 0);

/// Stroke widths
pub const STROKE_NORMAL: f32 = 1.0;
pub const STROKE_ACTIVE: f32 = 3.0;

/// Parse a `#RRGGBB` accent token
pub fn accent_color(hex: &str) -> egui::Color32 {
    egui::Color32::from_hex(hex).unwrap_or(ACCENT_FALLBACK)
}
