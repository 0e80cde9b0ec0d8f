//! GUI-specific constants for layout and status colors

/// Settings window dimensions
pub const WINDOW_WIDTH: f32 = 480.0;
pub const WINDOW_HEIGHT: f32 = 640.0;
pub const WINDOW_MIN_WIDTH: f32 = 360.0;
pub const WINDOW_MIN_HEIGHT: f32 = 420.0;

/// Layout spacing
pub const PADDING: f32 = 10.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Status colors
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
pub const STATUS_WARN: egui::Color32 = egui::Color32::from_rgb(200, 200, 0);
pub const STATUS_DANGER: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
