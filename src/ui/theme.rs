// PDK Manager - ui/theme.rs
//
// Colour scheme, console colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::ConsoleLevel;
use egui::{Color32, Stroke, TextStyle};

/// Window and panel background in dark mode.
pub const DARK_BG: Color32 = Color32::from_rgb(0x2e, 0x2e, 0x2e);
/// Button fill in dark mode.
pub const DARK_BUTTON: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
/// Button fill under the pointer in dark mode.
pub const DARK_BUTTON_HOVER: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
/// Button border in dark mode.
pub const DARK_BUTTON_BORDER: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);

/// Layout constants.
pub const CONTROLS_WIDTH: f32 = 340.0;
pub const CONTROLS_MIN_WIDTH: f32 = 260.0;
pub const EDITOR_ROWS: usize = 18;
pub const BUTTON_HEIGHT: f32 = 26.0;

/// Install visuals and text sizes for the whole context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    let mut visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    if dark_mode {
        visuals.panel_fill = DARK_BG;
        visuals.window_fill = DARK_BG;
        visuals.override_text_color = Some(Color32::WHITE);
        visuals.widgets.inactive.weak_bg_fill = DARK_BUTTON;
        visuals.widgets.inactive.bg_fill = DARK_BUTTON;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, DARK_BUTTON_BORDER);
        visuals.widgets.hovered.weak_bg_fill = DARK_BUTTON_HOVER;
        visuals.widgets.hovered.bg_fill = DARK_BUTTON_HOVER;
    }
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                TextStyle::Heading => font_size * 1.4,
                TextStyle::Small => font_size * 0.8,
                _ => font_size,
            };
        }
    });
}

/// Text colour for a console line.
pub fn console_colour(level: ConsoleLevel, dark_mode: bool) -> Color32 {
    match (level, dark_mode) {
        (ConsoleLevel::Info, true) => Color32::from_rgb(229, 231, 235), // Gray 200
        (ConsoleLevel::Info, false) => Color32::from_rgb(31, 41, 55),   // Gray 800
        (ConsoleLevel::Warning, _) => Color32::from_rgb(217, 119, 6),   // Amber 600
        (ConsoleLevel::Error, _) => Color32::from_rgb(220, 38, 38),     // Red 600
    }
}

/// Colour of the console timestamp column.
pub fn timestamp_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(107, 114, 128) // Gray 500
    } else {
        Color32::from_rgb(156, 163, 175) // Gray 400
    }
}
