// PDK Manager - ui/panels/console.rs
//
// Read-only console occupying the left side of the window. Every action
// appends here; the view sticks to the newest line.

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::ui::theme;

/// Render the console (central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState, dark_mode: bool) {
    ui.horizontal(|ui| {
        ui.strong("Console");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let has_lines = !state.console.is_empty();
            if ui
                .add_enabled(has_lines, egui::Button::new("Clear"))
                .clicked()
            {
                state.queue(Action::ClearConsole);
            }
            if ui
                .add_enabled(has_lines, egui::Button::new("Copy"))
                .on_hover_text("Copy the console to the clipboard")
                .clicked()
            {
                ui.ctx().copy_text(state.console.to_text());
            }
        });
    });
    ui.separator();

    let ts_colour = theme::timestamp_colour(dark_mode);
    egui::ScrollArea::vertical()
        .id_salt("console_scroll")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in state.console.lines() {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(line.timestamp.format("%H:%M:%S").to_string())
                            .monospace()
                            .color(ts_colour),
                    );
                    ui.label(
                        egui::RichText::new(&line.message)
                            .monospace()
                            .color(theme::console_colour(line.level, dark_mode)),
                    );
                });
            }
        });
}
