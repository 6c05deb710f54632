// PDK Manager - ui/panels/editor.rs
//
// Edit pane shown under the controls while a platform file is open.
// Hidden entirely when `state.editor` is None.

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::ui::theme::{BUTTON_HEIGHT, EDITOR_ROWS};

/// Render the edit pane, if a file is open.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let heading = match &state.editor {
        Some(session) => {
            let marker = if session.is_dirty() { " \u{25cf}" } else { "" };
            format!("{} ({}){marker}", session.file, session.pdk)
        }
        None => return,
    };

    ui.add_space(6.0);
    ui.separator();
    ui.strong(heading);

    let mut save = false;
    let mut close = false;
    if let Some(session) = state.editor.as_mut() {
        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .max_height(ui.available_height() - BUTTON_HEIGHT - 12.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut session.text)
                        .code_editor()
                        .desired_rows(EDITOR_ROWS)
                        .desired_width(f32::INFINITY),
                );
            });

        ui.horizontal(|ui| {
            save = ui
                .add_sized([90.0, BUTTON_HEIGHT], egui::Button::new("Save File"))
                .clicked();
            close = ui
                .add_sized([90.0, BUTTON_HEIGHT], egui::Button::new("Close"))
                .on_hover_text("Hide the editor without saving")
                .clicked();
        });
    }

    if save {
        state.queue(Action::SaveFile);
    } else if close {
        state.queue(Action::CloseEditor);
    }
}
