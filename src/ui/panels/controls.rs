// PDK Manager - ui/panels/controls.rs
//
// Right-hand button column: PDK selector, imported-design label, import,
// edit/reset pairs for config.mk and constraints.sdk, Makefile and make.
//
// This panel only queues `Action`s and raises `request_design_dialog`;
// gui.rs performs them after the frame is laid out.

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::core::model::EditableFile;
use crate::ui::theme::BUTTON_HEIGHT;

/// Render the controls column.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let width = ui.available_width();

    // PDK selector and refresh on one row.
    ui.horizontal(|ui| {
        ui.label("Select PDK:");
        let selected_text = state.selected_pdk.clone().unwrap_or_default();
        let mut chosen: Option<String> = None;
        egui::ComboBox::from_id_salt("pdk_combo")
            .selected_text(selected_text)
            .width(ui.available_width() - 40.0)
            .show_ui(ui, |ui| {
                for pdk in &state.pdks {
                    let is_selected = state.selected_pdk.as_ref() == Some(pdk);
                    if ui.selectable_label(is_selected, pdk.as_str()).clicked() {
                        chosen = Some(pdk.clone());
                    }
                }
            });
        if let Some(pdk) = chosen {
            state.queue(Action::SelectPdk(pdk));
        }
        if ui
            .button("\u{21bb}")
            .on_hover_text("Re-read the platforms folder")
            .clicked()
        {
            state.queue(Action::RefreshPdks);
        }
    });

    ui.add_space(4.0);
    ui.label(state.imported_design_label());
    ui.add_space(4.0);

    if sized_button(ui, width, "Import Design").clicked() {
        state.request_design_dialog = true;
    }

    for file in EditableFile::ALL {
        ui.horizontal(|ui| {
            let half = (width - ui.spacing().item_spacing.x) / 2.0;
            if sized_button(ui, half, &format!("Edit {file}")).clicked() {
                state.queue(Action::EditFile(file));
            }
            if sized_button(ui, half, &format!("Reset {file}")).clicked() {
                state.queue(Action::ResetFile(file));
            }
        });
    }

    ui.add_space(4.0);
    if sized_button(ui, width, "Set Makefile").clicked() {
        state.queue(Action::SetMakefile);
    }
    if sized_button(ui, width, "Run Make").clicked() {
        state.queue(Action::RunMake);
    }
    let env_label = format!("Source {}", state.commands.env_file);
    if sized_button(ui, width, &env_label).clicked() {
        state.queue(Action::SourceEnv);
    }
}

fn sized_button(ui: &mut egui::Ui, width: f32, label: &str) -> egui::Response {
    ui.add_sized([width, BUTTON_HEIGHT], egui::Button::new(label))
}
