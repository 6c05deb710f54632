// PDK Manager - gui.rs
//
// Top-level eframe::App implementation.
// Lays out the console (left) and controls column (right), then runs the
// actions the panels queued during this frame.

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::ui;

/// The PDK Manager application.
pub struct PdkManagerApp {
    pub state: AppState,
    dark_mode: bool,
}

impl PdkManagerApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, dark_mode: bool) -> Self {
        Self { state, dark_mode }
    }

    /// Show the native folder picker and queue an import for the choice.
    fn pick_design_folder(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select Design Folder")
            .set_directory(self.state.workspace.root())
            .pick_folder();
        match picked {
            Some(path) => self.state.queue(Action::ImportDesign(path)),
            None => tracing::debug!("Design folder dialog cancelled"),
        }
    }
}

impl eframe::App for PdkManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Import Design\u{2026}").clicked() {
                        self.state.request_design_dialog = true;
                        ui.close_menu();
                    }
                    if ui.button("Refresh PDKs").clicked() {
                        self.state.queue(Action::RefreshPdks);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.state.workspace.root().display().to_string())
                            .weak(),
                    );
                });
            });
        });

        // Right-hand controls and edit pane. Roughly a third of the width,
        // matching the console taking the remaining two thirds.
        egui::SidePanel::right("controls")
            .default_width(ui::theme::CONTROLS_WIDTH)
            .min_width(ui::theme::CONTROLS_MIN_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::controls::render(ui, &mut self.state);
                ui::panels::editor::render(ui, &mut self.state);
            });

        // Console
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::console::render(ui, &mut self.state, self.dark_mode);
        });

        ui::panels::about::render(ctx, &mut self.state);

        // ---- Handle requests raised by panels this frame ----
        if self.state.request_design_dialog {
            self.state.request_design_dialog = false;
            self.pick_design_folder();
        }
        if !self.state.pending_actions.is_empty() {
            self.state.process_pending();
            ctx.request_repaint();
        }
    }
}
