// PDK Manager - app/state.rs
//
// Application state management. Holds the workspace, the PDK list and
// selection, the imported design, the edit pane buffer and the console.
// Owned by the eframe::App implementation.

use crate::app::actions::Action;
use crate::app::editor::EditSession;
use crate::core::model::{ConsoleLevel, ConsoleLog};
use crate::core::workspace::Workspace;
use crate::platform::config::AppConfig;
use crate::platform::config::CommandConfig;
use std::path::{Path, PathBuf};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Directory tree being managed.
    pub workspace: Workspace,

    /// External command lines for `make` and the env file.
    pub commands: CommandConfig,

    /// Makefile template placeholder replaced by the design name.
    pub placeholder: String,

    /// PDK names found under `platforms/`, sorted.
    pub pdks: Vec<String>,

    /// Currently selected PDK (None when `platforms/` is empty).
    pub selected_pdk: Option<String>,

    /// Name of the most recently imported design.
    pub imported_design: Option<String>,

    /// File open in the edit pane, if any.
    pub editor: Option<EditSession>,

    /// Lines shown in the console panel.
    pub console: ConsoleLog,

    /// Status message for the status bar.
    pub status_message: String,

    /// Actions queued by panels this frame; drained by gui.rs.
    pub pending_actions: Vec<Action>,

    /// Set by the Import Design button; gui.rs opens the folder picker.
    pub request_design_dialog: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state for `root` and scan it for PDKs.
    pub fn new(root: PathBuf, config: &AppConfig, debug_mode: bool) -> Self {
        let mut state = Self {
            workspace: Workspace::new(root),
            commands: config.commands.clone(),
            placeholder: config.placeholder.clone(),
            pdks: Vec::new(),
            selected_pdk: None,
            imported_design: None,
            editor: None,
            console: ConsoleLog::default(),
            status_message: "Ready.".to_string(),
            pending_actions: Vec::new(),
            request_design_dialog: false,
            show_about: false,
            debug_mode,
        };
        state.dispatch(Action::RefreshPdks);
        state
    }

    /// Queue an action for the next dispatch cycle.
    pub fn queue(&mut self, action: Action) {
        self.pending_actions.push(action);
    }

    /// Run every queued action in order.
    pub fn process_pending(&mut self) {
        let actions = std::mem::take(&mut self.pending_actions);
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Append a line to the console, mirror it to tracing and show it in the
    /// status bar.
    pub fn log(&mut self, level: ConsoleLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            ConsoleLevel::Info => tracing::info!(target: "console", "{message}"),
            ConsoleLevel::Warning => tracing::warn!(target: "console", "{message}"),
            ConsoleLevel::Error => tracing::error!(target: "console", "{message}"),
        }
        self.status_message = message.clone();
        self.console.push(level, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(ConsoleLevel::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(ConsoleLevel::Warning, message);
    }

    /// `path` relative to the workspace root when it lies inside it.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.workspace.root())
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Text for the "Imported Design:" label.
    pub fn imported_design_label(&self) -> String {
        format!(
            "Imported Design: {}",
            self.imported_design.as_deref().unwrap_or("None")
        )
    }
}
