// PDK Manager - app/actions.rs
//
// One handler per button. Each handler performs its filesystem or process
// call synchronously and reports through the console. Handlers return typed
// errors; `dispatch` turns them into console lines so nothing ever panics
// out of the UI loop.

use crate::app::editor::EditSession;
use crate::app::state::AppState;
use crate::core::makefile;
use crate::core::model::{ConsoleLevel, EditableFile};
use crate::core::workspace;
use crate::platform::{fs, process};
use crate::util::error::{
    EditorError, PdkManagerError, ProcessError, Result, TemplateError, WorkspaceError,
};
use std::path::{Path, PathBuf};

/// A user request raised by a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Re-read `platforms/` into the dropdown.
    RefreshPdks,
    /// Dropdown selection changed.
    SelectPdk(String),
    /// Copy the chosen folder into both trees and add the templates.
    ImportDesign(PathBuf),
    /// Open a platform file in the edit pane.
    EditFile(EditableFile),
    /// Write the edit pane back to its file.
    SaveFile,
    /// Hide the edit pane without saving.
    CloseEditor,
    /// Overwrite a platform file with its template.
    ResetFile(EditableFile),
    /// Render `Makefile` from `defaultMakefile.txt`.
    SetMakefile,
    /// Open a terminal running `make`.
    RunMake,
    /// Source the environment file in a shell.
    SourceEnv,
    /// Empty the console panel.
    ClearConsole,
}

impl Action {
    /// Short name used as the prefix of failure messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::RefreshPdks => "Refresh PDKs",
            Self::SelectPdk(_) => "Select PDK",
            Self::ImportDesign(_) => "Import design",
            Self::EditFile(_) => "Edit file",
            Self::SaveFile => "Save file",
            Self::CloseEditor => "Close editor",
            Self::ResetFile(_) => "Reset file",
            Self::SetMakefile => "Set Makefile",
            Self::RunMake => "Run make",
            Self::SourceEnv => "Source env",
            Self::ClearConsole => "Clear console",
        }
    }
}

/// Console level for a failed action. Missing prerequisites are warnings;
/// I/O and process failures are errors.
fn failure_level(err: &PdkManagerError) -> ConsoleLevel {
    match err {
        PdkManagerError::Workspace(WorkspaceError::NoPdkSelected)
        | PdkManagerError::Editor(EditorError::FileMissing { .. })
        | PdkManagerError::Editor(EditorError::NothingToSave)
        | PdkManagerError::Template(TemplateError::NoDesignImported) => ConsoleLevel::Warning,
        _ => ConsoleLevel::Error,
    }
}

impl AppState {
    /// Run `action`, logging any failure to the console.
    pub fn dispatch(&mut self, action: Action) {
        let label = action.label();
        tracing::debug!(action = ?action, "Dispatching");

        let result = match action {
            Action::RefreshPdks => self.refresh_pdks(),
            Action::SelectPdk(pdk) => {
                self.select_pdk(pdk);
                Ok(())
            }
            Action::ImportDesign(source) => self.import_design(&source).map(|_| ()),
            Action::EditFile(file) => self.edit_file(file),
            Action::SaveFile => self.save_file(),
            Action::CloseEditor => {
                self.close_editor();
                Ok(())
            }
            Action::ResetFile(file) => self.reset_file(file),
            Action::SetMakefile => self.set_makefile(),
            Action::RunMake => self.run_make(),
            Action::SourceEnv => self.source_env(),
            Action::ClearConsole => {
                self.console.clear();
                self.status_message = "Console cleared.".to_string();
                Ok(())
            }
        };

        if let Err(e) = result {
            let level = failure_level(&e);
            let message = match level {
                ConsoleLevel::Warning => e.to_string(),
                _ => format!("{label} failed: {e}"),
            };
            self.log(level, message);
        }
    }

    // -------------------------------------------------------------------------
    // PDK selection
    // -------------------------------------------------------------------------

    /// Reload the PDK list, keeping the current selection when it still exists.
    pub fn refresh_pdks(&mut self) -> Result<()> {
        let platforms = self.workspace.platforms_dir();
        let pdks = fs::list_subdirs(&platforms)?;

        let keep = self
            .selected_pdk
            .as_ref()
            .is_some_and(|current| pdks.contains(current));
        if !keep {
            self.selected_pdk = pdks.first().cloned();
        }
        self.pdks = pdks;

        if self.pdks.is_empty() {
            self.warn(format!(
                "No PDKs found in {}",
                self.display_path(&platforms)
            ));
        } else {
            self.info(format!(
                "Found {} PDK(s) in {}",
                self.pdks.len(),
                self.display_path(&platforms)
            ));
        }
        Ok(())
    }

    /// Change the selected PDK.
    pub fn select_pdk(&mut self, pdk: String) {
        if self.selected_pdk.as_deref() == Some(pdk.as_str()) {
            return;
        }
        self.info(format!("Selected PDK: {pdk}"));
        if let Some(session) = &self.editor {
            if session.pdk != pdk {
                let msg = format!(
                    "{} is still open from PDK '{}'; saving writes to {}",
                    session.file,
                    session.pdk,
                    self.display_path(&session.path)
                );
                self.warn(msg);
            }
        }
        self.selected_pdk = Some(pdk);
    }

    /// The selected PDK, which must still exist on disk.
    fn require_pdk(&self) -> Result<String> {
        let pdk = self
            .selected_pdk
            .clone()
            .ok_or(WorkspaceError::NoPdkSelected)?;
        let dir = self.workspace.pdk_dir(&pdk);
        if !dir.is_dir() {
            return Err(WorkspaceError::PdkNotFound { pdk, path: dir }.into());
        }
        Ok(pdk)
    }

    fn require_template(&self, path: PathBuf) -> Result<PathBuf> {
        if path.is_file() {
            Ok(path)
        } else {
            Err(TemplateError::Missing { path }.into())
        }
    }

    // -------------------------------------------------------------------------
    // Design import
    // -------------------------------------------------------------------------

    /// Copy `source` into `designs/src/<design>` and
    /// `platforms/<pdk>/<design>`, then drop the default constraints and
    /// config templates into the platform copy.
    ///
    /// Prerequisites are checked before anything is written. A copy failure
    /// part-way leaves the partial tree in place.
    pub fn import_design(&mut self, source: &Path) -> Result<String> {
        let design = workspace::design_name(source)?;
        let pdk = self.require_pdk()?;
        if !source.is_dir() {
            return Err(WorkspaceError::SourceNotADirectory {
                path: source.to_path_buf(),
            }
            .into());
        }
        let constraints_tpl =
            self.require_template(self.workspace.template_path(EditableFile::ConstraintsSdk))?;
        let config_tpl =
            self.require_template(self.workspace.template_path(EditableFile::ConfigMk))?;

        let dest_src = self.workspace.design_src_dir(&design);
        let dest_pdk = self.workspace.design_pdk_dir(&pdk, &design);
        fs::ensure_not_within(&dest_src, source)?;
        fs::ensure_not_within(&dest_pdk, source)?;

        let src_files = fs::copy_dir_all(source, &dest_src)?;
        let pdk_files = fs::copy_dir_all(source, &dest_pdk)?;
        tracing::debug!(design = %design, src_files, pdk_files, "Design trees copied");

        fs::copy_file(
            &constraints_tpl,
            &dest_pdk.join(EditableFile::ConstraintsSdk.file_name()),
        )?;
        fs::copy_file(&config_tpl, &dest_pdk.join(EditableFile::ConfigMk.file_name()))?;

        self.imported_design = Some(design.clone());
        self.info(format!(
            "Imported {design} into {} and {}",
            self.display_path(&dest_pdk),
            self.display_path(&dest_src)
        ));
        Ok(design)
    }

    // -------------------------------------------------------------------------
    // Edit pane
    // -------------------------------------------------------------------------

    /// Load `platforms/<pdk>/<file>` into the edit pane.
    pub fn edit_file(&mut self, file: EditableFile) -> Result<()> {
        let pdk = self
            .selected_pdk
            .clone()
            .ok_or(WorkspaceError::NoPdkSelected)?;
        let path = self.workspace.editable_path(&pdk, file);
        if !path.is_file() {
            return Err(EditorError::FileMissing { path }.into());
        }
        let text = fs::read_text(&path).map_err(|source| EditorError::Read {
            path: path.clone(),
            source,
        })?;

        if let Some(previous) = self.editor.take() {
            if previous.is_dirty() && previous.path != path {
                self.warn(format!(
                    "Discarded unsaved changes to {}",
                    self.display_path(&previous.path)
                ));
            }
        }

        self.info(format!("Editing {}", self.display_path(&path)));
        self.editor = Some(EditSession::new(pdk, file, path, text));
        Ok(())
    }

    /// Write the edit pane to the file it was opened from and close it.
    ///
    /// On failure the pane stays open so no edits are lost.
    pub fn save_file(&mut self) -> Result<()> {
        let mut session = self.editor.take().ok_or(EditorError::NothingToSave)?;

        if let Err(source) = std::fs::write(&session.path, session.text.as_bytes()) {
            let path = session.path.clone();
            self.editor = Some(session);
            return Err(EditorError::Write { path, source }.into());
        }
        session.mark_saved();

        if self.selected_pdk.as_deref() != Some(session.pdk.as_str()) {
            self.warn(format!(
                "Saved to PDK '{}', which is no longer the selected PDK",
                session.pdk
            ));
        }
        self.info(format!("Saved {}", self.display_path(&session.path)));
        Ok(())
    }

    /// Hide the edit pane, discarding unsaved edits.
    pub fn close_editor(&mut self) {
        if let Some(session) = self.editor.take() {
            if session.is_dirty() {
                self.warn(format!(
                    "Closed {} without saving",
                    self.display_path(&session.path)
                ));
            }
        }
    }

    /// Overwrite `platforms/<pdk>/<file>` with its template, reloading the
    /// edit pane if it shows that file.
    pub fn reset_file(&mut self, file: EditableFile) -> Result<()> {
        let pdk = self.require_pdk()?;
        let template = self.require_template(self.workspace.template_path(file))?;
        let target = self.workspace.editable_path(&pdk, file);

        fs::copy_file(&template, &target)?;

        let showing_target = self
            .editor
            .as_ref()
            .is_some_and(|session| session.path == target);
        if showing_target {
            let text = fs::read_text(&target).map_err(|source| EditorError::Read {
                path: target.clone(),
                source,
            })?;
            if let Some(session) = self.editor.as_mut() {
                session.reload(text);
            }
        }

        self.info(format!("Reset {file}"));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Build
    // -------------------------------------------------------------------------

    /// Render `Makefile` from `defaultMakefile.txt` for the imported design.
    pub fn set_makefile(&mut self) -> Result<()> {
        let design = self
            .imported_design
            .clone()
            .ok_or(TemplateError::NoDesignImported)?;

        let template_path = self.workspace.makefile_template_path();
        let template =
            std::fs::read_to_string(&template_path).map_err(|source| TemplateError::Read {
                path: template_path.clone(),
                source,
            })?;

        let rendered = makefile::render(&template, &self.placeholder, &design);
        if rendered.replacements == 0 {
            self.warn(format!(
                "Placeholder '{}' not found in {}",
                self.placeholder,
                self.display_path(&template_path)
            ));
        }

        let out = self.workspace.makefile_path();
        std::fs::write(&out, rendered.contents.as_bytes()).map_err(|source| {
            TemplateError::Write {
                path: out.clone(),
                source,
            }
        })?;

        tracing::debug!(design = %design, replacements = rendered.replacements, "Makefile rendered");
        self.info("Makefile updated");
        Ok(())
    }

    /// Open a terminal in the workspace root running `make`. Fire-and-forget.
    pub fn run_make(&mut self) -> Result<()> {
        let argv = process::make_in_terminal_argv(
            &self.commands.terminal,
            &self.commands.shell,
            &self.commands.make,
        );
        process::spawn_detached(&argv, self.workspace.root(), "make")?;
        self.info("Running make...");
        Ok(())
    }

    /// Source the environment file in an interactive shell and log its output.
    pub fn source_env(&mut self) -> Result<()> {
        let argv = process::source_env_argv(&self.commands.shell, &self.commands.env_file);
        match process::run_captured(&argv, self.workspace.root(), "environment") {
            Ok(output) => {
                self.info(format!(
                    "Sourced {} file successfully: {}",
                    self.commands.env_file,
                    output.stdout.trim()
                ));
                Ok(())
            }
            Err(ProcessError::Failed { stderr, .. }) => {
                self.log(
                    ConsoleLevel::Error,
                    format!(
                        "Failed to source {} file: {}",
                        self.commands.env_file,
                        stderr.trim()
                    ),
                );
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
