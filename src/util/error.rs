// PDK Manager - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant carries the path or command it concerns so a console line
// built from `Display` is actionable on its own.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all PDK Manager operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum PdkManagerError {
    /// Workspace layout or design import failed.
    Workspace(WorkspaceError),

    /// Loading or saving the edit pane failed.
    Editor(EditorError),

    /// Rendering the Makefile or copying a template failed.
    Template(TemplateError),

    /// Launching an external command failed.
    Process(ProcessError),

    /// Configuration loading failed.
    Config(ConfigError),
}

impl fmt::Display for PdkManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workspace(e) => write!(f, "{e}"),
            Self::Editor(e) => write!(f, "{e}"),
            Self::Template(e) => write!(f, "{e}"),
            Self::Process(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for PdkManagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Workspace(e) => Some(e),
            Self::Editor(e) => Some(e),
            Self::Template(e) => Some(e),
            Self::Process(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Workspace errors
// ---------------------------------------------------------------------------

/// Errors related to the workspace layout and design import.
#[derive(Debug)]
pub enum WorkspaceError {
    /// An action needs a PDK but the dropdown is empty.
    NoPdkSelected,

    /// The selected PDK directory no longer exists.
    PdkNotFound { pdk: String, path: PathBuf },

    /// The chosen design folder has no usable base name (e.g. `/` or `..`).
    InvalidDesignName { path: PathBuf },

    /// The chosen design source is not a directory.
    SourceNotADirectory { path: PathBuf },

    /// Listing a directory failed.
    ReadDir { path: PathBuf, source: io::Error },

    /// Creating a destination directory failed.
    CreateDir { path: PathBuf, source: io::Error },

    /// Copying a single file failed.
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// The destination lies inside the tree being copied.
    CopyIntoSelf { from: PathBuf, to: PathBuf },

    /// Walking the design tree failed.
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPdkSelected => write!(f, "No PDK selected"),
            Self::PdkNotFound { pdk, path } => {
                write!(f, "PDK '{pdk}' not found at '{}'", path.display())
            }
            Self::InvalidDesignName { path } => write!(
                f,
                "Cannot derive a design name from '{}'",
                path.display()
            ),
            Self::SourceNotADirectory { path } => {
                write!(f, "Design source '{}' is not a directory", path.display())
            }
            Self::ReadDir { path, source } => {
                write!(f, "Cannot list '{}': {source}", path.display())
            }
            Self::CreateDir { path, source } => {
                write!(f, "Cannot create directory '{}': {source}", path.display())
            }
            Self::Copy { from, to, source } => write!(
                f,
                "Cannot copy '{}' to '{}': {source}",
                from.display(),
                to.display()
            ),
            Self::CopyIntoSelf { from, to } => write!(
                f,
                "Refusing to copy '{}' into its own subdirectory '{}'",
                from.display(),
                to.display()
            ),
            Self::Traversal { path, source } => {
                write!(f, "Error traversing '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadDir { source, .. } => Some(source),
            Self::CreateDir { source, .. } => Some(source),
            Self::Copy { source, .. } => Some(source),
            Self::Traversal { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<WorkspaceError> for PdkManagerError {
    fn from(e: WorkspaceError) -> Self {
        Self::Workspace(e)
    }
}

// ---------------------------------------------------------------------------
// Editor errors
// ---------------------------------------------------------------------------

/// Errors related to the edit pane.
#[derive(Debug)]
pub enum EditorError {
    /// The file requested for editing does not exist.
    FileMissing { path: PathBuf },

    /// Save was requested with no file open.
    NothingToSave,

    /// Reading the file into the pane failed.
    Read { path: PathBuf, source: io::Error },

    /// Writing the pane back to disk failed.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileMissing { path } => {
                write!(f, "'{}' does not exist", path.display())
            }
            Self::NothingToSave => write!(f, "No file is open for editing"),
            Self::Read { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Cannot write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<EditorError> for PdkManagerError {
    fn from(e: EditorError) -> Self {
        Self::Editor(e)
    }
}

// ---------------------------------------------------------------------------
// Template errors
// ---------------------------------------------------------------------------

/// Errors related to template files and Makefile generation.
#[derive(Debug)]
pub enum TemplateError {
    /// `set_makefile` was requested before any design was imported.
    NoDesignImported,

    /// A template file is missing from the workspace root.
    Missing { path: PathBuf },

    /// Reading a template failed.
    Read { path: PathBuf, source: io::Error },

    /// Writing the rendered output failed.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDesignImported => write!(f, "No design has been imported yet."),
            Self::Missing { path } => {
                write!(f, "Template '{}' does not exist", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Cannot read template '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Cannot write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::NoDesignImported | Self::Missing { .. } => None,
        }
    }
}

impl From<TemplateError> for PdkManagerError {
    fn from(e: TemplateError) -> Self {
        Self::Template(e)
    }
}

// ---------------------------------------------------------------------------
// Process errors
// ---------------------------------------------------------------------------

/// Errors related to external commands.
#[derive(Debug)]
pub enum ProcessError {
    /// A configured command line has no program.
    EmptyCommand { purpose: &'static str },

    /// The program could not be started.
    Spawn { program: String, source: io::Error },

    /// The program ran but exited unsuccessfully.
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCommand { purpose } => {
                write!(f, "No command configured for {purpose}")
            }
            Self::Spawn { program, source } => {
                write!(f, "Failed to start '{program}': {source}")
            }
            Self::Failed {
                program,
                code,
                stderr,
            } => match code {
                Some(code) => write!(f, "'{program}' exited with code {code}: {stderr}"),
                None => write!(f, "'{program}' was terminated by a signal: {stderr}"),
            },
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ProcessError> for PdkManagerError {
    fn from(e: ProcessError) -> Self {
        Self::Process(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading the config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for PdkManagerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for PDK Manager results.
pub type Result<T> = std::result::Result<T, PdkManagerError>;
