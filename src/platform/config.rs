// PDK Manager - platform/config.rs
//
// Platform-specific config directory resolution and config.toml loading
// with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for PDK Manager configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/pdkmanager/).
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub workspace: WorkspaceSection,
    pub commands: CommandsSection,
    pub ui: UiSection,
    pub logging: LoggingSection,
}

/// `[workspace]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct WorkspaceSection {
    /// Directory containing `platforms/`, `designs/` and the templates.
    pub root: Option<PathBuf>,
    /// String in defaultMakefile.txt replaced by the design name.
    pub placeholder: Option<String>,
}

/// `[commands]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CommandsSection {
    /// Terminal launcher argv, e.g. `["gnome-terminal", "--"]`.
    pub terminal: Option<Vec<String>>,
    /// Build command run inside the terminal.
    pub make: Option<String>,
    /// Shell used to wrap `make` and source the env file.
    pub shell: Option<String>,
    /// Environment file, relative to the workspace root.
    pub env_file: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// External commands after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    pub terminal: Vec<String>,
    pub make: String,
    pub shell: String,
    pub env_file: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            terminal: constants::DEFAULT_TERMINAL_COMMAND
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            make: constants::DEFAULT_MAKE_COMMAND.to_owned(),
            shell: constants::DEFAULT_SHELL.to_owned(),
            env_file: constants::DEFAULT_ENV_FILE.to_owned(),
        }
    }
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Workspace root; `None` means "use the current directory".
    pub workspace_root: Option<PathBuf>,
    /// Makefile template placeholder.
    pub placeholder: String,
    pub commands: CommandConfig,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace_root: None,
            placeholder: constants::DEFAULT_DESIGN_PLACEHOLDER.to_owned(),
            commands: CommandConfig::default(),
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

/// Read and parse `path` without validating values.
pub fn read_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate config.toml at `config_path`.
///
/// Returns the validated config and a list of non-fatal warnings. A missing
/// file is the normal first-run case and yields defaults with no warnings;
/// an unreadable or unparseable file yields defaults plus a warning so the
/// application still starts.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(config_path) {
        Ok(raw) => raw,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, value_warnings) = validate(raw);
    warnings.extend(value_warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

/// Validate each field of `raw`, accumulating a warning for every rejected value.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Workspace --
    if let Some(root) = raw.workspace.root {
        if root.as_os_str().is_empty() {
            warnings.push(
                "[workspace] root is empty. Using the current directory.".to_string(),
            );
        } else {
            config.workspace_root = Some(root);
        }
    }

    if let Some(placeholder) = raw.workspace.placeholder {
        if placeholder.trim().is_empty() {
            warnings.push(format!(
                "[workspace] placeholder is empty. Using default (\"{}\").",
                constants::DEFAULT_DESIGN_PLACEHOLDER
            ));
        } else {
            config.placeholder = placeholder;
        }
    }

    // -- Commands --
    if let Some(terminal) = raw.commands.terminal {
        if terminal.first().map_or(true, |p| p.trim().is_empty()) {
            warnings.push(format!(
                "[commands] terminal has no program. Using default ({}).",
                constants::DEFAULT_TERMINAL_COMMAND.join(" ")
            ));
        } else {
            config.commands.terminal = terminal;
        }
    }

    set_command(
        "make",
        raw.commands.make,
        constants::DEFAULT_MAKE_COMMAND,
        &mut config.commands.make,
        &mut warnings,
    );
    set_command(
        "shell",
        raw.commands.shell,
        constants::DEFAULT_SHELL,
        &mut config.commands.shell,
        &mut warnings,
    );
    set_command(
        "env_file",
        raw.commands.env_file,
        constants::DEFAULT_ENV_FILE,
        &mut config.commands.env_file,
        &mut warnings,
    );

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

/// Apply a `[commands]` string if it is non-blank, otherwise warn.
fn set_command(
    field: &str,
    value: Option<String>,
    default: &str,
    out: &mut String,
    warnings: &mut Vec<String>,
) {
    if let Some(v) = value {
        if v.trim().is_empty() {
            warnings.push(format!(
                "[commands] {field} is empty. Using default (\"{default}\")."
            ));
        } else {
            *out = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_missing_config_uses_defaults_silently() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert!(warnings.is_empty());
        assert_eq!(config.placeholder, "nandgate");
        assert_eq!(config.commands, CommandConfig::default());
        assert!(config.dark_mode);
        assert!(config.workspace_root.is_none());
    }

    #[test]
    fn test_full_config_is_applied() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[workspace]
root = "/opt/flow"
placeholder = "DESIGN"

[commands]
terminal = ["konsole", "-e"]
make = "make -j4"
shell = "zsh"
env_file = "setup.sh"

[ui]
theme = "Light"
font_size = 16.0

[logging]
level = "DEBUG"
"#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.workspace_root, Some(PathBuf::from("/opt/flow")));
        assert_eq!(config.placeholder, "DESIGN");
        assert_eq!(config.commands.terminal, vec!["konsole", "-e"]);
        assert_eq!(config.commands.make, "make -j4");
        assert_eq!(config.commands.shell, "zsh");
        assert_eq!(config.commands.env_file, "setup.sh");
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_warn_and_fall_back() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[workspace]
placeholder = "  "

[commands]
terminal = []
make = ""

[ui]
theme = "solarized"
font_size = 99.0

[logging]
level = "loud"
"#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 6, "warnings: {warnings:?}");
        assert_eq!(config.placeholder, "nandgate");
        assert_eq!(config.commands, CommandConfig::default());
        assert!(config.dark_mode);
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_unparseable_config_warns_with_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[ui\ntheme = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("config.toml"), "{}", warnings[0]);
        assert_eq!(config.placeholder, "nandgate");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[future]\nflag = true\n[ui]\ntheme = \"dark\"\n");
        let (_, warnings) = load_config(&path);
        assert!(warnings.is_empty());
    }
}
