// PDK Manager - util/constants.rs
//
// Single source of truth for named constants, file names and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PDK Manager";

/// Application identifier used for config directories.
pub const APP_ID: &str = "PdkManager";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Workspace layout
// =============================================================================

/// Folder whose subdirectories are the selectable PDKs.
pub const PLATFORMS_DIR: &str = "platforms";

/// Source tree that receives a copy of every imported design.
pub const DESIGNS_SRC_DIR: &str = "designs/src";

/// Template copied to `config.mk`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = "defaultConfig.txt";

/// Template copied to `constraints.sdk`.
pub const DEFAULT_CONSTRAINTS_TEMPLATE: &str = "defaultConstraints.txt";

/// Template the generated Makefile is rendered from.
pub const DEFAULT_MAKEFILE_TEMPLATE: &str = "defaultMakefile.txt";

/// Generated Makefile name.
pub const MAKEFILE_NAME: &str = "Makefile";

/// Editable platform config file.
pub const CONFIG_MK: &str = "config.mk";

/// Editable platform constraints file.
pub const CONSTRAINTS_SDK: &str = "constraints.sdk";

/// String in the Makefile template replaced by the imported design name.
pub const DEFAULT_DESIGN_PLACEHOLDER: &str = "nandgate";

// =============================================================================
// External commands
// =============================================================================

/// Terminal launcher; `make` and a trailing interactive shell run inside it.
pub const DEFAULT_TERMINAL_COMMAND: &[&str] = &["gnome-terminal", "--"];

/// Build tool invoked inside the terminal.
pub const DEFAULT_MAKE_COMMAND: &str = "make";

/// Shell used for sourcing the environment file and wrapping `make`.
pub const DEFAULT_SHELL: &str = "bash";

/// Environment file sourced by the "Source .env" action.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Marker echoed after a successful source so the output is never empty.
pub const ENV_SOURCED_MARKER: &str = "Env sourced";

// =============================================================================
// UI
// =============================================================================

/// Maximum number of console lines retained. Oldest lines are dropped first.
pub const MAX_CONSOLE_LINES: usize = 5_000;

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
