// PDK Manager - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Workspace root resolution
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use pdk_manager::app;
pub use pdk_manager::core;
pub use pdk_manager::platform;
pub use pdk_manager::ui;
pub use pdk_manager::util;

use clap::Parser;
use std::path::PathBuf;

/// Compile-time-embedded icon PNG bytes.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails so the
/// application always launches rather than panicking on a bad asset.
fn load_icon() -> egui::IconData {
    use image::ImageDecoder;

    match image::codecs::png::PngDecoder::new(std::io::Cursor::new(ICON_PNG)) {
        Ok(decoder) => {
            let (w, h) = decoder.dimensions();
            match image::DynamicImage::from_decoder(decoder) {
                Ok(img) => egui::IconData {
                    rgba: img.into_rgba8().into_raw(),
                    width: w,
                    height: h,
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
                    placeholder_icon()
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to open icon PNG decoder; using placeholder");
            placeholder_icon()
        }
    }
}

/// 1x1 transparent RGBA icon used when the real icon cannot be loaded.
fn placeholder_icon() -> egui::IconData {
    egui::IconData {
        rgba: vec![0u8; 4],
        width: 1,
        height: 1,
    }
}

/// PDK Manager - import designs into PDK platform trees and run make.
///
/// The workspace root must contain `platforms/` and the default templates
/// (`defaultConfig.txt`, `defaultConstraints.txt`, `defaultMakefile.txt`).
#[derive(Parser, Debug)]
#[command(name = "pdk-manager", version, about)]
struct Cli {
    /// Workspace root (defaults to [workspace] root in config, then the
    /// current directory).
    root: Option<PathBuf>,

    /// Use this config.toml instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists so its [logging] level can apply;
    // warnings are replayed into tracing and the console once both are up.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "PDK Manager starting"
    );

    // Workspace root: CLI > config > current directory
    let root = cli
        .root
        .clone()
        .or_else(|| config.workspace_root.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let root = root.canonicalize().unwrap_or(root);
    tracing::info!(root = %root.display(), "Workspace root resolved");

    let mut state = app::state::AppState::new(root, &config, cli.debug);
    for warning in config_warnings {
        state.warn(warning);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::constants::APP_NAME)
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::PdkManagerApp::new(state, dark_mode)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch PDK Manager GUI: {e}");
        std::process::exit(1);
    }
}
