/// build.rs — PDK Manager build script.
///
/// On Windows targets: embeds assets/icon.ico into the executable so the OS
/// shows the icon in the title bar, taskbar and Explorer.
///
/// On other targets this is a no-op; the icon is set at runtime through
/// eframe's viewport builder.
fn main() {
    println!("cargo:rerun-if-changed=assets/icon.ico");
    println!("cargo:rerun-if-changed=assets/icon.png");

    // CARGO_CFG_TARGET_OS rather than cfg!(target_os) so cross-compiles work.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "windows" {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/icon.ico");
        res.compile().expect(
            "Failed to compile Windows resources (winres). \
             Ensure a C compiler (MSVC or MinGW) is available.",
        );
    }
}
