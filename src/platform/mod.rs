// PDK Manager - platform/mod.rs
//
// Platform abstraction layer: config files, filesystem, subprocesses.
// Dependencies: standard library, directories, walkdir.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod fs;
pub mod process;
