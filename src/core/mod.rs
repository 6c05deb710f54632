// PDK Manager - core/mod.rs
//
// Core layer: data types, workspace layout, Makefile templating.
// No filesystem or process access.
// Must NOT depend on: ui, platform, app.

pub mod makefile;
pub mod model;
pub mod workspace;
