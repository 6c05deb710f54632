// PDK Manager - app/mod.rs
//
// Application layer: state, edit session, action handlers.
// Dependencies: core, platform.
// Must NOT depend on: ui.

pub mod actions;
pub mod editor;
pub mod state;
