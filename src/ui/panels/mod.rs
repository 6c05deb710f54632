// PDK Manager - ui/panels/mod.rs

pub mod about;
pub mod console;
pub mod controls;
pub mod editor;
