//! GUI input adapter for watching mazes being built and solved.
//!
//! A winit window shows frames through the pixels presenter, with an egui
//! panel for the tile side, the step delay and the Generate, Solve and Cancel
//! commands.

pub mod app;
pub mod commands;
pub mod events;
pub mod ui_state;
