//! Interactive controller for animated maze generation.
//!
//! This module provides the application layer for the maze animation: a worker
//! thread that steps the maze at a configurable cadence while UI threads issue
//! restart, solve, clear and finish requests.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: command methods on [`MazeController`]
//! - **Output**: [`MazeControllerPresenterPort`] receiving one [`RenderEvent`] per frame
//! - **Core**: the [`Maze`](crate::core::maze::Maze) state machine from `core/`

pub mod config;
mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use config::{ConfigError, ControllerConfig};
pub use controller::MazeController;
pub use data::frame_data::FrameData;
pub use errors::render::RenderError;
pub use events::render::RenderEvent;
pub use ports::presenter::MazeControllerPresenterPort;
