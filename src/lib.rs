mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use controllers::cli::headless::{HeadlessController, HeadlessRun};
pub use controllers::interactive::config::{
    DEFAULT_STEP_DELAY, DEFAULT_TILE_SIDE, MAX_STEP_DELAY, MAX_TILE_SIDE, MIN_STEP_DELAY,
    MIN_TILE_SIDE, validate_step_delay, validate_tile_side,
};
pub use controllers::interactive::{
    ConfigError, ControllerConfig, FrameData, MazeController, MazeControllerPresenterPort,
    RenderError, RenderEvent,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::rasterize_frame::rasterize_frame;
pub use crate::core::data::colour::{Colour, MazePalette};
pub use crate::core::data::direction::Direction;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::tile::{Tile, TileType};
pub use crate::core::data::tile_grid::{Position, TileGrid};
pub use crate::core::maze::{Maze, MazeError, MazePhase, MazeSnapshot, TileView};
pub use crate::core::util::grid_layout::{GridLayout, Viewport, calculate_grid_layout};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
