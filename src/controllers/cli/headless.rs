use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::interactive::config::ControllerConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::rasterize_frame::rasterize_frame;
use crate::core::data::colour::MazePalette;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::maze::Maze;
use crate::core::util::grid_layout::calculate_grid_layout;

/// Outcome of one headless run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HeadlessRun {
    pub columns: usize,
    pub rows: usize,
    pub steps: u64,
    pub solution_length: usize,
}

/// Builds a maze without a worker thread or step delay and renders the last
/// frame through a [`FilePresenterPort`].
pub struct HeadlessController<P: FilePresenterPort> {
    presenter: P,
    maze: Maze,
    palette: MazePalette,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> HeadlessController<P> {
    pub fn new(presenter: P, maze: Maze) -> Self {
        Self {
            presenter,
            maze,
            palette: MazePalette::default(),
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        config: &ControllerConfig,
        solve: bool,
    ) -> Result<HeadlessRun, Box<dyn std::error::Error>> {
        config.validate()?;

        let layout = calculate_grid_layout(config.viewport, config.tile_side);
        self.maze.restart(layout.columns, layout.rows)?;

        info!(
            columns = layout.columns,
            rows = layout.rows,
            tile_side = layout.tile_side,
            solve,
            "generating maze"
        );

        let start = Instant::now();
        let mut steps = 0u64;

        while !self.maze.maze_finished() || (solve && !self.maze.solution_finished()) {
            self.maze.step();
            steps += 1;
        }

        let solution_length = self
            .maze
            .tiles()
            .goal()
            .map_or(0, |goal| self.maze.trace_to_start(goal).len());

        info!(steps, duration = ?start.elapsed(), "maze complete");

        let pixel_rect = PixelRect::from_size(config.viewport.width, config.viewport.height)?;
        self.buffer = Some(rasterize_frame(
            &self.maze.snapshot(),
            &layout,
            true,
            pixel_rect,
            &self.palette,
        )?);

        Ok(HeadlessRun {
            columns: layout.columns,
            rows: layout.rows,
            steps,
            solution_length,
        })
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated frame. Does nothing before [`generate`](Self::generate).
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}
