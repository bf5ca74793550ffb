use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use maze_animator::{
    ControllerConfig, HeadlessController, Maze, PpmFilePresenter, Viewport, DEFAULT_TILE_SIDE,
    MAX_TILE_SIDE, MIN_TILE_SIDE,
};
use tracing::info;

/// Builds a maze, optionally solves it, and writes the final frame as a PPM image.
#[derive(Parser, Debug)]
#[command(name = "maze_animator", version, about)]
struct Args {
    /// Tile side in pixels.
    #[arg(
        long,
        default_value_t = DEFAULT_TILE_SIDE,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_TILE_SIDE)..=i64::from(MAX_TILE_SIDE))
    )]
    tile_side: u32,

    /// Image width in pixels.
    #[arg(long, default_value_t = 750)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 750)]
    height: u32,

    /// Seed for a reproducible maze.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop once the maze is built.
    #[arg(long)]
    no_solve: bool,

    #[arg(long, default_value = "output/maze.ppm")]
    output: PathBuf,
}

impl Args {
    fn config(&self) -> ControllerConfig {
        ControllerConfig {
            tile_side: self.tile_side,
            step_delay: Duration::ZERO,
            viewport: Viewport {
                width: self.width,
                height: self.height,
            },
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let maze = args.seed.map_or_else(Maze::new, Maze::with_seed);
    let mut controller = HeadlessController::new(PpmFilePresenter::new(), maze);

    let summary = controller.generate(&args.config(), !args.no_solve)?;
    info!(
        columns = summary.columns,
        rows = summary.rows,
        steps = summary.steps,
        solution_length = summary.solution_length,
        "maze rendered"
    );

    controller.write(&args.output)?;
    info!(path = %args.output.display(), "frame written");

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    run(&args)
}
