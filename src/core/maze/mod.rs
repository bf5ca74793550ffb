//! Stepwise maze construction and solving.
//!
//! [`Maze`] carves a perfect maze with a randomized depth-first search and then
//! animates the unique path from the entrance to the exit. Every call to
//! [`Maze::step`] performs one unit of animation work, so callers can paint the
//! grid between steps.

pub mod errors;
mod algorithm;
pub mod snapshot;

pub use errors::MazeError;
pub use algorithm::{Maze, MazePhase};
pub use snapshot::{MazeSnapshot, TileView};
