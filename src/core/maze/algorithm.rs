use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::core::data::direction::Direction;
use crate::core::data::tile::TileType;
use crate::core::data::tile_grid::{Position, TileGrid};
use crate::core::maze::errors::MazeError;
use crate::core::maze::snapshot::{MazeSnapshot, TileView};

/// Coarse progress of a maze, derived from its phase flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazePhase {
    /// No grid yet.
    Idle,
    Building,
    Solving,
    Finished,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
struct PhaseFlags {
    first_build_step: bool,
    maze_finished: bool,
    first_solve_step: bool,
    solution_finished: bool,
    exit_built: bool,
    building_exit: bool,
    solution_exit_built: bool,
}

impl PhaseFlags {
    fn restarted() -> Self {
        Self {
            first_build_step: true,
            maze_finished: false,
            first_solve_step: true,
            solution_finished: false,
            exit_built: false,
            building_exit: false,
            solution_exit_built: false,
        }
    }
}

/// A maze grid together with its build/solve state machine.
///
/// The start tile is the top-left corner. Its parent direction is
/// [`Direction::Up`], which points off the grid: backtracking through it ends
/// the build phase. The exit is carved below the bottom-right tile.
#[derive(Debug)]
pub struct Maze {
    grid: TileGrid,
    cursor: Position,
    phase: PhaseFlags,
    // `None` means the backtrack leaves the grid.
    backtrack_target: Option<Position>,
    // Bottom is the goal tile, top is the start tile.
    solution: Vec<Position>,
    rng: SmallRng,
}

impl Maze {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// A maze whose tile shuffles are reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            grid: TileGrid::empty(),
            cursor: Position::default(),
            phase: PhaseFlags::default(),
            backtrack_target: None,
            solution: Vec::new(),
            rng,
        }
    }

    /// Replaces the grid with a fresh `columns` x `rows` grid of walls and
    /// resets every phase flag. On error the previous grid is kept.
    pub fn restart(&mut self, columns: usize, rows: usize) -> Result<(), MazeError> {
        if columns == 0 || rows == 0 {
            return Err(MazeError::InvalidDimension { columns, rows });
        }

        let mut grid = TileGrid::new(columns, rows, &mut self.rng);
        let start = Position::new(0, 0);

        if let Some(tile) = grid.get_mut(start) {
            tile.set_tile_type(TileType::FocusEntering);
            tile.set_parent_direction(Direction::Up);
        }

        self.grid = grid;
        self.cursor = start;
        self.phase = PhaseFlags::restarted();
        self.backtrack_target = None;
        self.solution.clear();

        Ok(())
    }

    /// Advances the build or solve process by one unit of animation work.
    /// Does nothing before the first restart or once the solution is finished.
    pub fn step(&mut self) {
        if self.grid.is_empty() {
            return;
        }

        if self.phase.first_build_step {
            self.phase.first_build_step = false;
        } else if !self.phase.maze_finished {
            self.build_step();
        } else if self.phase.first_solve_step {
            self.find_solution();
        } else if !self.phase.solution_finished {
            self.solve_step();
        }
    }

    fn build_step(&mut self) {
        let cursor = self.cursor;
        let Some(tile) = self.grid.get(cursor) else {
            return;
        };
        let tile_type = tile.tile_type();
        let parent_direction = tile.parent_direction();

        // Entering and leaving a tile each take one extra frame.
        match tile_type {
            TileType::FocusEntering => {
                self.set_tile_type(cursor, TileType::Focus);
                return;
            }
            TileType::FocusLeaving => {
                self.set_tile_type(cursor, TileType::Floor);

                match self.backtrack_target.take() {
                    Some(target) => {
                        self.cursor = target;
                        self.set_tile_type(target, TileType::Focus);
                    }
                    None => self.phase.maze_finished = true,
                }
                return;
            }
            _ => {}
        }

        if Some(cursor) == self.grid.goal() {
            if !self.phase.exit_built {
                self.set_tile_type(cursor, TileType::Floor);
                self.phase.exit_built = true;
                self.phase.building_exit = true;
                return;
            }

            if self.phase.building_exit {
                self.set_tile_type(cursor, TileType::Focus);
                self.phase.building_exit = false;
                return;
            }
        }

        match self.next_carve(cursor) {
            Some((direction, target)) => {
                let parent_direction = direction.opposite();

                if let Some(next) = self.grid.get_mut(target) {
                    next.set_parent_direction(parent_direction);
                    next.remove_untried(parent_direction);
                    next.set_tile_type(TileType::FocusEntering);
                }

                self.set_tile_type(cursor, TileType::Floor);
                self.cursor = target;
            }
            None => {
                self.backtrack_target = self.grid.neighbour(cursor, parent_direction);
                self.set_tile_type(cursor, TileType::FocusLeaving);
            }
        }
    }

    /// Pops untried directions of the tile at `from` until one leads to an
    /// in-grid tile that has not been carved yet.
    fn next_carve(&mut self, from: Position) -> Option<(Direction, Position)> {
        loop {
            let direction = self.grid.get_mut(from)?.next_untried()?;

            let Some(target) = self.grid.neighbour(from, direction) else {
                continue;
            };

            let carved = self
                .grid
                .get(target)
                .is_some_and(|tile| tile.tile_type() == TileType::Floor);

            if !carved {
                return Some((direction, target));
            }
        }
    }

    fn find_solution(&mut self) {
        self.solution = match self.grid.goal() {
            Some(goal) => self.trace_to_start(goal),
            None => Vec::new(),
        };
        self.phase.first_solve_step = false;
    }

    fn solve_step(&mut self) {
        let Some(&top) = self.solution.last() else {
            if self.phase.solution_exit_built {
                self.phase.solution_finished = true;
            } else {
                self.phase.solution_exit_built = true;
            }
            return;
        };

        match self.grid.get(top).map(|tile| tile.tile_type()) {
            Some(TileType::Floor) => self.set_tile_type(top, TileType::SolutionEntering),
            Some(TileType::SolutionEntering) => {
                self.set_tile_type(top, TileType::Solution);
                self.solution.pop();
            }
            _ => {
                self.solution.pop();
            }
        }
    }

    fn set_tile_type(&mut self, position: Position, tile_type: TileType) {
        if let Some(tile) = self.grid.get_mut(position) {
            tile.set_tile_type(tile_type);
        }
    }

    /// Follows parent directions from `from` until the walk leaves the grid.
    ///
    /// On a finished maze this is the unique tree path from `from` to the
    /// start tile, `from` first. Stops early at a tile without a parent.
    #[must_use]
    pub fn trace_to_start(&self, from: Position) -> Vec<Position> {
        let mut path = Vec::new();
        let mut current = self.grid.contains(from).then_some(from);

        while let Some(position) = current {
            path.push(position);

            if path.len() == self.grid.len() {
                break;
            }

            current = self.grid.get(position).and_then(|tile| {
                match tile.parent_direction() {
                    Direction::None => None,
                    parent => self.grid.neighbour(position, parent),
                }
            });
        }

        path
    }

    #[must_use]
    pub fn tiles(&self) -> &TileGrid {
        &self.grid
    }

    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Solution tiles still to animate, goal first and next-to-animate last.
    #[must_use]
    pub fn solution_remaining(&self) -> &[Position] {
        &self.solution
    }

    #[must_use]
    pub fn maze_finished(&self) -> bool {
        self.phase.maze_finished
    }

    #[must_use]
    pub fn solution_finished(&self) -> bool {
        self.phase.solution_finished
    }

    #[must_use]
    pub fn exit_built(&self) -> bool {
        self.phase.exit_built
    }

    #[must_use]
    pub fn building_exit(&self) -> bool {
        self.phase.building_exit
    }

    #[must_use]
    pub fn solution_exit_built(&self) -> bool {
        self.phase.solution_exit_built
    }

    #[must_use]
    pub fn phase(&self) -> MazePhase {
        if self.grid.is_empty() {
            MazePhase::Idle
        } else if !self.phase.maze_finished {
            MazePhase::Building
        } else if !self.phase.solution_finished {
            MazePhase::Solving
        } else {
            MazePhase::Finished
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> MazeSnapshot {
        MazeSnapshot {
            columns: self.grid.columns(),
            rows: self.grid.rows(),
            tiles: self
                .grid
                .iter()
                .map(|(_, tile)| TileView {
                    tile_type: tile.tile_type(),
                    parent_direction: tile.parent_direction(),
                })
                .collect(),
            cursor: self.cursor,
            maze_finished: self.phase.maze_finished,
            solution_finished: self.phase.solution_finished,
            exit_built: self.phase.exit_built,
            building_exit: self.phase.building_exit,
            solution_exit_built: self.phase.solution_exit_built,
        }
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::new()
    }
}
