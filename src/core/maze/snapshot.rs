use crate::core::data::direction::Direction;
use crate::core::data::tile::TileType;
use crate::core::data::tile_grid::Position;

/// The parts of a tile a renderer needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct TileView {
    pub tile_type: TileType,
    pub parent_direction: Direction,
}

/// Immutable copy of a maze's visible state at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MazeSnapshot {
    pub columns: usize,
    pub rows: usize,
    /// Row-major, `columns * rows` entries.
    pub tiles: Vec<TileView>,
    pub cursor: Position,
    pub maze_finished: bool,
    pub solution_finished: bool,
    pub exit_built: bool,
    pub building_exit: bool,
    pub solution_exit_built: bool,
}

impl MazeSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn tile(&self, position: Position) -> Option<TileView> {
        if position.x >= self.columns || position.y >= self.rows {
            return None;
        }

        self.tiles.get(position.y * self.columns + position.x).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, TileView)> + '_ {
        let columns = self.columns;

        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (Position::new(i % columns, i / columns), *tile))
    }

    #[must_use]
    pub fn count(&self, tile_type: TileType) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.tile_type == tile_type)
            .count()
    }
}
