use rand::Rng;

use crate::core::data::direction::Direction;
use crate::core::data::tile::Tile;

/// Column/row coordinate of a tile. `(0, 0)` is the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Row-major storage of the maze tiles.
#[derive(Debug, Clone, Default)]
pub struct TileGrid {
    columns: usize,
    rows: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// An empty 0x0 grid.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A `columns` x `rows` grid of wall tiles, each with its own shuffled pool.
    pub fn new<R: Rng + ?Sized>(columns: usize, rows: usize, rng: &mut R) -> Self {
        let tiles = (0..columns * rows).map(|_| Tile::new(rng)).collect();

        Self {
            columns,
            rows,
            tiles,
        }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.columns && position.y < self.rows
    }

    /// Bottom-right tile, where the exit is carved. `None` for an empty grid.
    #[must_use]
    pub fn goal(&self) -> Option<Position> {
        if self.is_empty() {
            return None;
        }

        Some(Position::new(self.columns - 1, self.rows - 1))
    }

    /// The tile one step away in `direction`, or `None` if that leaves the grid.
    #[must_use]
    pub fn neighbour(&self, position: Position, direction: Direction) -> Option<Position> {
        let x = position.x.checked_add_signed(direction.dx() as isize)?;
        let y = position.y.checked_add_signed(direction.dy() as isize)?;
        let target = Position::new(x, y);

        self.contains(target).then_some(target)
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Tile> {
        if !self.contains(position) {
            return None;
        }

        self.tiles.get(self.index(position))
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut Tile> {
        if !self.contains(position) {
            return None;
        }

        let index = self.index(position);
        self.tiles.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> {
        let columns = self.columns;

        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (Position::new(i % columns, i / columns), tile))
    }

    fn index(&self, position: Position) -> usize {
        position.y * self.columns + position.x
    }
}
