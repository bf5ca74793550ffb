use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::data::direction::Direction;

/// Visual and algorithmic state of a single grid cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    #[default]
    Wall,
    Floor,
    Focus,
    FocusEntering,
    FocusLeaving,
    Solution,
    SolutionEntering,
}

impl TileType {
    /// True for the states the build cursor can be in.
    #[must_use]
    pub fn is_focus(self) -> bool {
        matches!(
            self,
            Self::Focus | Self::FocusEntering | Self::FocusLeaving
        )
    }
}

#[derive(Debug, Clone)]
pub struct Tile {
    tile_type: TileType,
    parent_direction: Direction,
    // Only `untried[..remaining]` is live. Shrinks, never regrows.
    untried: [Direction; 4],
    remaining: usize,
}

impl Tile {
    /// A wall tile whose untried directions are a uniformly random permutation.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut untried = Direction::CARDINAL;
        untried.shuffle(rng);

        Self {
            tile_type: TileType::Wall,
            parent_direction: Direction::None,
            untried,
            remaining: untried.len(),
        }
    }

    #[must_use]
    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    pub fn set_tile_type(&mut self, tile_type: TileType) {
        self.tile_type = tile_type;
    }

    #[must_use]
    pub fn parent_direction(&self) -> Direction {
        self.parent_direction
    }

    pub fn set_parent_direction(&mut self, direction: Direction) {
        self.parent_direction = direction;
    }

    /// Takes the next untried direction, or `None` once the pool is exhausted.
    pub fn next_untried(&mut self) -> Option<Direction> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.untried[self.remaining])
    }

    /// Drops `direction` from the pool if it is still there, keeping the order of the rest.
    pub fn remove_untried(&mut self, direction: Direction) {
        if let Some(index) = self.untried[..self.remaining]
            .iter()
            .position(|&d| d == direction)
        {
            self.untried.copy_within(index + 1..self.remaining, index);
            self.remaining -= 1;
        }
    }

    #[must_use]
    pub fn untried(&self) -> &[Direction] {
        &self.untried[..self.remaining]
    }
}
