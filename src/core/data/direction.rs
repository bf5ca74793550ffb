/// A unit step on the tile grid. `y` grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The four directions a tile can be carved towards.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    #[must_use]
    pub fn dx(self) -> i32 {
        match self {
            Self::Right => 1,
            Self::Left => -1,
            Self::None | Self::Up | Self::Down => 0,
        }
    }

    #[must_use]
    pub fn dy(self) -> i32 {
        match self {
            Self::Up => -1,
            Self::Down => 1,
            Self::None | Self::Right | Self::Left => 0,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::None => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in Direction::CARDINAL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_none_is_its_own_opposite() {
        assert_eq!(Direction::None.opposite(), Direction::None);
        assert_eq!(Direction::default(), Direction::None);
    }

    #[test]
    fn test_offsets_cancel_with_opposite() {
        for direction in Direction::CARDINAL {
            let opposite = direction.opposite();
            assert_eq!(direction.dx() + opposite.dx(), 0);
            assert_eq!(direction.dy() + opposite.dy(), 0);
            assert_eq!(direction.dx().abs() + direction.dy().abs(), 1);
        }
    }

    #[test]
    fn test_up_points_towards_smaller_rows() {
        assert_eq!((Direction::Up.dx(), Direction::Up.dy()), (0, -1));
        assert_eq!((Direction::Right.dx(), Direction::Right.dy()), (1, 0));
        assert_eq!((Direction::Down.dx(), Direction::Down.dy()), (0, 1));
        assert_eq!((Direction::Left.dx(), Direction::Left.dy()), (-1, 0));
    }
}
