use std::fmt;

use crate::coord::Coord;

/// Screen orientation: `y` grows downwards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// One step in this direction.
    #[inline]
    pub const fn unit(self) -> Coord {
        match self {
            Direction::Right => Coord::new(1, 0),
            Direction::Left => Coord::new(-1, 0),
            Direction::Down => Coord::new(0, 1),
            Direction::Up => Coord::new(0, -1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
        };
        f.write_str(name)
    }
}
