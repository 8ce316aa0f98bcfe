//! A single robot walking on a square toroidal field.
//!
//! Moving past one edge re-enters at the opposite edge, so the location is always inside
//! `[0, field_size)` on both axes. Movements with a non-positive step count are rejected
//! and leave the robot where it was.

use std::fmt;

use tracing::{trace, warn};

use crate::coord::Coord;
use crate::direction::Direction;
use crate::error::{Result, RobotError};
use crate::field::FieldSize;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Robot {
    field: FieldSize,
    location: Coord,
}

impl Robot {
    /// Place a robot at `(x, y)` on a `field_size × field_size` field.
    pub fn new(field_size: i32, x: i32, y: i32) -> Result<Self> {
        Self::with_field(FieldSize::new(field_size)?, Coord::new(x, y))
    }

    pub fn with_field(field: FieldSize, location: Coord) -> Result<Self> {
        if !field.contains(location) {
            return Err(RobotError::PositionOutOfField {
                x: location.x,
                y: location.y,
                field_size: field.get(),
            });
        }
        Ok(Self { field, location })
    }

    #[inline]
    pub fn location(&self) -> Coord {
        self.location
    }

    #[inline]
    pub fn field_size(&self) -> FieldSize {
        self.field
    }

    pub fn move_right(&mut self, steps: i32) -> Result<Coord> {
        self.step(Direction::Right, steps)
    }

    pub fn move_left(&mut self, steps: i32) -> Result<Coord> {
        self.step(Direction::Left, steps)
    }

    pub fn move_down(&mut self, steps: i32) -> Result<Coord> {
        self.step(Direction::Down, steps)
    }

    pub fn move_up(&mut self, steps: i32) -> Result<Coord> {
        self.step(Direction::Up, steps)
    }

    /// Move `steps` cells towards `direction`, wrapping around the field edges.
    ///
    /// `steps <= 0` is reported and rejected with [`RobotError::InvalidStepCount`];
    /// the location is untouched in that case. Returns the new location otherwise.
    pub fn step(&mut self, direction: Direction, steps: i32) -> Result<Coord> {
        if steps <= 0 {
            warn!(steps, %direction, "steps argument must be positive");
            return Err(RobotError::InvalidStepCount { steps });
        }

        let unit = direction.unit();
        let steps = i64::from(steps);
        let x = i64::from(self.location.x) + i64::from(unit.x) * steps;
        let y = i64::from(self.location.y) + i64::from(unit.y) * steps;
        self.location = Coord::new(self.field.wrap(x), self.field.wrap(y));

        trace!(%direction, steps, location = %self.location, "robot moved");
        Ok(self.location)
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self {
            field: FieldSize::DEFAULT,
            location: Coord::ORIGIN,
        }
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Robot(x={}, y={})", self.location.x, self.location.y)
    }
}
