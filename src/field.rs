use crate::coord::Coord;
use crate::error::{Result, RobotError};

/// Side length of a square toroidal field. Always positive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FieldSize(i32);

impl FieldSize {
    pub const DEFAULT: FieldSize = FieldSize(100);

    pub fn new(size: i32) -> Result<Self> {
        if size <= 0 {
            return Err(RobotError::InvalidFieldSize { field_size: size });
        }
        Ok(Self(size))
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Reduce a raw coordinate into `[0, size)`.
    ///
    /// Takes `i64` so callers can add a full `i32` step count without overflowing.
    #[inline]
    pub fn wrap(self, raw: i64) -> i32 {
        // rem_euclid of a positive i32 modulus always fits back into i32.
        raw.rem_euclid(i64::from(self.0)) as i32
    }

    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        (0..self.0).contains(&c.x) && (0..self.0).contains(&c.y)
    }
}
