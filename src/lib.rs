//! Track a robot on a square toroidal field: moves wrap around the edges and the
//! location always stays inside the field.

pub mod config;
pub mod coord;
pub mod direction;
pub mod error;
pub mod field;
pub mod robot;

pub use config::RobotConfig;
pub use coord::Coord;
pub use direction::Direction;
pub use error::{Result, RobotError};
pub use field::FieldSize;
pub use robot::Robot;
