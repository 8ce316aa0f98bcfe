use serde::Deserialize;

use crate::coord::Coord;
use crate::error::{Result, RobotError};
use crate::field::FieldSize;
use crate::robot::Robot;

/// Starting parameters for a [`Robot`]. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    pub field_size: i32,
    pub x: i32,
    pub y: i32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            field_size: FieldSize::DEFAULT.get(),
            x: 0,
            y: 0,
        }
    }
}

impl RobotConfig {
    pub fn new(field_size: i32, x: i32, y: i32) -> Self {
        Self { field_size, x, y }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| RobotError::Config(e.to_string()))
    }

    pub fn build(&self) -> Result<Robot> {
        Robot::new(self.field_size, self.x, self.y)
    }
}

impl From<&Robot> for RobotConfig {
    fn from(robot: &Robot) -> Self {
        let Coord { x, y } = robot.location();
        Self {
            field_size: robot.field_size().get(),
            x,
            y,
        }
    }
}
