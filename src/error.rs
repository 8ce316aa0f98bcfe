use thiserror::Error;

pub type Result<T> = std::result::Result<T, RobotError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RobotError {
    /// A movement was requested with a non-positive step count. Nothing moved.
    #[error("steps argument must be positive, is {steps}")]
    InvalidStepCount { steps: i32 },

    #[error("field size must be positive, is {field_size}")]
    InvalidFieldSize { field_size: i32 },

    #[error("position ({x}, {y}) lies outside a field of size {field_size}")]
    PositionOutOfField { x: i32, y: i32, field_size: i32 },

    #[error("invalid robot config: {0}")]
    Config(String),
}
