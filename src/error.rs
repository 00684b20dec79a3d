//! Configuration errors
//!
//! The simulation itself never fails; every error is raised up front when a
//! configuration is validated or parsed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("playfield must be positive, got {width}x{height}")]
    InvalidPlayfield { width: i32, height: i32 },

    #[error("player size {width}x{height} does not fit the playfield")]
    InvalidPlayerSize { width: i32, height: i32 },

    #[error("player start ({x}, {y}) puts the player outside the playfield")]
    PlayerStartOutOfBounds { x: i32, y: i32 },

    #[error("player step must be non-negative, got {0}")]
    NegativePlayerStep(i32),

    #[error("growth table is empty")]
    EmptyGrowthTable,

    #[error("frames per growth step must be at least 1")]
    ZeroFramesPerStage,

    #[error("growth step count {max_steps} is too large")]
    TooManyGrowthSteps { max_steps: u32 },

    #[error("bomb size overflows after {max_steps} growth steps")]
    GrowthOverflow { max_steps: u32 },

    #[error("growth stage {index} has invalid size {size}")]
    InvalidStageSize { index: usize, size: i32 },

    #[error("growth stage {index} has invalid speed multiplier {multiplier}")]
    InvalidSpeedMultiplier { index: usize, multiplier: f32 },

    #[error("bomb size {size} does not fit the playfield")]
    BombTooLarge { size: i32 },

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidChaseParameter { name: &'static str, value: f32 },

    #[error("bomb initial velocity must be finite")]
    InvalidInitialVelocity,

    #[error("tick rate must be at least 1")]
    ZeroTickRate,

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
