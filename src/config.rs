//! Simulation configuration
//!
//! Every tunable the simulation reads lives here. Defaults reproduce the
//! reference game; JSON files override individual fields.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Rect;
use crate::sim::bounds::{Playfield, check_bounds};
use crate::sim::chase::ChaseParams;
pub use crate::sim::growth::{ExponentialGrowth, GrowthConfig, Stage, StagedGrowth};

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub playfield: Playfield,

    // === Player ===
    pub player_size: IVec2,
    pub player_start: IVec2,
    /// Pixels moved per pressed direction per tick
    pub player_step: i32,

    // === Bomb ===
    pub bomb_initial_velocity: Vec2,
    pub chase: ChaseParams,
    pub growth: GrowthConfig,

    // === Rules ===
    /// Frames to survive for a clear; `None` plays until collision
    pub clear_frames: Option<u64>,
    /// Ticks per second the caller is expected to drive `tick` at
    pub tick_rate: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(WIDTH, HEIGHT),

            player_size: IVec2::new(PLAYER_SIZE.0, PLAYER_SIZE.1),
            player_start: IVec2::new(PLAYER_START.0, PLAYER_START.1),
            player_step: PLAYER_STEP,

            bomb_initial_velocity: Vec2::new(BOMB_INITIAL_VELOCITY.0, BOMB_INITIAL_VELOCITY.1),
            chase: ChaseParams::default(),
            growth: GrowthConfig::default(),

            clear_frames: Some(CLEAR_FRAMES),
            tick_rate: TICK_RATE,
        }
    }
}

impl SimConfig {
    /// Reference game: staged growth, clear after 30 seconds
    pub fn reference() -> Self {
        Self::default()
    }

    /// Open-ended survival: no clear threshold
    pub fn endless() -> Self {
        Self {
            clear_frames: None,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON configuration and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Seconds of play represented by a frame count
    pub fn frames_to_secs(&self, frames: u64) -> f64 {
        frames as f64 / self.tick_rate.max(1) as f64
    }

    /// Fail fast on any configuration the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = self.playfield;
        if field.width <= 0 || field.height <= 0 {
            return Err(ConfigError::InvalidPlayfield {
                width: field.width,
                height: field.height,
            });
        }

        let size = self.player_size;
        if size.x <= 0 || size.y <= 0 || size.x > field.width || size.y > field.height {
            return Err(ConfigError::InvalidPlayerSize {
                width: size.x,
                height: size.y,
            });
        }
        let player = Rect::from_center(self.player_start, size.x, size.y);
        if !check_bounds(&player, field).inside() {
            return Err(ConfigError::PlayerStartOutOfBounds {
                x: self.player_start.x,
                y: self.player_start.y,
            });
        }
        if self.player_step < 0 {
            return Err(ConfigError::NegativePlayerStep(self.player_step));
        }

        self.growth.validate()?;
        let bomb_size = self.growth.max_size();
        if bomb_size > field.width || bomb_size > field.height {
            return Err(ConfigError::BombTooLarge { size: bomb_size });
        }

        if !self.bomb_initial_velocity.is_finite() {
            return Err(ConfigError::InvalidInitialVelocity);
        }
        for (name, value) in [
            ("chase inertia radius", self.chase.inertia_radius),
            ("chase speed", self.chase.speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidChaseParameter { name, value });
            }
        }

        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.clear_frames == Some(0) {
            log::warn!("clear_frames is 0; every run clears on its first tick");
        }

        Ok(())
    }
}
