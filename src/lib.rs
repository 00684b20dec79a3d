//! Dodge Bomb - survive a bomb that chases you and keeps growing
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, bounds, chase, growth, game state)
//! - `config`: Externally settable simulation parameters
//! - `presentation`: Draw-free sprite/HUD descriptors for a rendering layer
//! - `autopilot`: Flee bot that produces tick input

pub mod autopilot;
pub mod config;
pub mod error;
pub mod presentation;
pub mod sim;

pub use config::{GrowthConfig, SimConfig};
pub use error::ConfigError;

use glam::{IVec2, Vec2};

/// Game configuration constants (reference values)
pub mod consts {
    /// Playfield dimensions
    pub const WIDTH: i32 = 1100;
    pub const HEIGHT: i32 = 650;

    /// Target simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 50;

    /// Player defaults
    pub const PLAYER_START: (i32, i32) = (300, 200);
    pub const PLAYER_SIZE: (i32, i32) = (90, 90);
    /// Pixels moved per pressed direction per tick
    pub const PLAYER_STEP: i32 = 5;

    /// Bomb defaults
    pub const BOMB_INITIAL_VELOCITY: (f32, f32) = (5.0, 5.0);
    /// Below this center distance the bomb coasts on its last velocity
    pub const CHASE_INERTIA_RADIUS: f32 = 300.0;
    /// Chase speed magnitude, sqrt(50)
    pub const CHASE_SPEED: f32 = 7.071_068;

    /// Growth table: 10 stages, 20px per stage, multiplier 1.0 + 0.1 * stage
    pub const STAGE_COUNT: usize = 10;
    pub const STAGE_SIZE_STEP: i32 = 20;
    pub const STAGE_SPEED_STEP: f32 = 0.1;
    pub const FRAMES_PER_STAGE: u64 = 300;

    /// Exponential growth defaults
    pub const EXP_SPEED_FACTOR: f32 = 1.02;
    pub const EXP_FRAMES_PER_STEP: u64 = 50;
    pub const EXP_MAX_STEPS: u32 = 90;

    /// Survive this many frames to clear (30 s at 50 ticks/s)
    pub const CLEAR_FRAMES: u64 = 1500;
}

/// Truncate a velocity toward zero into whole pixel deltas
#[inline]
pub fn truncate_to_pixels(v: Vec2) -> IVec2 {
    IVec2::new(v.x.trunc() as i32, v.y.trunc() as i32)
}

/// Per-axis sign of a pixel vector (-1, 0 or 1)
#[inline]
pub fn axis_signs(v: IVec2) -> IVec2 {
    IVec2::new(v.x.signum(), v.y.signum())
}
