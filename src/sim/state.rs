//! Game state and core simulation types
//!
//! Everything needed to replay a run lives here: the configuration, the seed
//! and the mutable entities. Given the same seed and inputs, two states stay
//! identical tick for tick.

use glam::{IVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::growth::GrowthPolicy;
use super::rect::Rect;
use crate::axis_signs;
use crate::config::SimConfig;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Player touched the bomb (terminal)
    Collided,
    /// Player lasted until the clear threshold (terminal)
    Survived,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Direction of the player's last move, one of nine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Neutral,
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Facing {
    /// Classify a displacement by the sign of each axis (screen y grows down)
    pub fn from_delta(delta: IVec2) -> Self {
        let signs = axis_signs(delta);
        match (signs.x, signs.y) {
            (0, -1) => Facing::Up,
            (0, 1) => Facing::Down,
            (-1, 0) => Facing::Left,
            (1, 0) => Facing::Right,
            (-1, -1) => Facing::UpLeft,
            (1, -1) => Facing::UpRight,
            (-1, 1) => Facing::DownLeft,
            (1, 1) => Facing::DownRight,
            _ => Facing::Neutral,
        }
    }
}

/// The player-controlled sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Direction of the last attempted move
    pub facing: Facing,
}

/// The chasing bomb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bomb {
    pub rect: Rect,
    /// Unscaled velocity (pixels/tick before the stage multiplier)
    pub velocity: Vec2,
    /// Current growth stage index
    pub stage: usize,
}

/// Complete simulation state (deterministic, serializable)
///
/// Deserializing re-validates the embedded configuration, so a restored
/// state can always be ticked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    #[serde(deserialize_with = "deserialize_validated_config")]
    pub config: SimConfig,
    /// Seed the bomb's spawn point was drawn from
    pub seed: u64,
    pub player: Player,
    pub bomb: Bomb,
    /// Elapsed ticks since the run started
    pub frames: u64,
    pub score: u64,
    pub phase: GamePhase,
}

fn deserialize_validated_config<'de, D>(deserializer: D) -> Result<SimConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let config = SimConfig::deserialize(deserializer)?;
    config.validate().map_err(D::Error::custom)?;
    Ok(config)
}

impl SimulationState {
    /// Start a run. Without a seed, one is drawn from the thread RNG.
    pub fn new(config: SimConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);

        let player = Player {
            rect: Rect::from_center(config.player_start, config.player_size.x, config.player_size.y),
            facing: Facing::Neutral,
        };

        let stage = config.growth.stage_for_frame(0);
        let size = config.growth.stage(stage).size;
        let half = size / 2;
        let field = config.playfield;
        let center = IVec2::new(
            rng.random_range(half..=field.width - half),
            rng.random_range(half..=field.height - half),
        );
        let bomb = Bomb {
            rect: Rect::from_center(center, size, size),
            velocity: config.bomb_initial_velocity,
            stage,
        };

        log::debug!(
            "new run: seed={seed} player={:?} bomb={:?}",
            player.rect.center(),
            bomb.rect.center()
        );

        Ok(Self {
            config,
            seed,
            player,
            bomb,
            frames: 0,
            score: 0,
            phase: GamePhase::Playing,
        })
    }

    /// Center-to-center distance between player and bomb
    pub fn bomb_distance(&self) -> f32 {
        (self.player.rect.center() - self.bomb.rect.center())
            .as_vec2()
            .length()
    }

    /// Plain-data view for rendering and logging
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frames,
            score: self.score,
            phase: self.phase,
            player: self.player.rect,
            facing: self.player.facing,
            bomb: self.bomb.rect,
            bomb_velocity: self.bomb.velocity,
            bomb_stage: self.bomb.stage,
        }
    }
}

/// Read-only per-frame view of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub player: Rect,
    pub facing: Facing,
    pub bomb: Rect,
    pub bomb_velocity: Vec2,
    pub bomb_stage: usize,
}
