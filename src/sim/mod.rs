//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, no clocks
//! - Seeded RNG only (bomb spawn point)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod chase;
pub mod growth;
pub mod rect;
pub mod state;
pub mod tick;

pub use bounds::{
    BombBounds, BoundsCheck, PlayerBounds, Playfield, apply_bomb_bounds_policy,
    apply_player_bounds_policy, check_bounds,
};
pub use chase::{ChaseParams, chase_vector, orientation};
pub use growth::{ExponentialGrowth, GrowthConfig, GrowthPolicy, Stage, StagedGrowth};
pub use rect::Rect;
pub use state::{Bomb, Facing, FrameSnapshot, GamePhase, Player, SimulationState};
pub use tick::{StepStatus, TickInput, step, tick};
