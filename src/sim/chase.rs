//! Bomb steering: pursue the player from afar, coast when close

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::axis_signs;
use crate::consts::{CHASE_INERTIA_RADIUS, CHASE_SPEED};

/// Chase model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaseParams {
    /// Center distance below which the current velocity is kept
    pub inertia_radius: f32,
    /// Speed magnitude of the pursuit vector
    pub speed: f32,
}

impl Default for ChaseParams {
    fn default() -> Self {
        Self {
            inertia_radius: CHASE_INERTIA_RADIUS,
            speed: CHASE_SPEED,
        }
    }
}

/// Target velocity for the bomb.
///
/// Within `inertia_radius` of the player the current velocity is returned
/// unchanged. Beyond it the result points from bomb to player with magnitude
/// `speed`. Overlapping centers yield zero.
pub fn chase_vector(bomb: &Rect, player: &Rect, current: Vec2, params: &ChaseParams) -> Vec2 {
    let to_player = (player.center() - bomb.center()).as_vec2();
    let distance = to_player.length();

    if distance < params.inertia_radius {
        return current;
    }
    if distance == 0.0 {
        return Vec2::ZERO;
    }

    to_player / distance * params.speed
}

/// Per-axis direction (-1, 0, 1) from the center of `org` to the center of `dst`
pub fn orientation(org: &Rect, dst: &Rect) -> IVec2 {
    axis_signs(dst.center() - org.center())
}
