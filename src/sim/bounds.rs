//! Playfield bounds checks and the per-entity wall policies
//!
//! The player is reverted when a move would leave the playfield. The bomb is
//! never reverted: its velocity is reflected on the offending axis before the
//! move is committed.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Fixed-size simulation area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Per-axis result of a bounds check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsCheck {
    pub in_x: bool,
    pub in_y: bool,
}

impl BoundsCheck {
    #[inline]
    pub fn inside(&self) -> bool {
        self.in_x && self.in_y
    }
}

/// Check whether each axis of `rect` lies within `[0, width]` / `[0, height]`
pub fn check_bounds(rect: &Rect, playfield: Playfield) -> BoundsCheck {
    BoundsCheck {
        in_x: 0 <= rect.left() && rect.right() <= playfield.width,
        in_y: 0 <= rect.top() && rect.bottom() <= playfield.height,
    }
}

/// Outcome of the player wall policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerBounds {
    Inside,
    /// The move escaped on at least one axis and was undone on both
    Reverted,
}

/// Undo the player's move entirely if the moved rect escapes on any axis
pub fn apply_player_bounds_policy(
    rect: &mut Rect,
    prev_center: IVec2,
    playfield: Playfield,
) -> PlayerBounds {
    if check_bounds(rect, playfield).inside() {
        PlayerBounds::Inside
    } else {
        rect.set_center(prev_center);
        PlayerBounds::Reverted
    }
}

/// Outcome of the bomb wall policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BombBounds {
    pub reflected_x: bool,
    pub reflected_y: bool,
}

impl BombBounds {
    pub fn any(&self) -> bool {
        self.reflected_x || self.reflected_y
    }
}

/// Reflect-then-move for the bomb.
///
/// The prospective position `rect + delta` is checked per axis. An axis is
/// reflected when the move pushes the rect across the wall it is heading
/// toward; a zero delta never reflects. Reflection negates both the stored
/// velocity component and the pending delta, then the rect is moved.
pub fn apply_bomb_bounds_policy(
    rect: &mut Rect,
    velocity: &mut Vec2,
    delta: IVec2,
    playfield: Playfield,
) -> BombBounds {
    let next = rect.moved(delta);
    let mut delta = delta;

    let reflected_x = (delta.x < 0 && next.left() < 0)
        || (delta.x > 0 && next.right() > playfield.width);
    let reflected_y = (delta.y < 0 && next.top() < 0)
        || (delta.y > 0 && next.bottom() > playfield.height);

    if reflected_x {
        velocity.x = -velocity.x;
        delta.x = -delta.x;
    }
    if reflected_y {
        velocity.y = -velocity.y;
        delta.y = -delta.y;
    }

    rect.move_by(delta);

    BombBounds {
        reflected_x,
        reflected_y,
    }
}
