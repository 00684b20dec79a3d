//! Flee bot
//!
//! Picks the input that leaves the player farthest from the bomb after this
//! tick's move, with a mild pull toward the middle of the playfield so the
//! player does not pin itself into a corner.

use glam::IVec2;

use crate::sim::{SimulationState, TickInput, check_bounds};

/// Weight of the pull toward the playfield center
const CENTER_PULL: f32 = 0.25;

fn input_for(dir: IVec2) -> TickInput {
    TickInput {
        up: dir.y < 0,
        down: dir.y > 0,
        left: dir.x < 0,
        right: dir.x > 0,
    }
}

/// Choose this tick's input for the player
pub fn flee_input(state: &SimulationState) -> TickInput {
    let field = state.config.playfield;
    let field_center = field.rect().center().as_vec2();
    let bomb_center = state.bomb.rect.center().as_vec2();
    let step = state.config.player_step;

    let mut best = (f32::MIN, TickInput::default());
    for dy in -1..=1 {
        for dx in -1..=1 {
            let input = input_for(IVec2::new(dx, dy));
            let moved = state.player.rect.moved(input.displacement(step));
            if !check_bounds(&moved, field).inside() {
                continue;
            }
            let center = moved.center().as_vec2();
            let score = center.distance(bomb_center) - CENTER_PULL * center.distance(field_center);
            if score > best.0 {
                best = (score, input);
            }
        }
    }
    best.1
}
