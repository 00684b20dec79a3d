//! Fixed-rate simulation tick
//!
//! One call advances the game by exactly one frame. The caller owns timing.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::bounds::{PlayerBounds, apply_bomb_bounds_policy, apply_player_bounds_policy};
use super::chase::chase_vector;
use super::growth::GrowthPolicy;
use super::state::{Facing, GamePhase, SimulationState};
use crate::truncate_to_pixels;

/// Directional input held during a tick. Opposite keys cancel out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Summed displacement for the pressed directions
    pub fn displacement(&self, step: i32) -> IVec2 {
        let mut delta = IVec2::ZERO;
        if self.up {
            delta.y -= step;
        }
        if self.down {
            delta.y += step;
        }
        if self.left {
            delta.x -= step;
        }
        if self.right {
            delta.x += step;
        }
        delta
    }
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    Continuing,
    Collided { score: u64 },
    Survived { score: u64 },
}

impl StepStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepStatus::Continuing)
    }
}

impl SimulationState {
    /// Status corresponding to the current phase
    pub fn status(&self) -> StepStatus {
        match self.phase {
            GamePhase::Playing => StepStatus::Continuing,
            GamePhase::Collided => StepStatus::Collided { score: self.score },
            GamePhase::Survived => StepStatus::Survived { score: self.score },
        }
    }
}

/// Advance the game state by one frame.
///
/// Order: player move (reverted if it escapes), bomb growth, bomb steering
/// toward the player's new position, scaled bomb move with wall reflection,
/// counters, then the clear check followed by the collision check. Once the
/// phase is terminal further ticks change nothing.
pub fn tick(state: &mut SimulationState, input: &TickInput) -> StepStatus {
    if state.phase.is_terminal() {
        return state.status();
    }

    let field = state.config.playfield;

    // Player
    let delta = input.displacement(state.config.player_step);
    state.player.facing = Facing::from_delta(delta);
    let prev_center = state.player.rect.center();
    state.player.rect.move_by(delta);
    if apply_player_bounds_policy(&mut state.player.rect, prev_center, field)
        == PlayerBounds::Reverted
    {
        log::trace!("frame {}: player move {:?} reverted", state.frames, delta);
    }

    // Bomb growth
    let growth = &state.config.growth;
    let stage_index = growth.stage_for_frame(state.frames);
    let stage = growth.stage(stage_index);
    if stage_index != state.bomb.stage {
        state.bomb.rect.resize_centered(stage.size, stage.size);
        state.bomb.stage = stage_index;
        log::debug!(
            "frame {}: bomb grew to stage {} ({}px, x{:.2})",
            state.frames,
            stage_index,
            stage.size,
            stage.speed_multiplier
        );
    }

    // Bomb steering and movement
    state.bomb.velocity = chase_vector(
        &state.bomb.rect,
        &state.player.rect,
        state.bomb.velocity,
        &state.config.chase,
    );
    let bomb_delta = truncate_to_pixels(state.bomb.velocity * stage.speed_multiplier);
    let reflection = apply_bomb_bounds_policy(
        &mut state.bomb.rect,
        &mut state.bomb.velocity,
        bomb_delta,
        field,
    );
    if reflection.any() {
        log::trace!("frame {}: bomb reflected {:?}", state.frames, reflection);
    }

    state.frames += 1;
    state.score += 1;

    // Termination
    if state.config.clear_frames.is_some_and(|clear| state.frames >= clear) {
        state.phase = GamePhase::Survived;
        log::info!("cleared after {} frames, score {}", state.frames, state.score);
    } else if state.player.rect.intersects(&state.bomb.rect) {
        state.phase = GamePhase::Collided;
        log::info!("hit by bomb after {} frames, score {}", state.frames, state.score);
    }

    state.status()
}

/// Pure form of [`tick`]: returns the next state and leaves `state` untouched
pub fn step(state: &SimulationState, input: &TickInput) -> (SimulationState, StepStatus) {
    let mut next = state.clone();
    let status = tick(&mut next, input);
    (next, status)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::config::SimConfig;
    use crate::sim::Rect;
    use crate::sim::bounds::check_bounds;

    fn new_state(config: SimConfig) -> SimulationState {
        SimulationState::new(config, Some(12345)).expect("valid config")
    }

    fn place_bomb(state: &mut SimulationState, x: i32, y: i32) {
        let size = state.bomb.rect.width;
        state.bomb.rect = Rect::from_center(IVec2::new(x, y), size, size);
    }

    #[test]
    fn test_displacement_sums_and_cancels() {
        let diag = TickInput {
            up: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(diag.displacement(5), IVec2::new(5, -5));

        let opposed = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(opposed.displacement(5), IVec2::ZERO);
    }

    #[test]
    fn test_tick_moves_player_and_counts() {
        let mut state = new_state(SimConfig::endless());
        place_bomb(&mut state, 1000, 600);

        let input = TickInput {
            down: true,
            ..Default::default()
        };
        let status = tick(&mut state, &input);

        assert_eq!(status, StepStatus::Continuing);
        assert_eq!(state.player.rect.center(), IVec2::new(300, 205));
        assert_eq!(state.player.facing, Facing::Down);
        assert_eq!(state.frames, 1);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_player_blocked_at_wall() {
        let mut state = new_state(SimConfig::endless());
        place_bomb(&mut state, 1000, 600);
        // Top edge flush with the playfield
        state.player.rect.set_center(IVec2::new(300, 45));

        let input = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.rect.center(), IVec2::new(300, 45));
        assert_eq!(state.player.facing, Facing::UpLeft);
    }

    #[test]
    fn test_bomb_reflects_off_right_wall() {
        let mut state = new_state(SimConfig::endless());
        // Player close enough that the bomb coasts on inertia
        state.player.rect.set_center(IVec2::new(900, 325));
        place_bomb(&mut state, 1090, 325);
        state.bomb.velocity = Vec2::new(5.0, 0.0);
        assert_eq!(state.bomb.rect.right(), 1100);

        let status = tick(&mut state, &TickInput::default());
        assert_eq!(status, StepStatus::Continuing);
        assert!(state.bomb.velocity.x < 0.0);
        assert!(state.bomb.rect.right() <= 1100);
    }

    #[test]
    fn test_bomb_grows_around_center() {
        let mut state = new_state(SimConfig::endless());
        place_bomb(&mut state, 600, 400);
        state.player.rect.set_center(IVec2::new(500, 400));
        state.bomb.velocity = Vec2::ZERO;
        state.frames = 300;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.bomb.stage, 1);
        assert_eq!(state.bomb.rect.size(), IVec2::new(40, 40));
        assert_eq!(state.bomb.rect.center(), IVec2::new(600, 400));
    }

    #[test]
    fn test_speed_multiplier_scales_and_truncates() {
        let mut state = new_state(SimConfig::endless());
        state.player.rect.set_center(IVec2::new(300, 300));
        place_bomb(&mut state, 550, 300);
        state.bomb.velocity = Vec2::new(-3.0, 0.0);
        // Stage 9 multiplier 1.9: -3 * 1.9 = -5.7 -> -5
        state.frames = 2700;
        state.bomb.stage = 9;
        state.bomb.rect.resize_centered(200, 200);

        let status = tick(&mut state, &TickInput::default());
        assert_eq!(status, StepStatus::Continuing);
        assert_eq!(state.bomb.rect.center(), IVec2::new(545, 300));
        assert_eq!(state.bomb.velocity, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn test_clear_threshold_exact() {
        let mut config = SimConfig::reference();
        config.clear_frames = Some(10);
        let mut state = new_state(config);
        state.player.rect.set_center(IVec2::new(100, 100));
        place_bomb(&mut state, 1000, 600);

        for _ in 0..9 {
            assert_eq!(tick(&mut state, &TickInput::default()), StepStatus::Continuing);
        }
        let status = tick(&mut state, &TickInput::default());
        assert_eq!(status, StepStatus::Survived { score: 10 });
        assert_eq!(state.frames, 10);
    }

    #[test]
    fn test_overlap_collides_regardless_of_input() {
        let inputs = [
            TickInput::default(),
            TickInput {
                up: true,
                ..Default::default()
            },
            TickInput {
                down: true,
                right: true,
                ..Default::default()
            },
        ];
        for input in inputs {
            let mut state = new_state(SimConfig::endless());
            let center = state.player.rect.center();
            place_bomb(&mut state, center.x, center.y);

            let status = tick(&mut state, &input);
            assert_eq!(status, StepStatus::Collided { score: 1 });
            assert_eq!(state.phase, GamePhase::Collided);
        }
    }

    #[test]
    fn test_terminal_is_sticky() {
        let mut state = new_state(SimConfig::endless());
        let center = state.player.rect.center();
        place_bomb(&mut state, center.x, center.y);
        tick(&mut state, &TickInput::default());

        let frozen = state.clone();
        let status = tick(
            &mut state,
            &TickInput {
                right: true,
                ..Default::default()
            },
        );
        assert_eq!(status, StepStatus::Collided { score: 1 });
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_step_is_pure() {
        let state = new_state(SimConfig::endless());
        let (next, status) = step(&state, &TickInput::default());
        assert_eq!(status, StepStatus::Continuing);
        assert_eq!(state.frames, 0);
        assert_eq!(next.frames, 1);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = new_state(SimConfig::endless());
        let mut state2 = new_state(SimConfig::endless());

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                down: true,
                left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in inputs.iter().cycle().take(200) {
            tick(&mut state1, input);
            tick(&mut state2, input);
        }
        assert_eq!(state1, state2);
    }

    #[test]
    fn test_bomb_center_never_leaves_playfield() {
        let mut state = new_state(SimConfig::endless());
        let field = state.config.playfield.rect();
        for _ in 0..3000 {
            if tick(&mut state, &TickInput::default()).is_terminal() {
                break;
            }
            let center = state.bomb.rect.center();
            assert!(field.contains(&Rect::new(center.x, center.y, 0, 0)));
            assert!(check_bounds(&state.player.rect, state.config.playfield).inside());
        }
    }
}
