//! Presentation descriptors
//!
//! Plain data telling a rendering layer what to draw. Nothing here loads
//! assets, opens windows or blocks.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::sim::{Facing, Playfield, Rect, StepStatus};

pub const CAPTION: &str = "Run! Koukaton";
pub const BACKGROUND: &str = "fig/pg_bg.jpg";

/// RGB color
pub type Rgb = (u8, u8, u8);

pub const RED: Rgb = (255, 0, 0);
pub const GREEN: Rgb = (0, 255, 0);
pub const WHITE: Rgb = (255, 255, 255);
pub const BLACK: Rgb = (0, 0, 0);

/// An image asset drawn at a scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteKey {
    pub path: &'static str,
    pub scale: f32,
}

const PLAYER_SCALE: f32 = 0.9;
const END_SCREEN_SCALE: f32 = 1.5;

/// Player sprite for a facing. Diagonals use the horizontal sprite.
pub fn player_sprite(facing: Facing) -> SpriteKey {
    let path = match facing {
        Facing::Neutral | Facing::Up => "fig/3.png",
        Facing::Down => "fig/1.png",
        Facing::Right | Facing::UpRight | Facing::DownRight => "fig/0.png",
        Facing::Left | Facing::UpLeft | Facing::DownLeft => "fig/2.png",
    };
    SpriteKey {
        path,
        scale: PLAYER_SCALE,
    }
}

/// Filled circle inscribed in the bomb's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center: IVec2,
    pub radius: i32,
    pub color: Rgb,
}

pub fn bomb_shape(rect: &Rect) -> CircleShape {
    CircleShape {
        center: rect.center(),
        radius: rect.width.min(rect.height) / 2,
        color: RED,
    }
}

/// A line of text anchored at a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub font_size: u32,
    pub color: Rgb,
    pub anchor: IVec2,
    /// `anchor` is the text center rather than its top-left
    pub centered: bool,
}

/// Final screen shown for a terminal status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndScreen {
    pub background: Rgb,
    pub sprite: SpriteKey,
    pub sprite_center: IVec2,
    pub lines: Vec<TextLine>,
    pub hold_ms: u32,
}

/// Everything a renderer needs that does not change during a run
#[derive(Debug, Clone, PartialEq)]
pub struct GameContext {
    pub caption: &'static str,
    pub playfield: Playfield,
    pub tick_rate: u32,
    pub background: &'static str,
    pub hud_font_size: u32,
}

impl GameContext {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            caption: CAPTION,
            playfield: config.playfield,
            tick_rate: config.tick_rate,
            background: BACKGROUND,
            hud_font_size: 50,
        }
    }

    fn center(&self) -> IVec2 {
        IVec2::new(self.playfield.width / 2, self.playfield.height / 2)
    }

    /// Score readout in the top-left corner
    pub fn hud_text(&self, score: u64) -> TextLine {
        TextLine {
            text: format!("Score: {score}"),
            font_size: self.hud_font_size,
            color: WHITE,
            anchor: IVec2::new(10, 10),
            centered: false,
        }
    }

    /// End screen for a terminal status, `None` while the run continues
    pub fn end_screen(&self, status: StepStatus) -> Option<EndScreen> {
        let center = self.center();
        match status {
            StepStatus::Continuing => None,
            StepStatus::Collided { .. } => Some(EndScreen {
                background: BLACK,
                sprite: SpriteKey {
                    path: "fig/8.png",
                    scale: END_SCREEN_SCALE,
                },
                sprite_center: center + IVec2::new(0, 100),
                lines: vec![TextLine {
                    text: "GameOver".to_string(),
                    font_size: 100,
                    color: RED,
                    anchor: center,
                    centered: true,
                }],
                hold_ms: 2000,
            }),
            StepStatus::Survived { score } => Some(EndScreen {
                background: BLACK,
                sprite: SpriteKey {
                    path: "fig/6.png",
                    scale: END_SCREEN_SCALE,
                },
                sprite_center: center + IVec2::new(0, 80),
                lines: vec![
                    TextLine {
                        text: "Clear!".to_string(),
                        font_size: 100,
                        color: GREEN,
                        anchor: center - IVec2::new(0, 40),
                        centered: true,
                    },
                    TextLine {
                        text: format!("Score: {score}"),
                        font_size: 50,
                        color: WHITE,
                        anchor: center + IVec2::new(0, 140),
                        centered: true,
                    },
                ],
                hold_ms: 2000,
            }),
        }
    }
}
