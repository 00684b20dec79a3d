//! Bomb growth schedules
//!
//! A schedule maps the elapsed frame count to a stage index, and a stage
//! index to a (size, speed multiplier) pair. Stage indices never decrease
//! and saturate at `max_index`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// One growth level of the bomb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// Edge length of the bomb's square bounding box
    pub size: i32,
    /// Factor applied to the chase velocity
    pub speed_multiplier: f32,
}

/// Frame-driven growth schedule
pub trait GrowthPolicy {
    /// Index of the last stage
    fn max_index(&self) -> usize;

    /// Stage index for an elapsed frame count (monotonic, saturating)
    fn stage_for_frame(&self, frame: u64) -> usize;

    /// Stage data for an index (clamped to `max_index`)
    fn stage(&self, index: usize) -> Stage;

    fn stage_at_frame(&self, frame: u64) -> Stage {
        self.stage(self.stage_for_frame(frame))
    }
}

#[inline]
fn saturating_step(frame: u64, frames_per_step: u64, max_index: usize) -> usize {
    let step = frame / frames_per_step.max(1);
    usize::try_from(step).unwrap_or(usize::MAX).min(max_index)
}

/// Discrete lookup table advanced every `frames_per_stage` frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedGrowth {
    pub stages: Vec<Stage>,
    pub frames_per_stage: u64,
}

impl StagedGrowth {
    /// 20x20 up to 200x200 in 20px steps, multiplier 1.0 up to 1.9
    pub fn reference(frames_per_stage: u64) -> Self {
        let stages = (0..STAGE_COUNT)
            .map(|i| Stage {
                size: STAGE_SIZE_STEP * (i as i32 + 1),
                speed_multiplier: 1.0 + STAGE_SPEED_STEP * i as f32,
            })
            .collect();
        Self {
            stages,
            frames_per_stage,
        }
    }
}

impl Default for StagedGrowth {
    fn default() -> Self {
        Self::reference(FRAMES_PER_STAGE)
    }
}

impl GrowthPolicy for StagedGrowth {
    fn max_index(&self) -> usize {
        self.stages.len().saturating_sub(1)
    }

    fn stage_for_frame(&self, frame: u64) -> usize {
        saturating_step(frame, self.frames_per_stage, self.max_index())
    }

    fn stage(&self, index: usize) -> Stage {
        self.stages[index.min(self.max_index())]
    }
}

/// Continuous growth: the size grows linearly and the speed compounds by
/// `speed_factor` every `frames_per_step` frames, up to `max_steps` steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialGrowth {
    pub base_size: i32,
    pub size_step: i32,
    pub speed_factor: f32,
    pub frames_per_step: u64,
    pub max_steps: u32,
}

impl Default for ExponentialGrowth {
    fn default() -> Self {
        Self {
            base_size: STAGE_SIZE_STEP,
            size_step: 2,
            speed_factor: EXP_SPEED_FACTOR,
            frames_per_step: EXP_FRAMES_PER_STEP,
            max_steps: EXP_MAX_STEPS,
        }
    }
}

impl GrowthPolicy for ExponentialGrowth {
    fn max_index(&self) -> usize {
        self.max_steps as usize
    }

    fn stage_for_frame(&self, frame: u64) -> usize {
        saturating_step(frame, self.frames_per_step, self.max_index())
    }

    fn stage(&self, index: usize) -> Stage {
        let step = i32::try_from(index.min(self.max_index())).unwrap_or(i32::MAX);
        Stage {
            size: self
                .base_size
                .saturating_add(self.size_step.saturating_mul(step)),
            speed_multiplier: self.speed_factor.powi(step),
        }
    }
}

/// Growth model selected by configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum GrowthConfig {
    Staged(StagedGrowth),
    Exponential(ExponentialGrowth),
}

impl Default for GrowthConfig {
    fn default() -> Self {
        GrowthConfig::Staged(StagedGrowth::default())
    }
}

impl GrowthConfig {
    /// Reject schedules that could not be evaluated for every frame
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            GrowthConfig::Staged(staged) => {
                if staged.stages.is_empty() {
                    return Err(ConfigError::EmptyGrowthTable);
                }
                if staged.frames_per_stage == 0 {
                    return Err(ConfigError::ZeroFramesPerStage);
                }
                for (index, stage) in staged.stages.iter().enumerate() {
                    check_stage(index, stage)?;
                }
            }
            GrowthConfig::Exponential(exp) => {
                if exp.frames_per_step == 0 {
                    return Err(ConfigError::ZeroFramesPerStage);
                }
                let steps = i32::try_from(exp.max_steps).map_err(|_| {
                    ConfigError::TooManyGrowthSteps {
                        max_steps: exp.max_steps,
                    }
                })?;
                if !exp.speed_factor.is_finite() || exp.speed_factor <= 0.0 {
                    return Err(ConfigError::InvalidSpeedMultiplier {
                        index: 1,
                        multiplier: exp.speed_factor,
                    });
                }
                if exp.size_step < 0 {
                    return Err(ConfigError::InvalidStageSize {
                        index: 1,
                        size: exp.base_size.saturating_add(exp.size_step),
                    });
                }
                // Sizes grow monotonically, so the first and last stage bound the rest
                let last_size = exp
                    .size_step
                    .checked_mul(steps)
                    .and_then(|grown| exp.base_size.checked_add(grown))
                    .ok_or(ConfigError::GrowthOverflow {
                        max_steps: exp.max_steps,
                    })?;
                check_stage(0, &self.stage(0))?;
                check_stage(
                    self.max_index(),
                    &Stage {
                        size: last_size,
                        speed_multiplier: exp.speed_factor.powi(steps),
                    },
                )?;
            }
        }
        Ok(())
    }

    /// Largest bomb size the schedule can produce
    pub fn max_size(&self) -> i32 {
        match self {
            GrowthConfig::Staged(staged) => {
                staged.stages.iter().map(|s| s.size).max().unwrap_or(0)
            }
            GrowthConfig::Exponential(exp) => {
                let first = exp.stage(0).size;
                let last = exp.stage(exp.max_index()).size;
                first.max(last)
            }
        }
    }
}

fn check_stage(index: usize, stage: &Stage) -> Result<(), ConfigError> {
    if stage.size <= 0 {
        return Err(ConfigError::InvalidStageSize {
            index,
            size: stage.size,
        });
    }
    let m = stage.speed_multiplier;
    if !m.is_finite() || m <= 0.0 {
        return Err(ConfigError::InvalidSpeedMultiplier {
            index,
            multiplier: m,
        });
    }
    Ok(())
}

impl GrowthPolicy for GrowthConfig {
    fn max_index(&self) -> usize {
        match self {
            GrowthConfig::Staged(g) => g.max_index(),
            GrowthConfig::Exponential(g) => g.max_index(),
        }
    }

    fn stage_for_frame(&self, frame: u64) -> usize {
        match self {
            GrowthConfig::Staged(g) => g.stage_for_frame(frame),
            GrowthConfig::Exponential(g) => g.stage_for_frame(frame),
        }
    }

    fn stage(&self, index: usize) -> Stage {
        match self {
            GrowthConfig::Staged(g) => g.stage(index),
            GrowthConfig::Exponential(g) => g.stage(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table() {
        let growth = StagedGrowth::default();
        assert_eq!(growth.stages.len(), 10);
        assert_eq!(growth.stage(0).size, 20);
        assert_eq!(growth.stage(9).size, 200);
        assert!((growth.stage(9).speed_multiplier - 1.9).abs() < 1e-5);
    }

    #[test]
    fn test_staged_boundaries() {
        let growth = StagedGrowth::default();
        assert_eq!(growth.stage_for_frame(0), 0);
        assert_eq!(growth.stage_for_frame(299), 0);
        assert_eq!(growth.stage_for_frame(300), 1);
        assert_eq!(growth.stage_for_frame(2700), 9);
        assert_eq!(growth.stage_for_frame(u64::MAX), 9);
    }

    #[test]
    fn test_exponential_compounds() {
        let growth = ExponentialGrowth::default();
        assert_eq!(growth.stage_for_frame(49), 0);
        assert_eq!(growth.stage_for_frame(50), 1);
        assert_eq!(growth.stage(1).size, 22);
        assert!((growth.stage(2).speed_multiplier - 1.0404).abs() < 1e-4);
        assert_eq!(growth.stage_for_frame(u64::MAX), EXP_MAX_STEPS as usize);
    }

    #[test]
    fn test_config_dispatch() {
        let staged = GrowthConfig::default();
        assert_eq!(staged.stage_at_frame(600).size, 60);

        let exp = GrowthConfig::Exponential(ExponentialGrowth::default());
        assert_eq!(exp.stage_at_frame(100).size, 24);
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        let growth = GrowthConfig::Staged(StagedGrowth {
            stages: Vec::new(),
            frames_per_stage: 300,
        });
        assert!(matches!(
            growth.validate(),
            Err(ConfigError::EmptyGrowthTable)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_multiplier() {
        let mut staged = StagedGrowth::default();
        staged.stages[3].speed_multiplier = f32::NAN;
        assert!(matches!(
            GrowthConfig::Staged(staged).validate(),
            Err(ConfigError::InvalidSpeedMultiplier { index: 3, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_size_overflow() {
        let growth = GrowthConfig::Exponential(ExponentialGrowth {
            size_step: 1000,
            speed_factor: 1.0,
            max_steps: 3_000_000,
            ..ExponentialGrowth::default()
        });
        assert!(matches!(
            growth.validate(),
            Err(ConfigError::GrowthOverflow { max_steps: 3_000_000 })
        ));
    }

    #[test]
    fn test_validate_rejects_huge_step_count_without_iterating() {
        let growth = GrowthConfig::Exponential(ExponentialGrowth {
            size_step: 0,
            max_steps: u32::MAX,
            ..ExponentialGrowth::default()
        });
        assert!(matches!(
            growth.validate(),
            Err(ConfigError::TooManyGrowthSteps { max_steps: u32::MAX })
        ));
    }

    #[test]
    fn test_validate_rejects_runaway_speed() {
        let growth = GrowthConfig::Exponential(ExponentialGrowth {
            size_step: 0,
            speed_factor: 2.0,
            max_steps: 1_000,
            ..ExponentialGrowth::default()
        });
        assert!(matches!(
            growth.validate(),
            Err(ConfigError::InvalidSpeedMultiplier { index: 1_000, .. })
        ));
    }

    #[test]
    fn test_max_size() {
        assert_eq!(GrowthConfig::default().max_size(), 200);
        assert_eq!(
            GrowthConfig::Exponential(ExponentialGrowth::default()).max_size(),
            20 + 2 * EXP_MAX_STEPS as i32
        );
    }
}
