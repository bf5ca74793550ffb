use std::time::Duration;
use thiserror::Error;

use crate::core::util::grid_layout::Viewport;

pub const MIN_TILE_SIDE: u32 = 1;
pub const MAX_TILE_SIDE: u32 = 250;
pub const MIN_STEP_DELAY: Duration = Duration::ZERO;
pub const MAX_STEP_DELAY: Duration = Duration::from_millis(1000);

pub const DEFAULT_TILE_SIDE: u32 = 30;
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(20);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tile side {0} must be between 1 and 250")]
    TileSideOutOfRange(u32),
    #[error("step delay of {0} ms must be between 0 and 1000 ms")]
    StepDelayOutOfRange(u64),
}

/// Settings the controller applies when it restarts the maze.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Side of a tile in pixels.
    pub tile_side: u32,
    /// Pause between animation frames. Zero runs a phase without intermediate frames.
    pub step_delay: Duration,
    pub viewport: Viewport,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tile_side: DEFAULT_TILE_SIDE,
            step_delay: DEFAULT_STEP_DELAY,
            viewport: Viewport::default(),
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tile_side(self.tile_side)?;
        validate_step_delay(self.step_delay.as_millis() as u64)?;
        Ok(())
    }
}

pub fn validate_tile_side(tile_side: u32) -> Result<u32, ConfigError> {
    if (MIN_TILE_SIDE..=MAX_TILE_SIDE).contains(&tile_side) {
        Ok(tile_side)
    } else {
        Err(ConfigError::TileSideOutOfRange(tile_side))
    }
}

pub fn validate_step_delay(millis: u64) -> Result<Duration, ConfigError> {
    let step_delay = Duration::from_millis(millis);

    if (MIN_STEP_DELAY..=MAX_STEP_DELAY).contains(&step_delay) {
        Ok(step_delay)
    } else {
        Err(ConfigError::StepDelayOutOfRange(millis))
    }
}
