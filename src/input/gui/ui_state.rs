use std::time::Duration;

use crate::controllers::interactive::config::{
    DEFAULT_STEP_DELAY, DEFAULT_TILE_SIDE, validate_step_delay, validate_tile_side,
};

/// Settings entered in the control panel and accepted by Generate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub tile_side: u32,
    pub step_delay: Duration,
}

/// Text field contents and validation state of the control panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeUiState {
    pub tile_side_text: String,
    pub step_delay_text: String,
    pub tile_side_invalid: bool,
    pub step_delay_invalid: bool,
    pub last_error_message: Option<String>,
}

impl Default for MazeUiState {
    fn default() -> Self {
        Self {
            tile_side_text: DEFAULT_TILE_SIDE.to_string(),
            step_delay_text: DEFAULT_STEP_DELAY.as_millis().to_string(),
            tile_side_invalid: false,
            step_delay_invalid: false,
            last_error_message: None,
        }
    }
}

impl MazeUiState {
    /// Parses both fields, flagging every invalid one. Returns `None` when
    /// either field is rejected.
    pub fn generate_request(&mut self) -> Option<GenerateRequest> {
        let tile_side = parse_tile_side(&self.tile_side_text);
        let step_delay = parse_step_delay(&self.step_delay_text);

        self.tile_side_invalid = tile_side.is_none();
        self.step_delay_invalid = step_delay.is_none();

        Some(GenerateRequest {
            tile_side: tile_side?,
            step_delay: step_delay?,
        })
    }
}

fn parse_tile_side(text: &str) -> Option<u32> {
    text.trim()
        .parse::<u32>()
        .ok()
        .and_then(|value| validate_tile_side(value).ok())
}

fn parse_step_delay(text: &str) -> Option<Duration> {
    text.trim()
        .parse::<u64>()
        .ok()
        .and_then(|millis| validate_step_delay(millis).ok())
}
