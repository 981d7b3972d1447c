//! Environment configuration.

use std::env;

use crate::core::measure::{
    TextStyle, CELL_ASPECT_RATIO, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_PX,
};

pub const DEBUG_VAR: &str = "RECIPIENT_LINE_DEBUG";
pub const LOG_FILE_VAR: &str = "RECIPIENT_LINE_LOG";
pub const FONT_SIZE_VAR: &str = "RECIPIENT_LINE_FONT_SIZE";
pub const FONT_FAMILY_VAR: &str = "RECIPIENT_LINE_FONT_FAMILY";
pub const CELL_WIDTH_VAR: &str = "RECIPIENT_LINE_CELL_WIDTH_PX";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvConfig {
    pub debug: bool,
    pub log_file: Option<String>,
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub cell_width_px: Option<f32>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            debug: env_flag(DEBUG_VAR),
            log_file: env_string_opt(LOG_FILE_VAR),
            font_size: env_pixels_opt(FONT_SIZE_VAR),
            font_family: env_string_opt(FONT_FAMILY_VAR),
            cell_width_px: env_pixels_opt(CELL_WIDTH_VAR),
        }
    }

    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(
            self.font_size.unwrap_or(DEFAULT_FONT_SIZE_PX),
            self.font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        )
    }

    /// Configured cell width, or the monospace advance of the resolved font size.
    pub fn resolved_cell_width_px(&self) -> f32 {
        self.cell_width_px
            .unwrap_or_else(|| self.text_style().font_size * CELL_ASPECT_RATIO)
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

fn env_pixels_opt(key: &str) -> Option<f32> {
    env_string_opt(key)
        .and_then(|value| value.trim().parse::<f32>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
}
