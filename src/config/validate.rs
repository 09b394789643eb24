use std::path::PathBuf;

use teloxide::types::ChatId;
use thiserror::Error;

use super::schema::Config;

const MIN_IMAGE_WIDTH: u32 = 320;
const MIN_IMAGE_HEIGHT: u32 = 240;
pub const MAX_IMAGE_WIDTH: u32 = 4096;
/// Hard ceiling for the canvas; long library tables stop growing here.
pub const MAX_IMAGE_HEIGHT: u32 = 8192;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "CONFIG_READ_FAILED",
            Self::Parse { .. } => "CONFIG_PARSE_FAILED",
            Self::Validation(_) => "CONFIG_INVALID",
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "bot_token must not be empty".to_string(),
            ));
        }
        if self.emby.request_timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "emby.request_timeout_secs must be greater than 0 when set".to_string(),
            ));
        }
        if self.report.font_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "report.font_file must not be empty".to_string(),
            ));
        }

        let image = &self.report.image;
        if !(MIN_IMAGE_WIDTH..=MAX_IMAGE_WIDTH).contains(&image.width) {
            return Err(ConfigError::Validation(format!(
                "report.image.width must be between {} and {}",
                MIN_IMAGE_WIDTH, MAX_IMAGE_WIDTH
            )));
        }
        if !(MIN_IMAGE_HEIGHT..=MAX_IMAGE_HEIGHT).contains(&image.min_height) {
            return Err(ConfigError::Validation(format!(
                "report.image.min_height must be between {} and {}",
                MIN_IMAGE_HEIGHT, MAX_IMAGE_HEIGHT
            )));
        }
        validate_font_px("report.image.body_font_px", image.body_font_px)?;
        validate_font_px("report.image.title_font_px", image.title_font_px)?;
        if image.title_font_px <= image.body_font_px {
            return Err(ConfigError::Validation(
                "report.image.title_font_px must be larger than body_font_px".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_chat_allowed(&self, chat_id: ChatId) -> bool {
        self.allowed_chat_ids.is_empty() || self.allowed_chat_ids.contains(&chat_id.0)
    }
}

fn validate_font_px(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_nan() || !(1.0..=256.0).contains(&value) {
        return Err(ConfigError::Validation(format!(
            "{} must be between 1 and 256",
            field
        )));
    }
    Ok(())
}
