use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bot_token: String,
    #[serde(default)]
    pub allowed_chat_ids: Vec<i64>,
    #[serde(default)]
    pub emby: Emby,
    #[serde(default)]
    pub report: Report,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Emby {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    Markdown,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageDelivery {
    Memory,
    TempFile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    #[serde(default = "default_output_type")]
    pub output_type: OutputType,
    #[serde(default = "default_image_delivery")]
    pub image_delivery: ImageDelivery,
    #[serde(default = "default_font_file")]
    pub font_file: String,
    #[serde(default)]
    pub font_dir: Option<String>,
    #[serde(default = "default_system_font_paths")]
    pub system_font_paths: Vec<String>,
    #[serde(default)]
    pub image: ImageTheme,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageTheme {
    #[serde(default = "default_image_width")]
    pub width: u32,
    #[serde(default = "default_image_min_height")]
    pub min_height: u32,
    #[serde(default = "default_body_font_px")]
    pub body_font_px: f32,
    #[serde(default = "default_title_font_px")]
    pub title_font_px: f32,
    #[serde(default = "default_gradient_top")]
    pub gradient_top: [u8; 3],
    #[serde(default = "default_gradient_bottom")]
    pub gradient_bottom: [u8; 3],
}
