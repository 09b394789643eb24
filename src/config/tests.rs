use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::tempdir;

use super::io::parse_config;
use super::{load_config, ConfigError, ImageDelivery, OutputType, ReportSettings};

const MINIMAL: &str = r#"bot_token = "123456:abc""#;

fn full_config_toml(output_type: &str) -> String {
    format!(
        r#"bot_token = "123456:abc"
allowed_chat_ids = [42, -100200300]

[emby]
url = " https://emby.lan:8920 "
api_key = "secret"
request_timeout_secs = 15

[report]
output_type = "{output_type}"
image_delivery = "temp_file"
font_file = "custom.ttf"
font_dir = "/opt/emby/fonts"
system_font_paths = ["/fonts/a.ttc", "/fonts/b.ttf"]

[report.image]
width = 1024
min_height = 600
body_font_px = 24.0
title_font_px = 36.0
gradient_top = [0, 0, 0]
gradient_bottom = [255, 255, 255]
"#
    )
}

#[test]
fn minimal_config_uses_defaults() {
    let config = parse_config(MINIMAL, Path::new("inline")).expect("minimal config");

    assert!(config.allowed_chat_ids.is_empty());
    assert!(config.emby.url.is_empty());
    assert!(config.emby.api_key.is_empty());
    assert_eq!(config.emby.request_timeout_secs, None);
    assert_eq!(config.report.output_type, OutputType::Markdown);
    assert_eq!(config.report.image_delivery, ImageDelivery::Memory);
    assert_eq!(config.report.font_file, "NotoSansSC-Regular.otf");
    assert!(!config.report.system_font_paths.is_empty());
    assert_eq!(config.report.image.width, 1280);
    assert_eq!(config.report.image.min_height, 720);
}

#[test]
fn loads_full_config_from_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, full_config_toml("image")).expect("write config");

    let config = load_config(&path).expect("load config");

    assert_eq!(config.allowed_chat_ids, vec![42, -100200300]);
    assert_eq!(config.report.output_type, OutputType::Image);
    assert_eq!(config.report.image_delivery, ImageDelivery::TempFile);
    assert_eq!(config.report.image.gradient_bottom, [255, 255, 255]);
}

#[test]
fn rejects_unknown_output_type() {
    let result = parse_config(&full_config_toml("html"), Path::new("inline"));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn missing_file_reports_read_error_with_path() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let error = load_config(&path).expect_err("missing file must fail");
    assert!(matches!(error, ConfigError::Read { .. }));
    assert!(error.to_string().contains("absent.toml"));
    assert_eq!(error.code(), "CONFIG_READ_FAILED");
}

#[test]
fn rejects_empty_bot_token() {
    let result = parse_config(r#"bot_token = "  ""#, Path::new("inline"));
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn rejects_zero_request_timeout() {
    let raw = format!("{}\n[emby]\nrequest_timeout_secs = 0\n", MINIMAL);
    let result = parse_config(&raw, Path::new("inline"));
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn rejects_title_font_not_larger_than_body() {
    let raw = format!(
        "{}\n[report.image]\nbody_font_px = 30.0\ntitle_font_px = 30.0\n",
        MINIMAL
    );
    let result = parse_config(&raw, Path::new("inline"));
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn rejects_oversized_canvas_dimensions() {
    for section in ["width = 100000", "min_height = 100000"] {
        let raw = format!("{}\n[report.image]\n{}\n", MINIMAL, section);
        let result = parse_config(&raw, Path::new("inline"));
        assert!(
            matches!(result, Err(ConfigError::Validation(_))),
            "{}",
            section
        );
    }

    let raw = format!("{}\n[report.image]\nwidth = 4096\nmin_height = 8192\n", MINIMAL);
    assert!(parse_config(&raw, Path::new("inline")).is_ok());
}

#[test]
fn chat_allow_list_is_open_when_empty() {
    let open = parse_config(MINIMAL, Path::new("inline")).expect("config");
    assert!(open.is_chat_allowed(teloxide::types::ChatId(7)));

    let restricted =
        parse_config(&full_config_toml("markdown"), Path::new("inline")).expect("config");
    assert!(restricted.is_chat_allowed(teloxide::types::ChatId(42)));
    assert!(!restricted.is_chat_allowed(teloxide::types::ChatId(7)));
}

#[test]
fn settings_trim_credentials_and_resolve_font_paths() {
    let config = parse_config(&full_config_toml("image"), Path::new("inline")).expect("config");
    let settings = ReportSettings::from_config(&config, Path::new("/usr/local/bin"));

    assert_eq!(settings.server_url, "https://emby.lan:8920");
    assert_eq!(settings.api_key, "secret");
    assert_eq!(settings.request_timeout, Some(Duration::from_secs(15)));
    assert_eq!(settings.fonts.bundled, PathBuf::from("/opt/emby/fonts/custom.ttf"));
    assert_eq!(
        settings.fonts.system,
        vec![PathBuf::from("/fonts/a.ttc"), PathBuf::from("/fonts/b.ttf")]
    );
    assert!(settings.has_server_credentials());
}

#[test]
fn settings_default_font_dir_is_install_dir() {
    let config = parse_config(MINIMAL, Path::new("inline")).expect("config");
    let settings = ReportSettings::from_config(&config, Path::new("/opt/bot"));

    assert_eq!(
        settings.fonts.bundled,
        PathBuf::from("/opt/bot/NotoSansSC-Regular.otf")
    );
    assert!(!settings.has_server_credentials());
}

#[test]
fn whitespace_credentials_count_as_missing() {
    let raw = format!("{}\n[emby]\nurl = \"   \"\napi_key = \"key\"\n", MINIMAL);
    let config = parse_config(&raw, Path::new("inline")).expect("config");
    let settings = ReportSettings::from_config(&config, Path::new("."));

    assert!(!settings.has_server_credentials());
}
