use std::path::{Path, PathBuf};
use std::time::Duration;

use super::schema::{Config, ImageDelivery, ImageTheme, OutputType};

/// Everything one report invocation needs, snapshotted from [`Config`] when the
/// trigger fires so the fetch and render stages never look at the raw config.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub server_url: String,
    pub api_key: String,
    pub request_timeout: Option<Duration>,
    pub output_type: OutputType,
    pub image_delivery: ImageDelivery,
    pub fonts: FontSettings,
    pub theme: ImageTheme,
}

#[derive(Debug, Clone)]
pub struct FontSettings {
    pub bundled: PathBuf,
    pub system: Vec<PathBuf>,
}

impl ReportSettings {
    pub fn from_config(config: &Config, install_dir: &Path) -> Self {
        let font_dir = config
            .report
            .font_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| install_dir.to_path_buf());

        Self {
            server_url: config.emby.url.trim().to_string(),
            api_key: config.emby.api_key.trim().to_string(),
            request_timeout: config.emby.request_timeout_secs.map(Duration::from_secs),
            output_type: config.report.output_type,
            image_delivery: config.report.image_delivery,
            fonts: FontSettings {
                // Joining an absolute path replaces the base, so absolute font_file wins.
                bundled: font_dir.join(config.report.font_file.trim()),
                system: config
                    .report
                    .system_font_paths
                    .iter()
                    .map(PathBuf::from)
                    .collect(),
            },
            theme: config.report.image.clone(),
        }
    }

    pub fn has_server_credentials(&self) -> bool {
        !self.server_url.is_empty() && !self.api_key.is_empty()
    }
}
