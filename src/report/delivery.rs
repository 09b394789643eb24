use std::io::Write;

use tempfile::TempPath;

use crate::config::ImageDelivery;

use super::picture::ImageRenderError;

/// A rendered PNG, either held in memory or written to a temporary file that
/// must be cleaned up once the chat platform has consumed it.
#[derive(Debug)]
pub(crate) enum ImageArtifact {
    Memory(Vec<u8>),
    TempFile(TempPath),
}

impl ImageArtifact {
    pub(crate) fn prepare(
        png_bytes: Vec<u8>,
        delivery: ImageDelivery,
    ) -> Result<Self, ImageRenderError> {
        match delivery {
            ImageDelivery::Memory => Ok(Self::Memory(png_bytes)),
            ImageDelivery::TempFile => {
                let mut file = tempfile::Builder::new()
                    .prefix("emby-report-")
                    .suffix(".png")
                    .tempfile()
                    .map_err(ImageRenderError::TempFile)?;
                file.write_all(&png_bytes)
                    .and_then(|()| file.flush())
                    .map_err(ImageRenderError::TempFile)?;
                Ok(Self::TempFile(file.into_temp_path()))
            }
        }
    }

    /// Deletes the temporary file, if any. Failures are logged and swallowed.
    pub(crate) fn cleanup(self) {
        if let Self::TempFile(path) = self {
            let display = path.display().to_string();
            if let Err(error) = path.close() {
                log::warn!(
                    "report_image_cleanup_failed path={} error={}",
                    display,
                    error
                );
            }
        }
    }
}
