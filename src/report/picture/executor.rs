use std::panic::AssertUnwindSafe;

use tokio::task::JoinError;

use crate::config::{FontSettings, ImageTheme};
use crate::emby::Report;

use super::{error::ImageRenderError, render_report_png, EncodedImage};

/// Rendering is CPU-bound; it runs on the blocking pool and a panic inside it
/// comes back as an error instead of tearing down the handler.
pub(crate) async fn run_render_task(
    report: Option<Report>,
    fonts: FontSettings,
    theme: ImageTheme,
) -> Result<EncodedImage, ImageRenderError> {
    let render_handle = tokio::task::spawn_blocking(move || {
        std::panic::catch_unwind(AssertUnwindSafe(|| {
            render_report_png(report.as_ref(), &fonts, &theme)
        }))
        .map_err(|panic_payload| ImageRenderError::Panic(describe_panic_payload(panic_payload)))?
    });

    match render_handle.await {
        Ok(inner_result) => inner_result,
        Err(join_error) => Err(join_error_to_error(join_error)),
    }
}

fn join_error_to_error(join_error: JoinError) -> ImageRenderError {
    ImageRenderError::Join(join_error.to_string())
}

fn describe_panic_payload(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }

    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }

    "unknown panic payload".to_string()
}
