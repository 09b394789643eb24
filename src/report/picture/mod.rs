mod canvas;
mod encode;
mod error;
mod executor;
mod fonts;
mod layout;

use crate::config::{FontSettings, ImageTheme};
use crate::emby::Report;

pub(crate) use encode::EncodedImage;
pub(crate) use error::ImageRenderError;
pub(crate) use executor::run_render_task;

use encode::{encode_with_size_cap, PNG_SIZE_CAP_BYTES};
use fonts::{resolve_font, TextFace};
use layout::layout_report;

/// Draws the report (or the fetch-failed placeholder when `report` is absent)
/// and returns PNG bytes capped at 2 MiB on a best-effort basis.
pub(crate) fn render_report_png(
    report: Option<&Report>,
    fonts: &FontSettings,
    theme: &ImageTheme,
) -> Result<EncodedImage, ImageRenderError> {
    let resolved = resolve_font(fonts)?;
    let body = TextFace::new(resolved.font.clone(), theme.body_font_px);
    let title = TextFace::new(resolved.font, theme.title_font_px);

    let layout = layout_report(report, theme, &body, &title);
    let canvas = canvas::paint(
        &layout,
        (theme.gradient_top, theme.gradient_bottom),
        &body,
        &title,
    )?;

    let encoded = encode_with_size_cap(&canvas, PNG_SIZE_CAP_BYTES)?;
    log::debug!(
        "report_image_rendered font={:?} width={} height={} bytes={} downscaled={}",
        resolved.source,
        encoded.width,
        encoded.height,
        encoded.png_bytes.len(),
        encoded.downscaled
    );
    Ok(encoded)
}
