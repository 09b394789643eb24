use std::io::Cursor;

use image::{imageops, imageops::FilterType, ImageFormat, RgbImage};

use super::error::ImageRenderError;

pub(crate) const PNG_SIZE_CAP_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone)]
pub(crate) struct EncodedImage {
    pub(crate) png_bytes: Vec<u8>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) downscaled: bool,
}

/// Encodes once; over the cap, halves both dimensions and encodes one more
/// time. The second result is returned even if it is still over the cap.
pub(super) fn encode_with_size_cap(
    image: &RgbImage,
    cap_bytes: usize,
) -> Result<EncodedImage, ImageRenderError> {
    let png_bytes = encode_png(image)?;
    if png_bytes.len() <= cap_bytes {
        return Ok(EncodedImage {
            png_bytes,
            width: image.width(),
            height: image.height(),
            downscaled: false,
        });
    }

    let width = (image.width() / 2).max(1);
    let height = (image.height() / 2).max(1);
    log::info!(
        "report_image_downscaled original_bytes={} cap_bytes={} width={} height={}",
        png_bytes.len(),
        cap_bytes,
        width,
        height
    );

    let resized = imageops::resize(image, width, height, FilterType::Triangle);
    let png_bytes = encode_png(&resized)?;
    if png_bytes.len() > cap_bytes {
        log::warn!(
            "report_image_still_over_cap bytes={} cap_bytes={}",
            png_bytes.len(),
            cap_bytes
        );
    }

    Ok(EncodedImage {
        png_bytes,
        width,
        height,
        downscaled: true,
    })
}

fn encode_png(image: &RgbImage) -> Result<Vec<u8>, ImageRenderError> {
    let mut output = Cursor::new(Vec::new());
    image
        .write_to(&mut output, ImageFormat::Png)
        .map_err(|error| ImageRenderError::PngEncoding(error.to_string()))?;
    Ok(output.into_inner())
}
