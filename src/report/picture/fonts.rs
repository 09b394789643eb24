use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::RgbImage;

use crate::config::FontSettings;

use super::error::ImageRenderError;

/// Latin-only last resort. CJK text renders as missing-glyph boxes with it.
const BUILTIN_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSansMono.ttf");

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FontSource {
    Bundled(PathBuf),
    System(PathBuf),
    Builtin,
}

pub(crate) struct ResolvedFont {
    pub(crate) font: FontArc,
    pub(crate) source: FontSource,
}

/// Walks bundled file, then system paths, then the compiled-in font. The first
/// candidate that reads and parses wins.
pub(crate) fn resolve_font(settings: &FontSettings) -> Result<ResolvedFont, ImageRenderError> {
    let bundled: (&PathBuf, fn(PathBuf) -> FontSource) = (&settings.bundled, FontSource::Bundled);
    let candidates = std::iter::once(bundled).chain(
        settings
            .system
            .iter()
            .map(|path| (path, FontSource::System as fn(PathBuf) -> FontSource)),
    );

    for (path, tag) in candidates {
        match load_font_file(path) {
            Ok(font) => {
                let source = tag(path.clone());
                log::debug!("font_resolved source={:?}", source);
                return Ok(ResolvedFont { font, source });
            }
            Err(reason) => {
                log::debug!(
                    "font_candidate_skipped path={} reason={}",
                    path.display(),
                    reason
                );
            }
        }
    }

    let font = FontArc::try_from_slice(BUILTIN_FONT)
        .map_err(|error| ImageRenderError::FontUnavailable(format!("{:?}", error)))?;
    log::warn!("font_fallback_builtin cjk_glyphs=degraded");
    Ok(ResolvedFont {
        font,
        source: FontSource::Builtin,
    })
}

fn load_font_file(path: &Path) -> Result<FontArc, String> {
    let bytes = std::fs::read(path).map_err(|error| error.to_string())?;
    FontArc::try_from_vec(bytes).map_err(|error| format!("{:?}", error))
}

/// A font at one pixel size. Titles use a larger face of the same font.
#[derive(Clone)]
pub(super) struct TextFace {
    font: FontArc,
    scale: PxScale,
}

impl TextFace {
    pub(super) fn new(font: FontArc, px: f32) -> Self {
        Self {
            font,
            scale: PxScale::from(px),
        }
    }

    pub(super) fn line_height(&self) -> f32 {
        self.font.as_scaled(self.scale).height()
    }

    pub(super) fn width(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let glyph_id = scaled.glyph_id(ch);
            if let Some(previous) = previous {
                width += scaled.kern(previous, glyph_id);
            }
            width += scaled.h_advance(glyph_id);
            previous = Some(glyph_id);
        }
        width
    }

    /// Draws `text` with its line box starting at (`left`, `top`), alpha-blended
    /// onto the canvas. Pixels outside the canvas are dropped.
    pub(super) fn draw(
        &self,
        canvas: &mut RgbImage,
        left: f32,
        top: f32,
        color: [u8; 3],
        text: &str,
    ) {
        let scaled = self.font.as_scaled(self.scale);
        let baseline = top + scaled.ascent();
        let (canvas_width, canvas_height) = canvas.dimensions();

        let mut caret = left;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let glyph_id = scaled.glyph_id(ch);
            if let Some(previous) = previous {
                caret += scaled.kern(previous, glyph_id);
            }
            let glyph = glyph_id.with_scale_and_position(self.scale, point(caret, baseline));
            caret += scaled.h_advance(glyph_id);
            previous = Some(glyph_id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i64 + i64::from(gx);
                let y = bounds.min.y as i64 + i64::from(gy);
                if x < 0 || y < 0 || x >= i64::from(canvas_width) || y >= i64::from(canvas_height) {
                    return;
                }
                let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                let alpha = coverage.clamp(0.0, 1.0);
                for (channel, target) in pixel.0.iter_mut().zip(color) {
                    *channel = (f32::from(*channel) * (1.0 - alpha) + f32::from(target) * alpha)
                        .round() as u8;
                }
            });
        }
    }
}
