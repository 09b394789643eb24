use image::RgbImage;
use plotters::prelude::*;

use super::error::ImageRenderError;
use super::fonts::TextFace;
use super::layout::{FaceKind, ReportLayout, Shape};

/// Rasterizes a finished layout: gradient background, then shapes, then text.
pub(super) fn paint(
    layout: &ReportLayout,
    gradient: ([u8; 3], [u8; 3]),
    body: &TextFace,
    title: &TextFace,
) -> Result<RgbImage, ImageRenderError> {
    let (width, height) = (layout.width, layout.height);
    let mut rgb_buffer = vec![0u8; width as usize * height as usize * 3];
    fill_vertical_gradient(&mut rgb_buffer, width, gradient.0, gradient.1);

    {
        let drawing_area =
            BitMapBackend::with_buffer(&mut rgb_buffer, (width, height)).into_drawing_area();
        for shape in &layout.shapes {
            draw_shape(&drawing_area, shape)?;
        }
        drawing_area
            .present()
            .map_err(|error| ImageRenderError::Backend(format!("present error: {:?}", error)))?;
    }

    let mut canvas = RgbImage::from_raw(width, height, rgb_buffer).ok_or_else(|| {
        ImageRenderError::Backend("image buffer conversion failed".to_string())
    })?;

    for item in &layout.texts {
        let face = match item.face {
            FaceKind::Title => title,
            FaceKind::Body => body,
        };
        face.draw(&mut canvas, item.left, item.top, item.color, &item.text);
    }

    Ok(canvas)
}

fn draw_shape(
    drawing_area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    shape: &Shape,
) -> Result<(), ImageRenderError> {
    let result = match *shape {
        Shape::Fill {
            left,
            top,
            right,
            bottom,
            color,
        } => drawing_area.draw(&Rectangle::new(
            [(left, top), (right, bottom)],
            rgb(color).filled(),
        )),
        Shape::Rule {
            y,
            left,
            right,
            thickness,
            color,
        } => drawing_area.draw(&PathElement::new(
            vec![(left, y), (right, y)],
            rgb(color).stroke_width(thickness),
        )),
    };

    result.map_err(|error| ImageRenderError::Backend(format!("shape draw error: {:?}", error)))
}

fn rgb(color: [u8; 3]) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

/// Each scanline gets one color, interpolated linearly from `top` to `bottom`.
fn fill_vertical_gradient(buffer: &mut [u8], width: u32, top: [u8; 3], bottom: [u8; 3]) {
    let row_len = width as usize * 3;
    if row_len == 0 {
        return;
    }
    let rows = buffer.len() / row_len;
    let span = rows.saturating_sub(1).max(1) as f32;

    for (row_index, row) in buffer.chunks_exact_mut(row_len).enumerate() {
        let color = lerp_color(top, bottom, row_index as f32 / span);
        for pixel in row.chunks_exact_mut(3) {
            pixel.copy_from_slice(&color);
        }
    }
}

fn lerp_color(from: [u8; 3], to: [u8; 3], t: f32) -> [u8; 3] {
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    [mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])]
}
