use super::schema::{ImageDelivery, ImageTheme, OutputType, Report};

pub(super) fn default_output_type() -> OutputType {
    OutputType::Markdown
}

pub(super) fn default_image_delivery() -> ImageDelivery {
    ImageDelivery::Memory
}

pub(super) fn default_font_file() -> String {
    "NotoSansSC-Regular.otf".to_string()
}

pub(super) fn default_system_font_paths() -> Vec<String> {
    [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
        "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
        "/System/Library/Fonts/PingFang.ttc",
        "/System/Library/Fonts/STHeiti Medium.ttc",
        "/Library/Fonts/Arial Unicode.ttf",
        "C:\\Windows\\Fonts\\msyh.ttc",
        "C:\\Windows\\Fonts\\simhei.ttf",
    ]
    .iter()
    .map(|path| path.to_string())
    .collect()
}

pub(super) fn default_image_width() -> u32 {
    1280
}

pub(super) fn default_image_min_height() -> u32 {
    720
}

pub(super) fn default_body_font_px() -> f32 {
    28.0
}

pub(super) fn default_title_font_px() -> f32 {
    40.0
}

pub(super) fn default_gradient_top() -> [u8; 3] {
    [24, 32, 56]
}

pub(super) fn default_gradient_bottom() -> [u8; 3] {
    [64, 40, 96]
}

impl Default for Report {
    fn default() -> Self {
        Self {
            output_type: default_output_type(),
            image_delivery: default_image_delivery(),
            font_file: default_font_file(),
            font_dir: None,
            system_font_paths: default_system_font_paths(),
            image: ImageTheme::default(),
        }
    }
}

impl Default for ImageTheme {
    fn default() -> Self {
        Self {
            width: default_image_width(),
            min_height: default_image_min_height(),
            body_font_px: default_body_font_px(),
            title_font_px: default_title_font_px(),
            gradient_top: default_gradient_top(),
            gradient_bottom: default_gradient_bottom(),
        }
    }
}
