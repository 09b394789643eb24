use crate::config::{ImageTheme, MAX_IMAGE_HEIGHT};
use crate::emby::Report;
use crate::report::text::or_not_available;

use super::fonts::TextFace;

pub(super) const TITLE: &str = "Emby 服务器状态报告";
pub(super) const SUBTITLE: &str = "媒体库统计";
pub(super) const FETCH_FAILED_MESSAGE: &str = "错误：无法获取 Emby 数据。";
const NAME_HEADER: &str = "媒体库名称";
const COUNT_HEADER: &str = "条目数量";

struct ReportStyle;

impl ReportStyle {
    const MARGIN_X: f32 = 80.0;
    const TOP_PADDING: f32 = 48.0;
    const BOTTOM_PADDING: f32 = 48.0;
    const TITLE_GAP: f32 = 14.0;
    const RULE_GAP: f32 = 28.0;
    const LABEL_GUTTER: f32 = 16.0;
    const INFO_LINE_SPACING: f32 = 1.45;
    const SECTION_GAP: f32 = 30.0;
    const ROW_HEIGHT_FACTOR: f32 = 1.5;
    const NAME_COLUMN_INSET: f32 = 30.0;
    // Fraction of canvas width where the count column starts.
    const COUNT_COLUMN_AT: f32 = 0.64;
    const RULE_THICKNESS: u32 = 2;
    const SEPARATOR_THICKNESS: u32 = 1;

    const TITLE_COLOR: [u8; 3] = [255, 214, 102];
    const LABEL_COLOR: [u8; 3] = [160, 176, 208];
    const TEXT_COLOR: [u8; 3] = [236, 240, 248];
    const ERROR_COLOR: [u8; 3] = [255, 128, 128];
    const HEADER_FILL: [u8; 3] = [52, 70, 120];
    const HEADER_TEXT: [u8; 3] = [255, 255, 255];
    const SEPARATOR: [u8; 3] = [96, 106, 148];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FaceKind {
    Title,
    Body,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct TextItem {
    pub(super) face: FaceKind,
    pub(super) left: f32,
    pub(super) top: f32,
    pub(super) color: [u8; 3],
    pub(super) text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Shape {
    Fill {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        color: [u8; 3],
    },
    Rule {
        y: i32,
        left: i32,
        right: i32,
        thickness: u32,
        color: [u8; 3],
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct ReportLayout {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) shapes: Vec<Shape>,
    pub(super) texts: Vec<TextItem>,
}

struct LayoutBuilder<'a> {
    width: f32,
    body: &'a TextFace,
    title: &'a TextFace,
    cursor: f32,
    shapes: Vec<Shape>,
    texts: Vec<TextItem>,
}

impl<'a> LayoutBuilder<'a> {
    fn face(&self, kind: FaceKind) -> &'a TextFace {
        match kind {
            FaceKind::Title => self.title,
            FaceKind::Body => self.body,
        }
    }

    fn text(&mut self, face: FaceKind, left: f32, top: f32, color: [u8; 3], text: &str) {
        self.texts.push(TextItem {
            face,
            left,
            top,
            color,
            text: text.to_string(),
        });
    }

    fn centered_line(&mut self, face: FaceKind, color: [u8; 3], text: &str) {
        let measured = self.face(face).width(text);
        let left = ((self.width - measured) / 2.0).max(0.0);
        let top = self.cursor;
        self.text(face, left, top, color, text);
        self.cursor += self.face(face).line_height();
    }

    fn rule(&mut self, thickness: u32, color: [u8; 3]) {
        self.shapes.push(Shape::Rule {
            y: self.cursor.round() as i32,
            left: ReportStyle::MARGIN_X as i32,
            right: (self.width - ReportStyle::MARGIN_X) as i32,
            thickness,
            color,
        });
    }

    fn label_value(&mut self, label: &str, value: &str) {
        let top = self.cursor;
        let value_left = ReportStyle::MARGIN_X + self.body.width(label) + ReportStyle::LABEL_GUTTER;
        self.text(FaceKind::Body, ReportStyle::MARGIN_X, top, ReportStyle::LABEL_COLOR, label);
        self.text(FaceKind::Body, value_left, top, ReportStyle::TEXT_COLOR, value);
        self.cursor += self.body.line_height() * ReportStyle::INFO_LINE_SPACING;
    }

    fn table_row(&mut self, name: &str, count: &str, color: [u8; 3]) {
        let row_height = self.row_height();
        let top = self.cursor + (row_height - self.body.line_height()) / 2.0;
        let name_left = ReportStyle::MARGIN_X + ReportStyle::NAME_COLUMN_INSET;
        let count_left = self.width * ReportStyle::COUNT_COLUMN_AT;
        self.text(FaceKind::Body, name_left, top, color, name);
        self.text(FaceKind::Body, count_left, top, color, count);
        self.cursor += row_height;
    }

    fn row_height(&self) -> f32 {
        self.body.line_height() * ReportStyle::ROW_HEIGHT_FACTOR
    }
}

/// Positions every element of the report. The canvas is `theme.width` wide and
/// at least `theme.min_height` tall, growing downward when the table needs it.
pub(super) fn layout_report(
    report: Option<&Report>,
    theme: &ImageTheme,
    body: &TextFace,
    title: &TextFace,
) -> ReportLayout {
    let mut builder = LayoutBuilder {
        width: theme.width as f32,
        body,
        title,
        cursor: ReportStyle::TOP_PADDING,
        shapes: Vec::new(),
        texts: Vec::new(),
    };

    builder.centered_line(FaceKind::Title, ReportStyle::TITLE_COLOR, TITLE);
    builder.cursor += ReportStyle::TITLE_GAP;
    builder.rule(ReportStyle::RULE_THICKNESS, ReportStyle::TITLE_COLOR);
    builder.cursor += ReportStyle::RULE_GAP;

    match report {
        None => {
            builder.cursor += ReportStyle::SECTION_GAP;
            builder.centered_line(FaceKind::Body, ReportStyle::ERROR_COLOR, FETCH_FAILED_MESSAGE);
        }
        Some(report) => {
            let server = &report.server;
            builder.label_value("服务器名称：", or_not_available(&server.name));
            builder.label_value("版本：", or_not_available(&server.version));
            builder.label_value("操作系统：", or_not_available(&server.os_name));
            builder.cursor += ReportStyle::SECTION_GAP;

            builder.centered_line(FaceKind::Title, ReportStyle::TITLE_COLOR, SUBTITLE);
            builder.cursor += ReportStyle::TITLE_GAP;

            let header_top = builder.cursor;
            let row_height = builder.row_height();
            builder.shapes.push(Shape::Fill {
                left: ReportStyle::MARGIN_X as i32,
                top: header_top.round() as i32,
                right: (builder.width - ReportStyle::MARGIN_X) as i32,
                bottom: (header_top + row_height).round() as i32,
                color: ReportStyle::HEADER_FILL,
            });
            builder.table_row(NAME_HEADER, COUNT_HEADER, ReportStyle::HEADER_TEXT);

            // Keep room for one more row (the overflow note) above the height cap.
            let row_limit =
                MAX_IMAGE_HEIGHT as f32 - ReportStyle::BOTTOM_PADDING - 2.0 * row_height;
            for (shown, library) in report.libraries.iter().enumerate() {
                if builder.cursor > row_limit {
                    let hidden = report.libraries.len() - shown;
                    builder.table_row(
                        &format!("另有 {} 个媒体库未显示", hidden),
                        "",
                        ReportStyle::LABEL_COLOR,
                    );
                    break;
                }
                builder.table_row(
                    or_not_available(&library.name),
                    &library.item_count.to_string(),
                    ReportStyle::TEXT_COLOR,
                );
                builder.rule(ReportStyle::SEPARATOR_THICKNESS, ReportStyle::SEPARATOR);
            }
        }
    }

    let needed = (builder.cursor + ReportStyle::BOTTOM_PADDING).ceil() as u32;
    ReportLayout {
        width: theme.width,
        height: needed.max(theme.min_height).min(MAX_IMAGE_HEIGHT),
        shapes: builder.shapes,
        texts: builder.texts,
    }
}
