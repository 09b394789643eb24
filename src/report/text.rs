use std::fmt::Write as _;

use crate::emby::Report;

pub(crate) const FETCH_FAILED_BLOCK: &str = "```\n错误：无法获取 Emby 数据。\n```";
pub(crate) const NOT_AVAILABLE: &str = "N/A";

const NAME_COLUMN_WIDTH: usize = 18;
const COUNT_COLUMN_WIDTH: usize = 10;

pub(crate) fn render_text(report: Option<&Report>) -> String {
    let Some(report) = report else {
        return FETCH_FAILED_BLOCK.to_string();
    };

    let server = &report.server;
    let mut block = String::from("```\n");
    block.push_str("【Emby 服务器状态】\n");
    // Writing into a String cannot fail.
    let _ = writeln!(block, "服务器名称：{}", or_not_available(&server.name));
    let _ = writeln!(block, "版本：{}", or_not_available(&server.version));
    let _ = writeln!(block, "操作系统：{}\n", or_not_available(&server.os_name));

    block.push_str("【媒体库统计】\n");
    push_row(&mut block, "媒体库名称", "条目数量");
    let _ = writeln!(
        block,
        "{}|{}",
        "-".repeat(NAME_COLUMN_WIDTH),
        "-".repeat(COUNT_COLUMN_WIDTH)
    );
    for library in &report.libraries {
        push_row(
            &mut block,
            or_not_available(&library.name),
            &library.item_count.to_string(),
        );
    }

    block.push_str("```");
    block
}

pub(crate) fn or_not_available(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

// `{:<N}` pads by char count and never truncates: long names overflow the column.
fn push_row(block: &mut String, name: &str, count: &str) {
    let _ = writeln!(
        block,
        "{:<name_width$}| {:<count_width$}",
        name,
        count,
        name_width = NAME_COLUMN_WIDTH,
        count_width = COUNT_COLUMN_WIDTH
    );
}
