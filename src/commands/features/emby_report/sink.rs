use async_trait::async_trait;
use chrono::Utc;
use teloxide::{
    prelude::*,
    types::{InputFile, ParseMode},
    utils::markdown,
};

use crate::commands::helpers::as_html_block;
use crate::report::ImageArtifact;

const FENCE_OPEN: &str = "```\n";
const FENCE_CLOSE: &str = "\n```";
const IMAGE_FILE_NAME: &str = "emby-report.png";
const TEXT_FILE_NAME: &str = "emby-report.txt";
// Telegram counts the 4096-character limit in UTF-16 units.
const TELEGRAM_FILE_FALLBACK_THRESHOLD: usize = 3900;

pub(crate) enum OutboundMessage<'a> {
    /// Short status text such as the missing-configuration prompt.
    Notice { title: &'a str, body: &'a str },
    /// A fenced monospace block produced by the text renderer.
    Preformatted(&'a str),
    /// A fenced block too long for one message, sent as a `.txt` attachment.
    TextFile { notice: &'a str, block: &'a str },
    Image {
        artifact: &'a ImageArtifact,
        caption: String,
    },
}

/// Where a finished report goes. Telegram in production; tests record.
#[async_trait]
pub(crate) trait ReportSink: Send + Sync {
    async fn deliver(&self, message: OutboundMessage<'_>) -> ResponseResult<()>;
}

pub(crate) struct TelegramSink {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSink {
    pub(crate) fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ReportSink for TelegramSink {
    async fn deliver(&self, message: OutboundMessage<'_>) -> ResponseResult<()> {
        match message {
            OutboundMessage::Notice { title, body } => {
                self.bot
                    .send_message(self.chat_id, as_html_block(title, body))
                    .parse_mode(ParseMode::Html)
                    .await?;
            }
            OutboundMessage::Preformatted(block) => {
                self.bot
                    .send_message(self.chat_id, fenced_to_markdown_v2(block))
                    .parse_mode(ParseMode::MarkdownV2)
                    .await?;
            }
            OutboundMessage::TextFile { notice, block } => {
                self.bot
                    .send_message(self.chat_id, as_html_block("Emby 报告", notice))
                    .parse_mode(ParseMode::Html)
                    .await?;
                self.bot
                    .send_document(
                        self.chat_id,
                        InputFile::memory(unfenced(block).as_bytes().to_vec())
                            .file_name(TEXT_FILE_NAME),
                    )
                    .await?;
            }
            OutboundMessage::Image { artifact, caption } => {
                let file = match artifact {
                    ImageArtifact::Memory(bytes) => InputFile::memory(bytes.clone()),
                    ImageArtifact::TempFile(path) => InputFile::file(path.to_path_buf()),
                };
                self.bot
                    .send_photo(self.chat_id, file.file_name(IMAGE_FILE_NAME))
                    .caption(caption)
                    .await?;
            }
        }

        Ok(())
    }
}

pub(crate) fn image_caption() -> String {
    format!(
        "Emby 服务器状态报告 | {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Whether the block, once converted for MarkdownV2, would not fit in one message.
pub(crate) fn exceeds_message_limit(block: &str) -> bool {
    fenced_to_markdown_v2(block).encode_utf16().count() > TELEGRAM_FILE_FALLBACK_THRESHOLD
}

fn unfenced(block: &str) -> &str {
    block
        .strip_prefix(FENCE_OPEN)
        .and_then(|inner| inner.strip_suffix("```"))
        .unwrap_or(block)
}

/// Re-emits a ```-fenced block as a MarkdownV2 code block. Only backtick and
/// backslash need escaping inside `pre` entities.
fn fenced_to_markdown_v2(block: &str) -> String {
    match block
        .strip_prefix(FENCE_OPEN)
        .and_then(|inner| inner.strip_suffix(FENCE_CLOSE).or_else(|| inner.strip_suffix("```")))
    {
        Some(inner) => markdown::code_block(inner),
        None => markdown::code_block(block),
    }
}

#[cfg(test)]
mod tests {
    use super::{exceeds_message_limit, fenced_to_markdown_v2, image_caption, unfenced};

    #[test]
    fn fenced_block_is_rewrapped_without_double_fences() {
        let converted = fenced_to_markdown_v2("```\n错误：无法获取 Emby 数据。\n```");
        assert_eq!(converted, "```\n错误：无法获取 Emby 数据。\n```");
    }

    #[test]
    fn backticks_and_backslashes_are_escaped_inside_block() {
        let converted = fenced_to_markdown_v2("```\nname `x` \\ y\n```");
        assert_eq!(converted, "```\nname \\`x\\` \\\\ y\n```");
    }

    #[test]
    fn table_padding_survives_conversion() {
        let converted = fenced_to_markdown_v2("```\nMovies            | 120       \n```");
        assert!(converted.contains("Movies            | 120       "));
        assert!(!converted.contains("```\n```"));
    }

    #[test]
    fn unfenced_text_is_wrapped() {
        assert_eq!(fenced_to_markdown_v2("plain"), "```\nplain\n```");
    }

    #[test]
    fn message_limit_counts_converted_text() {
        assert!(!exceeds_message_limit("```\nshort\n```"));
        let long = format!("```\n{}\n```", "统".repeat(3950));
        assert!(exceeds_message_limit(&long));
    }

    #[test]
    fn attachment_text_drops_the_fences() {
        assert_eq!(unfenced("```\nrow 1\nrow 2\n```"), "row 1\nrow 2\n");
        assert_eq!(unfenced("plain"), "plain");
    }

    #[test]
    fn caption_names_the_report_and_utc() {
        let caption = image_caption();
        assert!(caption.starts_with("Emby 服务器状态报告 | "));
        assert!(caption.ends_with(" UTC"));
    }
}
