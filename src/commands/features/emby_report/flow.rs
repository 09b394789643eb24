use std::time::Instant;

use teloxide::prelude::*;

use crate::config::{OutputType, ReportSettings};
use crate::emby::{Report, ReportSource};
use crate::report::picture::{run_render_task, ImageRenderError};
use crate::report::{render_text, ImageArtifact};

use super::sink::{exceeds_message_limit, image_caption, OutboundMessage, ReportSink};

pub(crate) const MISSING_CONFIG_TITLE: &str = "Emby 报告";
pub(crate) const MISSING_CONFIG_PROMPT: &str = "请先在插件配置中填写 Emby 服务器地址和 API 密钥！";
pub(crate) const IMAGE_FAILED_TITLE: &str = "Emby 报告";
pub(crate) const IMAGE_FAILED_NOTICE: &str = "图片生成失败，请稍后再试。";
pub(crate) const TEXT_AS_FILE_NOTICE: &str = "报告内容过长，已作为文件发送。";

/// One report invocation: fetch, render in the configured mode, deliver.
/// A fetch failure is not an error here; it is rendered as the failure report.
pub(crate) async fn run_report_flow(
    settings: &ReportSettings,
    source: &dyn ReportSource,
    sink: &dyn ReportSink,
) -> ResponseResult<()> {
    let started_at = Instant::now();

    if !settings.has_server_credentials() {
        log::warn!("report_skipped reason=missing_server_credentials");
        return sink
            .deliver(OutboundMessage::Notice {
                title: MISSING_CONFIG_TITLE,
                body: MISSING_CONFIG_PROMPT,
            })
            .await;
    }

    let report = match source.fetch(settings).await {
        Ok(report) => Some(report),
        Err(error) => {
            log::error!("emby_fetch_failed code={} error={}", error.code(), error);
            None
        }
    };
    let fetched = report.is_some();
    let library_count = report.as_ref().map_or(0, |report| report.libraries.len());

    let mode = match settings.output_type {
        OutputType::Markdown => {
            let block = render_text(report.as_ref());
            if exceeds_message_limit(&block) {
                sink.deliver(OutboundMessage::TextFile {
                    notice: TEXT_AS_FILE_NOTICE,
                    block: &block,
                })
                .await?;
                "markdown_file"
            } else {
                sink.deliver(OutboundMessage::Preformatted(&block)).await?;
                "markdown"
            }
        }
        OutputType::Image => {
            deliver_image(settings, report, sink).await?;
            "image"
        }
    };

    log::info!(
        "report_completed mode={} fetched={} libraries={} elapsed_ms={}",
        mode,
        fetched,
        library_count,
        started_at.elapsed().as_millis()
    );
    Ok(())
}

async fn deliver_image(
    settings: &ReportSettings,
    report: Option<Report>,
    sink: &dyn ReportSink,
) -> ResponseResult<()> {
    let artifact = match render_artifact(settings, report).await {
        Ok(artifact) => artifact,
        Err(error) => {
            log::error!("report_image_failed code={} error={}", error.code(), error);
            return sink
                .deliver(OutboundMessage::Notice {
                    title: IMAGE_FAILED_TITLE,
                    body: IMAGE_FAILED_NOTICE,
                })
                .await;
        }
    };

    let delivered = sink
        .deliver(OutboundMessage::Image {
            artifact: &artifact,
            caption: image_caption(),
        })
        .await;
    artifact.cleanup();
    delivered
}

async fn render_artifact(
    settings: &ReportSettings,
    report: Option<Report>,
) -> Result<ImageArtifact, ImageRenderError> {
    let encoded = run_render_task(report, settings.fonts.clone(), settings.theme.clone()).await?;
    ImageArtifact::prepare(encoded.png_bytes, settings.image_delivery)
}
