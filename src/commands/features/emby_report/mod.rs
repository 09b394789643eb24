mod flow;
mod sink;


use teloxide::prelude::*;

use crate::app_context::AppContext;
use crate::config::ReportSettings;
use crate::emby::EmbySource;

use super::super::triggers::ReportTrigger;

use flow::run_report_flow;
use sink::TelegramSink;

pub(crate) async fn handle_emby_report(
    bot: &Bot,
    msg: &Message,
    app_context: &AppContext,
    trigger: ReportTrigger,
) -> ResponseResult<()> {
    log::info!(
        "report_requested trigger={} chat_id={} user_id={}",
        trigger.label(),
        msg.chat.id.0,
        msg.from()
            .map(|user| user.id.0.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );

    let settings = ReportSettings::from_config(&app_context.config, &app_context.install_dir);
    let sink = TelegramSink::new(bot.clone(), msg.chat.id);
    run_report_flow(&settings, &EmbySource, &sink).await
}
