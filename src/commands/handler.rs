use teloxide::prelude::*;

use super::command_def::MyCommands;
use super::helpers::{is_authorized, log_unauthorized};
use super::router::{route_command, route_trigger};
use super::triggers::{detect_trigger, ReportTrigger};
use crate::app_context::AppContext;

pub async fn answer(
    bot: Bot,
    msg: Message,
    cmd: MyCommands,
    app_context: &AppContext,
) -> ResponseResult<()> {
    if !is_authorized(&msg, &app_context.config) {
        log_unauthorized(&msg, "command");
        return Ok(());
    }
    route_command(bot, msg, cmd, app_context).await
}

/// Picks up alias commands and phrases inside ordinary messages.
pub(crate) fn report_trigger(msg: &Message, bot_username: &str) -> Option<ReportTrigger> {
    msg.text()
        .and_then(|text| detect_trigger(text, bot_username))
}

pub(crate) async fn answer_trigger(
    bot: Bot,
    msg: Message,
    trigger: ReportTrigger,
    app_context: &AppContext,
) -> ResponseResult<()> {
    if !is_authorized(&msg, &app_context.config) {
        log_unauthorized(&msg, trigger.label());
        return Ok(());
    }
    route_trigger(bot, msg, trigger, app_context).await
}
