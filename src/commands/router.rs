use teloxide::prelude::*;

use crate::app_context::AppContext;

use super::command_def::MyCommands;
use super::features::{emby_report::handle_emby_report, help::handle_help};
use super::triggers::ReportTrigger;

pub(super) async fn route_command(
    bot: Bot,
    msg: Message,
    cmd: MyCommands,
    app_context: &AppContext,
) -> ResponseResult<()> {
    match cmd {
        MyCommands::Help => handle_help(&bot, &msg).await?,
        MyCommands::EmbyReport => {
            handle_emby_report(&bot, &msg, app_context, ReportTrigger::Command).await?
        }
    }

    Ok(())
}

pub(super) async fn route_trigger(
    bot: Bot,
    msg: Message,
    trigger: ReportTrigger,
    app_context: &AppContext,
) -> ResponseResult<()> {
    handle_emby_report(&bot, &msg, app_context, trigger).await
}
