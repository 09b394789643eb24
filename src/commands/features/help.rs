use teloxide::{prelude::*, types::ParseMode, utils::command::BotCommands};

use super::super::{
    command_def::MyCommands,
    helpers::as_html_block,
    triggers::{REPORT_COMMAND_ALIASES, TRIGGER_PHRASES},
};

pub(crate) async fn handle_help(bot: &Bot, msg: &Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, as_html_block("Available commands", &help_body()))
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}

fn help_body() -> String {
    let aliases = REPORT_COMMAND_ALIASES
        .iter()
        .map(|alias| format!("/{}", alias))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{}\n\nReport aliases:\n{}\n\nPhrases that also trigger the report:\n{}",
        MyCommands::descriptions(),
        aliases,
        TRIGGER_PHRASES.join("\n")
    )
}
