use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum MyCommands {
    #[command(description = "Show help menu.")]
    Help,
    #[command(
        rename = "emby_report",
        description = "Show Emby server status and library statistics."
    )]
    EmbyReport,
}
