mod app_context;
mod commands;
mod config;
mod emby;
mod report;

use std::sync::Arc;

use teloxide::{prelude::*, types::Me};
use tracing_subscriber::EnvFilter;

use crate::app_context::AppContext;
use crate::commands::{answer, answer_trigger, report_trigger, MyCommands, ReportTrigger};
use crate::config::{install_dir, load_config, Config};

fn init_json_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

const CONFIG_PATH: &str = "config.toml";

fn log_config_warnings(config: &Config) {
    if config.emby.url.trim().is_empty() || config.emby.api_key.trim().is_empty() {
        log::warn!(
            "config_incomplete section=emby reason=missing_url_or_api_key effect=reports_reply_with_setup_prompt"
        );
    }

    if config.allowed_chat_ids.is_empty() {
        log::warn!("access_open reason=allowed_chat_ids_empty effect=any_chat_can_trigger_reports");
    }
}

#[tokio::main]
async fn main() {
    init_json_logging();

    let config: Config = match load_config(CONFIG_PATH) {
        Ok(config) => config,
        Err(error) => {
            log::error!("Configuration error: code={} error={}", error.code(), error);
            return;
        }
    };

    log::info!("Emby Report Bot is starting...");
    log_config_warnings(&config);

    let bot = Bot::new(&config.bot_token);
    let app_context = Arc::new(AppContext::new(config, install_dir()));

    let handler = Update::filter_message()
        .branch(dptree::entry().filter_command::<MyCommands>().endpoint(
            |bot: Bot, msg: Message, cmd: MyCommands, app_context: Arc<AppContext>| async move {
                answer(bot, msg, cmd, &app_context).await
            },
        ))
        .branch(
            dptree::filter_map(|msg: Message, me: Me| report_trigger(&msg, me.username()))
                .endpoint(
                    |bot: Bot,
                     msg: Message,
                     trigger: ReportTrigger,
                     app_context: Arc<AppContext>| async move {
                        answer_trigger(bot, msg, trigger, &app_context).await
                    },
                ),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![app_context])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
