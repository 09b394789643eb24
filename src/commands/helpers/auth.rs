use teloxide::prelude::*;

use crate::config::Config;

/// An empty `allowed_chat_ids` list lets every chat trigger reports.
pub(crate) fn is_authorized(msg: &Message, config: &Config) -> bool {
    config.is_chat_allowed(msg.chat.id)
}

pub(crate) fn log_unauthorized(msg: &Message, kind: &str) {
    let user_id = msg
        .from()
        .map(|user| user.id.0.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    log::warn!(
        "SECURITY: unauthorized report trigger kind={} user_id={} chat_id={} text={:?}",
        kind,
        user_id,
        msg.chat.id.0,
        msg.text()
    );
}
