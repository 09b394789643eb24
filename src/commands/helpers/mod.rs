mod auth;
mod formatting;

pub(super) use auth::{is_authorized, log_unauthorized};
pub(super) use formatting::as_html_block;
