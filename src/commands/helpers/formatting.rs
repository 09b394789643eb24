const TELEGRAM_TEXT_HARD_LIMIT: usize = 4096;
const TELEGRAM_TEXT_SAFE_LIMIT: usize = 3900;
const TRUNCATE_NOTICE: &str = "\n\n⚠️ (Output was truncated...)";

/// Bold title over a `<pre>` body, both HTML-escaped, kept under Telegram's
/// message limit.
pub(crate) fn as_html_block(title: &str, body: &str) -> String {
    let escaped_title = html_escape::encode_text(title);
    let body_budget = TELEGRAM_TEXT_SAFE_LIMIT.saturating_sub(TRUNCATE_NOTICE.len());
    let (mut escaped_body, truncated) = escape_within(body, body_budget);
    if truncated {
        escaped_body.push_str(TRUNCATE_NOTICE);
    }

    let message = format!("<b>{}</b>\n<pre>{}</pre>", escaped_title, escaped_body);
    if message.len() > TELEGRAM_TEXT_HARD_LIMIT {
        log::warn!("formatted Telegram message is close to hard limit");
    }
    message
}

// Escapes char by char so an entity like `&amp;` is never cut in half.
fn escape_within(input: &str, max_escaped_len: usize) -> (String, bool) {
    let mut escaped = String::with_capacity(input.len().min(max_escaped_len));
    let mut scratch = [0u8; 4];
    for ch in input.chars() {
        let piece = html_escape::encode_text(ch.encode_utf8(&mut scratch));
        if escaped.len() + piece.len() > max_escaped_len {
            return (escaped, true);
        }
        escaped.push_str(&piece);
    }
    (escaped, false)
}
