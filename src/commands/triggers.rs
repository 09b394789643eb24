/// Substrings that start a report when they appear anywhere in a message.
/// Matching is exact and case-sensitive.
pub(crate) const TRIGGER_PHRASES: [&str; 9] = [
    "我的 emby 服务器状态",
    "emby 影视库有多少内容",
    "emby 现在有多少电影",
    "emby 现在有多少电视剧",
    "emby 媒体库统计",
    "emby 服务器信息",
    "emby 统计",
    "emby 有多少音乐",
    "查询 emby 媒体库",
];

/// Slash-command names that run the report. `/emby_report` is also parsed as
/// a typed command; whichever branch sees it first answers.
pub(crate) const REPORT_COMMAND_ALIASES: [&str; 8] = [
    "emby",
    "emby状态",
    "emby统计",
    "emby服务器",
    "embyreport",
    "emby_report",
    "embyinfo",
    "emby_info",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportTrigger {
    Command,
    Phrase,
}

impl ReportTrigger {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Phrase => "phrase",
        }
    }
}

/// Classifies a free-form message. A report command wins over any phrase in
/// its arguments, so one message never produces two reports.
pub(crate) fn detect_trigger(text: &str, bot_username: &str) -> Option<ReportTrigger> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('/') && is_report_command(trimmed, bot_username) {
        return Some(ReportTrigger::Command);
    }

    TRIGGER_PHRASES
        .iter()
        .any(|phrase| text.contains(phrase))
        .then_some(ReportTrigger::Phrase)
}

fn is_report_command(text: &str, bot_username: &str) -> bool {
    let Some(head) = text
        .strip_prefix('/')
        .and_then(|rest| rest.split_whitespace().next())
    else {
        return false;
    };

    let (name, mention) = match head.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (head, None),
    };

    if let Some(mention) = mention {
        if !mention.eq_ignore_ascii_case(bot_username) {
            return false;
        }
    }

    REPORT_COMMAND_ALIASES.contains(&name)
}
