pub(super) mod emby_report;
pub(super) mod help;
