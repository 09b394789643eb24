mod client;
mod error;
mod model;

#[cfg(test)]
mod tests;

#[allow(unused_imports)]
pub use client::{fetch_report, EmbySource, ReportSource};
pub use error::FetchError;
pub use model::{LibraryStat, Report, ServerInfo};
