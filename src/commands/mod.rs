mod command_def;
mod features;
mod handler;
mod helpers;
mod router;
mod triggers;

pub use command_def::MyCommands;
pub use handler::answer;
pub(crate) use handler::{answer_trigger, report_trigger};
pub(crate) use triggers::ReportTrigger;
