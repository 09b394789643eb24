mod defaults;
mod io;
mod schema;
mod settings;
mod validate;

#[cfg(test)]
mod tests;

pub use io::{install_dir, load_config};
#[allow(unused_imports)]
pub use schema::{Config, Emby, ImageDelivery, ImageTheme, OutputType, Report};
pub use settings::{FontSettings, ReportSettings};
#[allow(unused_imports)]
pub use validate::{ConfigError, MAX_IMAGE_HEIGHT, MAX_IMAGE_WIDTH};
