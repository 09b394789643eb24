use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub install_dir: PathBuf,
}

impl AppContext {
    pub fn new(config: Config, install_dir: PathBuf) -> Self {
        Self {
            config: Arc::new(config),
            install_dir,
        }
    }
}
