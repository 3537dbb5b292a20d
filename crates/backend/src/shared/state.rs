use contracts::shared::config::ClientConfig;
use std::path::PathBuf;

use super::config::{resolve_dist_dir, Config};

#[derive(Debug, Clone)]
pub struct AppState {
    pub client_config: ClientConfig,
    /// Built frontend (`trunk build` output)
    pub dist_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client_config: config.client_config(),
            dist_dir: resolve_dist_dir(config),
        }
    }
}
