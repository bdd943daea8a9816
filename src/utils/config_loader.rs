use std::path::Path;

use anyhow::{anyhow, Result};

use crate::config::proc_loader::{default_config, file_to_config};
use crate::config::service::ServiceConfig;

/// Read the config file when it exists, otherwise fall back to the
/// environment-only default.
pub async fn run(config_path: &str) -> Result<ServiceConfig> {
    let path = Path::new(config_path);
    if path.exists() {
        file_to_config(path)
            .await
            .map_err(|e| anyhow!("Invalid config format in {}: {}", config_path, e))
    } else {
        default_config()
            .await
            .map_err(|e| anyhow!("Invalid default config: {}", e))
    }
}
