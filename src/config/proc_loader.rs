use std::{fs, path::Path};

use anyhow::Result;
use regex::Regex;
use tracing::error;

use crate::config::service::ServiceConfig;
use crate::config::settings::LoggingConfig;
use crate::utils::constants::DEFAULT_CONFIG_YAML;

/// Load config from a YAML file, expanding `${VAR}` / `${VAR:default}` first.
pub async fn file_to_config(path: &Path) -> Result<ServiceConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(expand_env_vars(&content)).await
}

/// Load the built-in config, which reads every credential from the environment.
pub async fn default_config() -> Result<ServiceConfig> {
    parse_config(expand_env_vars(DEFAULT_CONFIG_YAML)).await
}

pub async fn parse_config(content: String) -> Result<ServiceConfig> {
    let mut service_config: ServiceConfig = serde_yaml::from_str(&content).inspect_err(|e| {
        error!("parse config error: {}", e);
    })?;

    // Apply defaults
    if service_config.settings.logging.is_none() {
        service_config.settings.logging = Some(LoggingConfig::default());
    }

    Ok(service_config)
}

pub fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("static env placeholder regex");
    re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}
