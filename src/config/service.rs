use serde::Deserialize;

use crate::config::{settings::SettingsConfig, watsonx::WatsonxConfig};

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    pub watsonx: WatsonxConfig,
}
