//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Checks the watsonx credentials and endpoints look usable
//! - Checks server / metrics / logging settings
//!
//! Problems only warn: an incomplete config still serves and the provider
//! rejects what it can't use. A metrics path on a relay route is the one
//! exception, since the router can't be built with it.

use anyhow::{bail, Result};
use tracing::{debug, warn};

use crate::config::service::ServiceConfig;
use crate::config::settings::SettingsConfig;
use crate::config::watsonx::WatsonxConfig;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::{HEALTH_PATH, ORCHESTRATE_PATH};

const RESERVED_PATHS: [&str; 2] = [ORCHESTRATE_PATH, HEALTH_PATH];
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);
    validate_watsonx(&cfg.watsonx, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate, log every problem as a warning and count them. Returns the count.
/// Only a route collision fails, since the router could not be built.
pub async fn report_service_config(cfg: &ServiceConfig) -> Result<usize> {
    debug!("validation config ...");
    let count = match validate_service_config(cfg) {
        Ok(()) => 0,
        Err(problems) => {
            for problem in &problems {
                warn!("config: {}", problem);
            }
            get_metrics()
                .await
                .config_validation_errors
                .inc_by(problems.len() as u64);
            problems.len()
        }
    };
    if let Some(collision) = route_collision(&cfg.settings) {
        bail!(collision);
    }
    Ok(count)
}

fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if settings.server.host.trim().is_empty() {
        errors.push("settings.server.host is empty".to_string());
    }
    if settings.server.port.trim().parse::<u16>().is_err() {
        errors.push(format!(
            "settings.server.port '{}' is not a valid port",
            settings.server.port
        ));
    }
    if settings.metrics.is_enabled {
        let path = settings.metrics.path.as_str();
        if !path.starts_with('/') {
            errors.push(format!("settings.metrics.path '{}' must start with '/'", path));
        }
    }
    if let Some(collision) = route_collision(settings) {
        errors.push(collision);
    }
    if let Some(logging) = &settings.logging {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' must be one of {:?}",
                logging.level, LOG_LEVELS
            ));
        }
    }
}

/// A metrics path on top of a relay route can't be mounted at all.
fn route_collision(settings: &SettingsConfig) -> Option<String> {
    let path = settings.metrics.path.as_str();
    (settings.metrics.is_enabled && RESERVED_PATHS.contains(&path))
        .then(|| format!("settings.metrics.path '{}' collides with a relay route", path))
}

fn validate_watsonx(watsonx: &WatsonxConfig, errors: &mut Vec<String>) {
    if watsonx.api_key.trim().is_empty() {
        errors.push("watsonx.api_key is empty (WATSONX_API_KEY)".to_string());
    }
    if watsonx.project_id.trim().is_empty() {
        errors.push("watsonx.project_id is empty (WATSONX_PROJECT_ID)".to_string());
    }
    if !is_http_url(&watsonx.base_url) {
        errors.push(format!(
            "watsonx.base_url '{}' is not an http(s) url (WATSONX_URL)",
            watsonx.base_url
        ));
    }
    if !is_http_url(&watsonx.iam_url) {
        errors.push(format!(
            "watsonx.iam_url '{}' is not an http(s) url",
            watsonx.iam_url
        ));
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
