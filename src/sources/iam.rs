use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, error};

use crate::config::watsonx::WatsonxConfig;
use crate::observability::metrics::{get_metrics, CALL_IAM};
use crate::sources::FetchToken;
use crate::utils::constants::{IAM_ACCESS_TOKEN_FIELD, IAM_GRANT_TYPE};

/// IBM Cloud IAM API-key exchange.
#[derive(Clone)]
pub struct IamTokenSource {
    pub url: String,
    api_key: String,
}

impl IamTokenSource {
    pub fn new(url: &str, api_key: &str) -> Self {
        Self {
            url: url.to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    pub fn from_config(cfg: &WatsonxConfig) -> Self {
        Self::new(&cfg.iam_url, &cfg.api_key)
    }

    async fn request_token(&self, client: &Client) -> Result<String> {
        let form = [("apikey", self.api_key.as_str()), ("grant_type", IAM_GRANT_TYPE)];

        let response = client.post(&self.url).form(&form).send().await?;
        let status = response.status();
        get_metrics()
            .await
            .upstream_requests
            .with_label_values(&[CALL_IAM, status.as_str()])
            .inc();
        if !status.is_success() {
            return Err(anyhow!("IAM token request failed: {}", status));
        }

        let body: Value = response.json().await?;
        extract_access_token(&body)
    }
}

impl FetchToken for IamTokenSource {
    async fn fetch_token(&self, client: &Client) -> Result<String> {
        let metrics = get_metrics().await;
        let start = Instant::now();
        debug!("requesting IAM token from {}", self.url);

        let result = self.request_token(client).await;

        metrics
            .upstream_duration
            .with_label_values(&[CALL_IAM])
            .observe(start.elapsed().as_secs_f64());
        if let Err(e) = &result {
            error!("IAM token exchange failed: {}", e);
            metrics.token_exchange_failures.inc();
        }
        result
    }
}

fn extract_access_token(body: &Value) -> Result<String> {
    body.get(IAM_ACCESS_TOKEN_FIELD)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| anyhow!("IAM response has no string '{}' field", IAM_ACCESS_TOKEN_FIELD))
}
