//! Generation relay: token exchange, prompt construction, one forward call.

use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use tokio::time::Instant;
use tracing::info;

use crate::config::watsonx::WatsonxConfig;
use crate::observability::metrics::{get_metrics, CALL_GENERATION};
use crate::sources::{iam::IamTokenSource, FetchToken};

pub mod generation;
pub mod prompt;

use generation::GenerationRequest;
use prompt::build_prompt;

#[derive(Clone)]
pub struct Relay<S = IamTokenSource> {
    config: WatsonxConfig,
    token_source: S,
    client: Client,
}

impl Relay<IamTokenSource> {
    pub fn new(config: WatsonxConfig, client: Client) -> Self {
        let token_source = IamTokenSource::from_config(&config);
        Self::with_token_source(config, token_source, client)
    }
}

impl<S: FetchToken + Sync> Relay<S> {
    pub fn with_token_source(config: WatsonxConfig, token_source: S, client: Client) -> Self {
        Self {
            config,
            token_source,
            client,
        }
    }

    /// Exchange credentials, forward one generation request and return the
    /// provider's JSON body as-is, whatever its HTTP status.
    pub async fn orchestrate(&self, alert: &str) -> Result<Value> {
        // a fresh token per request; nothing is cached between calls
        let token = self.token_source.fetch_token(&self.client).await?;

        let body = GenerationRequest::new(&self.config.project_id, build_prompt(alert));
        let data = self.generate(&token, &body).await?;

        info!(response = %data, "watsonx raw response");
        Ok(data)
    }

    async fn generate(&self, token: &str, body: &GenerationRequest<'_>) -> Result<Value> {
        let metrics = get_metrics().await;
        let start = Instant::now();

        let result = async {
            let response = self
                .client
                .post(self.config.generation_url())
                .bearer_auth(token)
                .json(body)
                .send()
                .await?;
            metrics
                .upstream_requests
                .with_label_values(&[CALL_GENERATION, response.status().as_str()])
                .inc();
            response.json::<Value>().await
        }
        .await;

        metrics
            .upstream_duration
            .with_label_values(&[CALL_GENERATION])
            .observe(start.elapsed().as_secs_f64());
        Ok(result?)
    }
}
