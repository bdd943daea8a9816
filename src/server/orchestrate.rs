use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::observability::metrics::{get_metrics, OUTCOME_ERROR, OUTCOME_OK};
use crate::server::error::AppError;
use crate::server::server::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct OrchestrateRequest {
    /// Any JSON value; missing and `null` both mean "no alert text".
    #[serde(default)]
    pub alert: Option<Value>,
}

impl OrchestrateRequest {
    /// Strings go in as-is, other values as their JSON text.
    pub fn alert_text(&self) -> String {
        match &self.alert {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

pub async fn orchestrate(
    State(state): State<AppState>,
    Json(payload): Json<OrchestrateRequest>,
) -> Result<Json<Value>, AppError> {
    let metrics = get_metrics().await;
    let alert = payload.alert_text();

    match state.relay.orchestrate(&alert).await {
        Ok(data) => {
            metrics.relay_requests.with_label_values(&[OUTCOME_OK]).inc();
            Ok(Json(data))
        }
        Err(e) => {
            metrics.relay_requests.with_label_values(&[OUTCOME_ERROR]).inc();
            Err(e.into())
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
