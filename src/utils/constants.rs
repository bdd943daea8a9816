//! Shared constants and invariants

pub const DEFAULT_CONFIG_PATH: &str = "incident-relay.yaml";
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: &str = "8000";
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

// Inbound routes
pub const ORCHESTRATE_PATH: &str = "/api/orchestrate";
pub const HEALTH_PATH: &str = "/health";

// IBM Cloud IAM
pub const IAM_TOKEN_URL: &str = "https://iam.cloud.ibm.com/identity/token";
pub const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
pub const IAM_ACCESS_TOKEN_FIELD: &str = "access_token";

// watsonx.ai text generation
pub const GENERATION_PATH: &str = "/ml/v1/text/generation";
pub const GENERATION_API_VERSION: &str = "2023-05-29";
pub const GENERATION_MODEL_ID: &str = "ibm/granite-4-h-small";
pub const GENERATION_MAX_NEW_TOKENS: u32 = 600;
pub const GENERATION_TEMPERATURE: f64 = 0.1;
/// Cuts generation when the model starts a second JSON object.
pub const GENERATION_STOP_SEQUENCE: &str = "}\n\n{";

/// Used when no config file exists; credentials come from the environment.
pub const DEFAULT_CONFIG_YAML: &str = r#"
settings:
  server:
    host: ${RELAY_HOST:127.0.0.1}
    port: "${RELAY_PORT:8000}"
  metrics:
    is_enabled: true
    path: /metrics
  logging:
    level: info
    format: ${LOG_FORMAT:compact}
watsonx:
  api_key: "${WATSONX_API_KEY}"
  project_id: "${WATSONX_PROJECT_ID}"
  base_url: "${WATSONX_URL}"
  iam_url: "${WATSONX_IAM_URL:https://iam.cloud.ibm.com/identity/token}"
"#;
