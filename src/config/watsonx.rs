use serde::Deserialize;

use crate::utils::constants::IAM_TOKEN_URL;

/// Credentials and endpoints of the watsonx.ai project the relay talks to.
///
/// Every field may be empty: nothing here is enforced at startup, an empty
/// value simply produces a request the provider rejects.
#[derive(Clone, Deserialize)]
pub struct WatsonxConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_iam_url")]
    pub iam_url: String,
}

impl WatsonxConfig {
    pub fn new(api_key: &str, project_id: &str, base_url: &str, iam_url: &str) -> Self {
        Self {
            api_key: api_key.to_owned(),
            project_id: project_id.to_owned(),
            base_url: base_url.to_owned(),
            iam_url: iam_url.to_owned(),
        }
    }

    /// `{base_url}/ml/v1/text/generation?version=...`
    pub fn generation_url(&self) -> String {
        use crate::utils::constants::{GENERATION_API_VERSION, GENERATION_PATH};
        format!(
            "{}{}?version={}",
            self.base_url.trim_end_matches('/'),
            GENERATION_PATH,
            GENERATION_API_VERSION
        )
    }
}

// api_key stays out of logs
impl std::fmt::Debug for WatsonxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatsonxConfig")
            .field("api_key", &"***")
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .field("iam_url", &self.iam_url)
            .finish()
    }
}

fn default_iam_url() -> String {
    IAM_TOKEN_URL.to_owned()
}
