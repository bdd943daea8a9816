use serde::Serialize;

use crate::utils::constants::{
    GENERATION_MAX_NEW_TOKENS, GENERATION_MODEL_ID, GENERATION_STOP_SEQUENCE,
    GENERATION_TEMPERATURE,
};

/// Body of `POST /ml/v1/text/generation`.
#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub project_id: &'a str,
    pub model_id: &'a str,
    pub input: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub stop_sequences: Vec<String>,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: GENERATION_MAX_NEW_TOKENS,
            temperature: GENERATION_TEMPERATURE,
            stop_sequences: vec![GENERATION_STOP_SEQUENCE.to_owned()],
        }
    }
}

impl<'a> GenerationRequest<'a> {
    pub fn new(project_id: &'a str, input: String) -> Self {
        Self {
            project_id,
            model_id: GENERATION_MODEL_ID,
            input,
            parameters: GenerationParameters::default(),
        }
    }
}
