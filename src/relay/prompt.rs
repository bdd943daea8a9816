//! Prompt sent to the generation model.
//!
//! The alert is appended after the template by plain concatenation, so
//! whatever the caller sends (braces, quotes, newlines) lands in the
//! prompt byte for byte.

const PROMPT_TEMPLATE: &str = r#"
You are an Enterprise Incident AI.

Return ONLY valid JSON.
Do NOT include markdown or explanations.

SCHEMA:
{
  "detection": {
    "severity": "HIGH|MEDIUM|LOW",
    "system": "string",
    "pattern": "string",
    "escalation": true
  },
  "reasoning": {
    "rootCause": "string",
    "risks": {
      "revenue": "High|Medium|Low",
      "security": "High|Medium|Low",
      "operations": "High|Medium|Low"
    }
  },
  "action": {
    "ticket": "string",
    "email": "string",
    "status": "string"
  },
  "timeline": ["string", "string", "string", "string"]
}

ALERT:
"#;

pub fn build_prompt(alert: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_TEMPLATE.len() + alert.len() + 1);
    prompt.push_str(PROMPT_TEMPLATE);
    prompt.push_str(alert);
    prompt.push('\n');
    prompt
}
