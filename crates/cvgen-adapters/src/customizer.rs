//! LLM customizer — the single point of entry for all model calls in cvgen.
//!
//! Rewrites raw content text against a job description through the
//! Anthropic Messages API. With no API key configured the service runs in
//! passthrough mode: input text is returned unchanged and no request is
//! ever constructed. This is documented behavior, not an error.
//!
//! The call is synchronous and is made at most once per document kind per
//! run; failures propagate to the orchestrator without retry.

use std::time::Duration;

use cvgen_core::{application::{ApplicationError, ports::Customizer}, error::CvgenResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for customization calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// System instruction sent with every customization call. The constraints
/// are load-bearing: downstream layout assumes the rewritten document keeps
/// the original's shape and line lengths.
const INSTRUCTIONS: &str = "You are an expert resume editor who tailors resumes to specific job descriptions. \
Your output must be valid TOML and must keep the exact structure and markup of the document provided. \
Layout restrictions are strict: keep each rewritten line or sentence approximately the same length as the original, \
and keep every list the same length — if you add an item, remove one. \
Verifiable facts such as dates, job titles, and names must remain unchanged. \
Return only the raw TOML document, with no extra commentary and no code fences.";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Customizer backed by the Anthropic Messages API; passthrough without a
/// configured key.
#[derive(Debug, Clone)]
pub struct LlmCustomizer {
    api_key: Option<String>,
}

impl LlmCustomizer {
    /// Create a customizer with an explicit key (or `None` for passthrough).
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Read the credential from `ANTHROPIC_API_KEY`; absence selects
    /// passthrough mode.
    pub fn from_env() -> Self {
        Self::new(std::env::var("ANTHROPIC_API_KEY").ok())
    }

    /// `true` when no external capability is configured.
    pub fn is_passthrough(&self) -> bool {
        self.api_key.is_none()
    }
}

impl Customizer for LlmCustomizer {
    #[instrument(skip_all)]
    fn customize(&self, document_text: &str, job_description: &str) -> CvgenResult<String> {
        let Some(api_key) = &self.api_key else {
            debug!("No API key configured, passing content through unchanged");
            return Ok(document_text.to_string());
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| call_failed(format!("Failed to build HTTP client: {e}")))?;

        let prompt = build_prompt(document_text, job_description);
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: INSTRUCTIONS,
            messages: vec![Message {
                role: "user",
                content: &prompt,
            }],
        };

        let response = client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .map_err(|e| call_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            // Prefer the structured API message when the body parses.
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(call_failed(format!("API error (status {status}): {message}")));
        }

        let parsed: MessagesResponse = response.json().map_err(|e| call_failed(e.to_string()))?;
        let text = parsed
            .content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
            .ok_or_else(|| call_failed("model returned empty content".into()))?;

        debug!("Customization call succeeded");
        Ok(strip_fences(text).to_string())
    }
}

fn call_failed(reason: String) -> cvgen_core::error::CvgenError {
    ApplicationError::CustomizationFailed { reason }.into()
}

/// The customization prompt, embedding both inputs verbatim.
fn build_prompt(document_text: &str, job_description: &str) -> String {
    format!(
        "I need to customize the following resume in TOML format to better match this job description:

JOB DESCRIPTION:
{job_description}

CURRENT RESUME (TOML format):
{document_text}

Please provide a customized version of this resume that:
1. Highlights skills and experiences most relevant to the job description
2. Adjusts the wording in the summary and experience sections to better align with the job requirements
3. Prioritizes the most relevant areas of expertise and skills
4. Maintains approximately the same length for each section and each line
5. Preserves the original structure, list lengths, and factual details

Return only the complete TOML document with no additional explanation."
    )
}

/// Strips ```toml ... ``` or ``` ... ``` code fences from model output.
fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```toml") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_returns_input_unchanged() {
        let customizer = LlmCustomizer::new(None);
        assert!(customizer.is_passthrough());

        let text = "[personal]\nname = \"Test User\"\n";
        let result = customizer.customize(text, "any job description").unwrap();
        assert_eq!(result, text);
    }

    #[test]
    fn empty_key_means_passthrough() {
        assert!(LlmCustomizer::new(Some(String::new())).is_passthrough());
    }

    #[test]
    fn prompt_embeds_both_inputs_verbatim() {
        let document = "[resume]\nsummary = \"Engineer with experience.\"";
        let job = "We are hiring a senior Rust engineer.";

        let prompt = build_prompt(document, job);
        assert!(prompt.contains(document));
        assert!(prompt.contains(job));
    }

    #[test]
    fn instructions_state_the_preservation_contract() {
        assert!(INSTRUCTIONS.contains("same length"));
        assert!(INSTRUCTIONS.contains("every list the same length"));
        assert!(INSTRUCTIONS.contains("dates, job titles, and names"));
        assert!(INSTRUCTIONS.contains("no code fences"));
    }

    #[test]
    fn strip_fences_with_toml_tag() {
        let input = "```toml\n[personal]\nname = \"x\"\n```";
        assert_eq!(strip_fences(input), "[personal]\nname = \"x\"");
    }

    #[test]
    fn strip_fences_without_tag() {
        let input = "```\n[personal]\n```";
        assert_eq!(strip_fences(input), "[personal]");
    }

    #[test]
    fn strip_fences_no_fences() {
        let input = "[personal]\nname = \"x\"";
        assert_eq!(strip_fences(input), input);
    }
}
