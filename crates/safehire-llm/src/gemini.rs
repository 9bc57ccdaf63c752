//! Gemini HTTP client.
//!
//! Calls `/v1beta/models/{model}:generateContent` with the instruction as the
//! system instruction and the user's message as the single user turn.

use async_trait::async_trait;
use safehire_core::config::OracleSettings;
use safehire_core::{ApiKey, Oracle, OracleError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Gemini text-completion client.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: ApiKey,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiClient {
    /// Create a client. Fails only if the HTTP client cannot be built.
    pub fn new(api_key: ApiKey, settings: &OracleSettings) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| OracleError::Client(e.to_string()))?;

        let model = settings.model.trim();
        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: model.strip_prefix("models/").unwrap_or(model).to_string(),
            api_key,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl Oracle for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, instruction: &str, message: &str) -> Result<String, OracleError> {
        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![TextPart { text: instruction }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![TextPart { text: message }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Api { status, body });
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| OracleError::InvalidResponse(e.to_string()))?;

        if let Some(reason) = result.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(OracleError::Blocked(reason));
        }

        let Some(candidate) = result.candidates.into_iter().next() else {
            return Err(OracleError::EmptyReply);
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        debug!(
            chars = text.len(),
            finish_reason = candidate.finish_reason.as_deref().unwrap_or("unknown"),
            "Received model reply"
        );

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.unwrap_or_default();
            if matches!(reason.as_str(), "SAFETY" | "BLOCKLIST" | "PROHIBITED_CONTENT") {
                return Err(OracleError::Blocked(reason));
            }
            return Err(OracleError::EmptyReply);
        }

        Ok(text)
    }
}
