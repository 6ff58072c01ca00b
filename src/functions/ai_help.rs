// src/functions/ai_help.rs

//! `getAiHelp`: ask Gemini for advice and return the first answer.

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;

use crate::config::GeminiConfig;
use crate::error::CallableError;
use crate::invocation_id::InvocationId;
use crate::secrets::{self, SecretProvider};
use crate::util::get_by_path;

use super::{join_url, send_json};

const SERVICE: &str = "Gemini";

/// Returned when the model response has no usable candidate text.
pub const FALLBACK_TEXT: &str = "Sorry, I cannot give advice right now.";

const CANDIDATE_TEXT_PATH: &str = "candidates.0.content.parts.0.text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistResponse {
    pub text: String,
}

/* ---------------- generateContent body ---------------- */

#[derive(Debug, Serialize)]
struct GenerateContent<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

pub struct AiHelp {
    client: reqwest::Client,
    config: GeminiConfig,
    secrets: Arc<dyn SecretProvider>,
}

impl AiHelp {
    pub fn new(client: reqwest::Client, config: GeminiConfig, secrets: Arc<dyn SecretProvider>) -> Self {
        Self {
            client,
            config,
            secrets,
        }
    }

    pub async fn call(&self, req: AssistRequest) -> Result<AssistResponse, CallableError> {
        let invocation_id = InvocationId::new();
        let span = tracing::info_span!(
            "getAiHelp",
            invocation_id = %invocation_id,
            model = %self.config.model
        );

        async move {
            match self.generate(&req).await {
                Ok(reply) => {
                    let text = extract_text(&reply);
                    tracing::info!(fallback = text.is_none(), "gemini call completed");
                    Ok(AssistResponse {
                        text: text.unwrap_or_else(|| FALLBACK_TEXT.to_string()),
                    })
                }
                Err(cause) => {
                    tracing::warn!(error = %cause, "gemini call failed");
                    Err(CallableError::downstream(SERVICE, cause))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn generate(&self, req: &AssistRequest) -> Result<Value, String> {
        let key = secrets::require(self.secrets.as_ref(), &self.config.key_secret)?;

        let body = GenerateContent {
            contents: [Content {
                parts: [Part {
                    text: req.prompt.as_deref(),
                }],
            }],
        };

        let path = format!("models/{}:generateContent", self.config.model);

        let request = self
            .client
            .post(join_url(&self.config.base_url, &path))
            .query(&[("key", key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .json(&body);

        send_json(request).await
    }
}

/// First candidate's first text part, if the response has one.
fn extract_text(reply: &Value) -> Option<String> {
    get_by_path(reply, CANDIDATE_TEXT_PATH)
        .and_then(Value::as_str)
        .map(str::to_string)
}
