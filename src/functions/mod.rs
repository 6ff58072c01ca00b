// src/functions/mod.rs

//! The two callable functions and what they share.
//!
//! Each function performs exactly one outbound HTTP call per invocation.
//! There are no retries and nothing is cached between invocations.

use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::secrets::SecretProvider;

pub mod ai_help;
pub mod execute_code;

pub use ai_help::{AiHelp, AssistRequest};
pub use execute_code::{ExecuteCode, ExecutionRequest};

/// Both functions, wired from one config and one secret provider.
pub struct Functions {
    pub execute_code: ExecuteCode,
    pub ai_help: AiHelp,
}

impl Functions {
    pub fn from_config(cfg: &Config, secrets: Arc<dyn SecretProvider>) -> Result<Self> {
        let judge_client =
            http_client(cfg.judge.timeout_ms).context("Failed to build Judge0 HTTP client")?;
        let gemini_client =
            http_client(cfg.gemini.timeout_ms).context("Failed to build Gemini HTTP client")?;

        Ok(Self {
            execute_code: ExecuteCode::new(judge_client, cfg.judge.clone(), Arc::clone(&secrets)),
            ai_help: AiHelp::new(gemini_client, cfg.gemini.clone(), secrets),
        })
    }
}

fn http_client(timeout_ms: Option<u64>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(ms) = timeout_ms {
        builder = builder.timeout(Duration::from_millis(ms));
    }

    Ok(builder.build()?)
}

/// Send one request, require a 2xx status, and decode the body as JSON.
///
/// The error is a plain description. URLs are stripped from transport
/// errors because the Gemini URL carries the API key.
async fn send_json(request: reqwest::RequestBuilder) -> std::result::Result<Value, String> {
    let resp = request
        .send()
        .await
        .map_err(|e| e.without_url().to_string())?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("request failed with status code {}", status.as_u16()));
    }

    resp.json::<Value>()
        .await
        .map_err(|e| e.without_url().to_string())
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
