// src/functions/execute_code.rs

//! `executeCode`: submit source code to Judge0 and return its verdict.
//!
//! The submission is synchronous (`wait=true`), plain text
//! (`base64_encoded=false`) and always runs with empty stdin. The judge's
//! response body is handed back to the caller untouched.

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;

use crate::config::JudgeConfig;
use crate::error::CallableError;
use crate::invocation_id::InvocationId;
use crate::secrets::{self, SecretProvider};

use super::{join_url, send_json};

const SERVICE: &str = "Judge";

/// Caller payload.
///
/// Neither field is validated here; Judge0 rejects what it cannot run.
/// Absent fields are left out of the submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    #[serde(default)]
    pub source_code: Option<String>,

    #[serde(default)]
    pub language_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct Submission<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source_code: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    language_id: Option<i64>,

    stdin: &'a str,
}

pub struct ExecuteCode {
    client: reqwest::Client,
    config: JudgeConfig,
    secrets: Arc<dyn SecretProvider>,
}

impl ExecuteCode {
    pub fn new(client: reqwest::Client, config: JudgeConfig, secrets: Arc<dyn SecretProvider>) -> Self {
        Self {
            client,
            config,
            secrets,
        }
    }

    /// Run one submission through the judge.
    pub async fn call(&self, req: ExecutionRequest) -> Result<Value, CallableError> {
        let invocation_id = InvocationId::new();
        let span = tracing::info_span!(
            "executeCode",
            invocation_id = %invocation_id,
            language_id = ?req.language_id
        );

        async move {
            match self.submit(&req).await {
                Ok(verdict) => {
                    tracing::info!("judge submission completed");
                    Ok(verdict)
                }
                Err(cause) => {
                    tracing::warn!(error = %cause, "judge submission failed");
                    Err(CallableError::downstream(SERVICE, cause))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn submit(&self, req: &ExecutionRequest) -> Result<Value, String> {
        let key = secrets::require(self.secrets.as_ref(), &self.config.key_secret)?;

        let body = Submission {
            source_code: req.source_code.as_deref(),
            language_id: req.language_id,
            stdin: "",
        };

        let request = self
            .client
            .post(join_url(&self.config.base_url, "submissions"))
            .query(&[("base64_encoded", "false"), ("wait", "true")])
            .header(CONTENT_TYPE, "application/json")
            .header("X-RapidAPI-Key", key)
            .header("X-RapidAPI-Host", self.config.host.as_str())
            .json(&body);

        send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::{ExecuteCode, ExecutionRequest};
    use crate::config::JudgeConfig;
    use crate::error::CallableError;
    use crate::test_support::{
        dead_upstream, recording_upstream, spawn_upstream, text_upstream, Recorder, StaticSecrets,
    };
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    fn judge(base_url: String, secrets: StaticSecrets) -> ExecuteCode {
        let config = JudgeConfig {
            base_url,
            ..JudgeConfig::default()
        };
        ExecuteCode::new(reqwest::Client::new(), config, Arc::new(secrets))
    }

    fn keyed() -> StaticSecrets {
        StaticSecrets::new([("RAPIDAPI_KEY", "rapid-123")])
    }

    fn python_hello() -> ExecutionRequest {
        ExecutionRequest {
            source_code: Some("print(1)".to_string()),
            language_id: Some(71),
        }
    }

    #[tokio::test]
    async fn submits_once_and_passes_verdict_through() {
        let verdict = json!({
            "stdout": "1\n",
            "stderr": null,
            "compile_output": null,
            "time": "0.012",
            "memory": 3200,
            "status": { "id": 3, "description": "Accepted" }
        });
        let recorder = Recorder::default();
        let base = spawn_upstream(recording_upstream(
            recorder.clone(),
            StatusCode::CREATED,
            verdict.clone(),
        ))
        .await;

        let out = judge(base, keyed()).call(python_hello()).await.expect("judge ok");
        assert_eq!(out, verdict);

        let requests = recorder.requests();
        assert_eq!(requests.len(), 1);

        let sent = &requests[0];
        assert_eq!(sent.path, "/submissions");
        assert_eq!(sent.query.get("base64_encoded").map(String::as_str), Some("false"));
        assert_eq!(sent.query.get("wait").map(String::as_str), Some("true"));
        assert_eq!(
            sent.body,
            json!({ "source_code": "print(1)", "language_id": 71, "stdin": "" })
        );
        assert_eq!(sent.headers["x-rapidapi-key"], "rapid-123");
        assert_eq!(sent.headers["x-rapidapi-host"], "judge0-ce.p.rapidapi.com");
        assert_eq!(sent.headers["content-type"], "application/json");
    }

    #[tokio::test]
    async fn absent_fields_are_omitted_not_nulled() {
        let recorder = Recorder::default();
        let base = spawn_upstream(recording_upstream(recorder.clone(), StatusCode::OK, json!({})))
            .await;

        judge(base, keyed())
            .call(ExecutionRequest::default())
            .await
            .expect("judge ok");

        assert_eq!(recorder.requests()[0].body, json!({ "stdin": "" }));
    }

    #[tokio::test]
    async fn non_success_status_is_internal() {
        let base = spawn_upstream(recording_upstream(
            Recorder::default(),
            StatusCode::TOO_MANY_REQUESTS,
            json!({ "message": "quota exceeded" }),
        ))
        .await;

        let err = judge(base, keyed()).call(python_hello()).await.unwrap_err();
        assert_eq!(
            err,
            CallableError::Internal("Judge API error: request failed with status code 429".into())
        );
    }

    #[tokio::test]
    async fn non_json_body_is_internal() {
        let base = spawn_upstream(text_upstream(StatusCode::OK, "<html>oops</html>")).await;

        let err = judge(base, keyed()).call(python_hello()).await.unwrap_err();
        assert!(err.to_string().starts_with("Judge API error: "));
    }

    #[tokio::test]
    async fn unreachable_judge_is_internal() {
        let err = judge(dead_upstream().await, keyed())
            .call(python_hello())
            .await
            .unwrap_err();

        assert!(matches!(err, CallableError::Internal(_)));
        assert!(err.to_string().starts_with("Judge API error: "));
    }

    #[tokio::test]
    async fn missing_key_fails_without_calling_out() {
        let recorder = Recorder::default();
        let base = spawn_upstream(recording_upstream(recorder.clone(), StatusCode::OK, json!({})))
            .await;

        let err = judge(base, StaticSecrets::default())
            .call(python_hello())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Judge API error: secret RAPIDAPI_KEY is not configured"
        );
        assert!(recorder.requests().is_empty());
    }

    #[test]
    fn request_reads_camel_case() {
        let req: ExecutionRequest =
            serde_json::from_value(json!({ "sourceCode": "x", "languageId": 63 })).unwrap();

        assert_eq!(req.source_code.as_deref(), Some("x"));
        assert_eq!(req.language_id, Some(63));
    }
}
