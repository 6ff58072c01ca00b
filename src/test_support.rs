// src/test_support.rs

//! Shared helpers for unit tests: fixed secrets and fake upstream APIs.

use axum::{
    extract::Query,
    http::{HeaderMap, StatusCode, Uri},
    Json, Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use crate::secrets::SecretProvider;

/// Secret provider backed by a fixed map.
#[derive(Debug, Default, Clone)]
pub struct StaticSecrets(HashMap<String, String>);

impl StaticSecrets {
    pub fn new<const N: usize>(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl SecretProvider for StaticSecrets {
    fn secret(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// One request as seen by a fake upstream.
#[derive(Debug, Clone)]
pub struct Captured {
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Collects every request a fake upstream receives.
#[derive(Debug, Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Captured>>>);

impl Recorder {
    pub fn requests(&self) -> Vec<Captured> {
        self.0.lock().expect("recorder lock").clone()
    }

    fn push(&self, captured: Captured) {
        self.0.lock().expect("recorder lock").push(captured);
    }
}

/// An upstream that records each request and answers with `status` + `reply`.
pub fn recording_upstream(recorder: Recorder, status: StatusCode, reply: Value) -> Router {
    Router::new().fallback(
        move |uri: Uri, Query(query): Query<HashMap<String, String>>, headers: HeaderMap, body: String| {
            let recorder = recorder.clone();
            let reply = reply.clone();
            async move {
                recorder.push(Captured {
                    path: uri.path().to_string(),
                    query,
                    headers,
                    body: serde_json::from_str(&body).unwrap_or(Value::Null),
                });
                (status, Json(reply))
            }
        },
    )
}

/// An upstream that answers every request with a plain-text body.
pub fn text_upstream(status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move || async move { (status, body) })
}

/// Bind `app` to an ephemeral local port and return its base URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake upstream");
    });

    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub async fn dead_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    format!("http://{}", addr)
}
