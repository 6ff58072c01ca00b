// src/runtime.rs

//! Callable HTTP surface.
//!
//! Exposes `executeCode` and `getAiHelp` the way the hosting platform
//! invokes callable functions, plus a health probe.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::callable::{decode, CallResult};
use crate::functions::{AssistRequest, ExecutionRequest, Functions};

/* ---------------- server ---------------- */

pub fn router(functions: Arc<Functions>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/executeCode", post(execute_code))
        .route("/getAiHelp", post(get_ai_help))
        .with_state(functions)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        path = %req.uri().path()
                    )
                })
                .on_response(|res: &Response, latency: Duration, _span: &Span| {
                    tracing::info!(
                        status = res.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "request completed"
                    );
                }),
        )
}

pub async fn serve(addr: &str, functions: Arc<Functions>) -> anyhow::Result<()> {
    let socket: SocketAddr = addr.parse()?;
    let listener = TcpListener::bind(socket).await?;

    tracing::info!("codehelp functions listening on http://{}", socket);

    axum::serve(listener, router(functions))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

/* ---------------- endpoints ---------------- */

async fn health() -> &'static str {
    "ok"
}

async fn execute_code(State(functions): State<Arc<Functions>>, body: Bytes) -> Response {
    let req: ExecutionRequest = match decode(&body) {
        Ok(req) => req,
        Err(e) => return e.into_response(),
    };

    match functions.execute_code.call(req).await {
        Ok(result) => Json(CallResult { result }).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn get_ai_help(State(functions): State<Arc<Functions>>, body: Bytes) -> Response {
    let req: AssistRequest = match decode(&body) {
        Ok(req) => req,
        Err(e) => return e.into_response(),
    };

    match functions.ai_help.call(req).await {
        Ok(result) => Json(CallResult { result }).into_response(),
        Err(e) => e.into_response(),
    }
}
