// src/callable.rs

//! Callable protocol envelopes.
//!
//! Requests arrive as `{"data": <payload>}`. Successful replies are
//! `{"result": <value>}`; failures are rendered by `CallableError`.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::CallableError;

#[derive(Debug, Deserialize)]
struct CallRequest {
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct CallResult<T> {
    pub result: T,
}

/// Decode a raw request body into the function's payload type.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, CallableError> {
    let envelope: CallRequest = serde_json::from_slice(body).map_err(|e| {
        CallableError::InvalidArgument(format!("Request body is not valid JSON: {}", e))
    })?;

    let data = envelope.data.ok_or_else(|| {
        CallableError::InvalidArgument("Request body is missing data.".to_string())
    })?;

    serde_json::from_value(data)
        .map_err(|e| CallableError::InvalidArgument(format!("Invalid request data: {}", e)))
}
