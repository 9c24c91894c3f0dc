use serde_json::Value;

use crate::error::{Error, Result};

/// Pass successful responses through; turn anything else into `Error::ApiError`.
pub(crate) async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::ApiError {
        status,
        message: api_error_message(&body),
    })
}

/// Google APIs wrap failures as `{"error": {"code", "message", "status"}}`.
/// Prefer that message; fall back to the raw body.
pub(crate) fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
