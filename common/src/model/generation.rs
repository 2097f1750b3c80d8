use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::UploadError;

/// Message shown when the server rejects a request without saying why.
pub const DEFAULT_REJECTION: &str = "Failed to generate test cases";

/// A successful generation, as returned by `POST /generate`.
///
/// `filename` is the artifact reference the server stored the generated
/// tests under; it is the only value later needed to build the download URL.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct GenerationResult {
    /// Title of the uploaded API specification.
    pub api_title: String,
    /// Number of endpoints found in the specification.
    pub endpoints_count: u64,
    /// Server-assigned name of the stored artifact.
    pub filename: String,
    /// The generated test source, shown verbatim.
    pub test_cases: String,
}

/// Raw body of a `POST /generate` reply.
///
/// The server emits one flat JSON object for both outcomes and only promises
/// that `success` is truthy on success. The body is therefore kept as a loose
/// JSON value; result fields are decoded only once the reply is known to be a
/// success, so a rejection never fails on fields it does not use.
#[derive(Clone, Debug, Default)]
pub struct GenerateResponse {
    body: Value,
}

impl GenerateResponse {
    /// Parses a reply body. Fails only when the body is not JSON at all.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            body: serde_json::from_str(body)?,
        })
    }

    /// Whether the server flagged this reply as a success.
    pub fn is_success(&self) -> bool {
        self.body.get("success").is_some_and(is_truthy)
    }

    /// Server-side traceback attached to failures. Logged, never displayed.
    pub fn details(&self) -> Option<&str> {
        self.body.get("details").and_then(Value::as_str)
    }

    /// The server's message, when it sent a non-empty string.
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Splits the reply into the result or the rejection it represents.
    ///
    /// `http_ok` is whether the status was in the 2xx range; a reply counts as
    /// a success only when both the status and the `success` flag agree.
    pub fn into_result(self, http_ok: bool) -> Result<GenerationResult, UploadError> {
        if http_ok && self.is_success() {
            return Ok(serde_json::from_value(self.body)?);
        }

        let message = self.error_message().unwrap_or(DEFAULT_REJECTION);
        Err(UploadError::ServerRejected(message.to_string()))
    }
}

/// JavaScript truthiness for a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
