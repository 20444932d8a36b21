use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RequestError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}{}", suffix(.message))]
    Status { status: u16, message: Option<String> },

    /// No response was received.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx body that did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

fn suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `message` field of the server's error body, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// User-facing text: the server's message, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Extract a human-readable message from an error body (`{"message": ...}` or `{"error": ...}`).
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
