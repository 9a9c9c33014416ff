use std::fmt;

use async_trait::async_trait;

use super::types::RequestPayload;

/// Errors that can occur while asking the webhook for a reply.
/// None of these are shown verbatim to the user; they are logged.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookError {
    /// Transport failure (DNS, connection refused, malformed URL).
    Network(String),
    /// The webhook answered with a non-2xx status.
    Http { status: u16, body: String },
    /// The body was not a JSON document we can read a reply from.
    Parse(String),
    /// The request task ended without reporting a result.
    Aborted,
}

impl fmt::Display for WebhookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebhookError::Network(msg) => write!(f, "network error: {msg}"),
            WebhookError::Http { status, body } => {
                write!(f, "HTTP error (status {status}): {body}")
            }
            WebhookError::Parse(msg) => write!(f, "parse error: {msg}"),
            WebhookError::Aborted => write!(f, "request task ended without a result"),
        }
    }
}

impl std::error::Error for WebhookError {}

/// Something that turns a payload into display text.
///
/// The production implementation is [`WebhookClient`](super::WebhookClient);
/// tests swap in scripted generators.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    /// Sends one request and returns the text to display.
    async fn generate(&self, url: &str, payload: &RequestPayload) -> Result<String, WebhookError>;
}
