//! HTTP implementation of [`ResponseGenerator`].
//!
//! One `POST` per call, JSON in, JSON out. No retries and no timeout beyond
//! reqwest's defaults: a slow webhook simply keeps the form busy.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use super::extract::extract_display_text;
use super::generator::{ResponseGenerator, WebhookError};
use super::types::RequestPayload;

pub struct WebhookClient {
    client: reqwest::Client,
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WebhookClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

/// Parses a 2xx body into a JSON document and extracts the display text.
fn parse_body(body: &str) -> Result<String, WebhookError> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| WebhookError::Parse(e.to_string()))?;
    if data.is_null() {
        return Err(WebhookError::Parse("response body is JSON null".to_string()));
    }
    debug!("Webhook response: {}", data);
    Ok(extract_display_text(&data))
}

#[async_trait]
impl ResponseGenerator for WebhookClient {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn generate(&self, url: &str, payload: &RequestPayload) -> Result<String, WebhookError> {
        let url = url.trim();
        info!(
            "Webhook request: url={}, tone={}, input_len={}",
            url,
            payload.tone.id(),
            payload.input_text.len()
        );

        // `.json()` sets Content-Type: application/json
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| WebhookError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Webhook response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unreadable body".to_string());
            warn!("Webhook HTTP error: {} - {}", status.as_u16(), body);
            return Err(WebhookError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WebhookError::Network(e.to_string()))?;

        let text = parse_body(&body)?;
        info!("Webhook reply extracted: {} bytes", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_extracts() {
        assert_eq!(parse_body(r#"{"output":"Hi"}"#), Ok("Hi".to_string()));
    }

    #[test]
    fn test_parse_body_rejects_non_json() {
        assert!(matches!(parse_body("<html>oops</html>"), Err(WebhookError::Parse(_))));
        assert!(matches!(parse_body(""), Err(WebhookError::Parse(_))));
    }

    #[test]
    fn test_parse_body_rejects_null_document() {
        assert!(matches!(parse_body("null"), Err(WebhookError::Parse(_))));
    }
}
