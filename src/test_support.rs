//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::webhook::{RequestPayload, ResponseGenerator, WebhookError};

/// A generator for tests that never talk to the network.
pub struct NoopGenerator;

#[async_trait]
impl ResponseGenerator for NoopGenerator {
    fn name(&self) -> &str {
        "noop"
    }

    async fn generate(&self, _url: &str, _payload: &RequestPayload) -> Result<String, WebhookError> {
        Ok(String::new())
    }
}

/// Always answers with the same result.
pub struct ScriptedGenerator(pub Result<String, WebhookError>);

#[async_trait]
impl ResponseGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, _url: &str, _payload: &RequestPayload) -> Result<String, WebhookError> {
        self.0.clone()
    }
}

/// Panics mid-request, for exercising the settle guard.
pub struct PanickingGenerator;

#[async_trait]
impl ResponseGenerator for PanickingGenerator {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn generate(&self, _url: &str, _payload: &RequestPayload) -> Result<String, WebhookError> {
        panic!("generator blew up")
    }
}

/// Creates a test App with a NoopGenerator.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopGenerator))
}
