//! Submission gate. Only presence is checked: the URL is not parsed and the
//! tone is always valid by construction.

use std::fmt;

use crate::core::state::SessionInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Received text is empty or whitespace-only.
    MissingInputText,
    /// Webhook URL is empty or whitespace-only.
    MissingWebhookUrl,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingInputText => write!(f, "missing input text"),
            ValidationError::MissingWebhookUrl => write!(f, "missing webhook URL"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks the two required fields, input text first.
pub fn validate(input: &SessionInput) -> Result<(), ValidationError> {
    if input.input_text.trim().is_empty() {
        return Err(ValidationError::MissingInputText);
    }
    if input.webhook_url.trim().is_empty() {
        return Err(ValidationError::MissingWebhookUrl);
    }
    Ok(())
}
