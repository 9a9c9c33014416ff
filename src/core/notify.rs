//! # Notifications
//!
//! Every submission attempt ends in exactly one of three toasts: a missing
//! field, a failed call, or success. Toasts expire on their own and never
//! block input.

use std::time::{Duration, Instant};

use crate::core::validate::ValidationError;

/// How long a toast stays up unless configured otherwise.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    MissingField(ValidationError),
    CallFailed,
    Success,
}

impl Outcome {
    pub fn description(self) -> &'static str {
        match self {
            Outcome::MissingField(ValidationError::MissingInputText) => {
                "Please enter the text you received"
            }
            Outcome::MissingField(ValidationError::MissingWebhookUrl) => {
                "Please configure the n8n webhook URL"
            }
            Outcome::CallFailed => {
                "Failed to generate a reply. Check the webhook URL and try again."
            }
            Outcome::Success => "Response generated successfully!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub outcome: Outcome,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(outcome: Outcome, created_at: Instant) -> Self {
        Self {
            outcome,
            created_at,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        match self.outcome {
            Outcome::Success => NotificationKind::Success,
            Outcome::MissingField(_) | Outcome::CallFailed => NotificationKind::Error,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind() {
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
        }
    }

    pub fn description(&self) -> &'static str {
        self.outcome.description()
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}
