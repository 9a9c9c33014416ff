//! # Application State
//!
//! Everything the form knows, in one place. No TUI types here.
//!
//! ```text
//! App
//! ├── generator: Arc<dyn ResponseGenerator>  // who answers submissions
//! ├── input: SessionInput                    // text, tone, webhook URL
//! ├── response: String                       // last reply ("" = none)
//! ├── phase: Phase                           // Idle | Submitting
//! ├── notification: Option<Notification>     // current toast
//! └── notification_ttl: Duration             // toast lifetime
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::notify::{DEFAULT_NOTIFICATION_TTL, Notification};
use crate::core::tone::Tone;
use crate::webhook::ResponseGenerator;

/// What the user has typed and picked. Held in memory only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionInput {
    pub input_text: String,
    pub tone: Tone,
    pub webhook_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// A request is in flight. Further submits are ignored.
    Submitting,
}

pub struct App {
    pub generator: Arc<dyn ResponseGenerator>,
    pub input: SessionInput,
    pub response: String,
    pub phase: Phase,
    pub notification: Option<Notification>,
    pub notification_ttl: Duration,
}

impl App {
    pub fn new(generator: Arc<dyn ResponseGenerator>) -> Self {
        Self {
            generator,
            input: SessionInput::default(),
            response: String::new(),
            phase: Phase::Idle,
            notification: None,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }

    /// Seeds the session fields from resolved configuration.
    pub fn from_config(generator: Arc<dyn ResponseGenerator>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(generator);
        app.input.tone = config.tone;
        app.input.webhook_url = config.webhook_url.clone().unwrap_or_default();
        app.notification_ttl = config.notification_ttl;
        app
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }
}
