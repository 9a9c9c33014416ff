//! # Actions
//!
//! Everything that can happen to the form becomes an `Action`.
//! User presses Ctrl+G? That's `Action::Submit`.
//! The webhook answers? That's `Action::RequestSettled(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing any I/O the caller must perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ```text
//!            Submit (valid)
//!   Idle ───────────────────▶ Submitting
//!    ▲                            │
//!    └──── RequestSettled(_) ─────┘
//! ```

use std::time::Instant;

use log::{debug, error, info, warn};

use crate::core::notify::{Notification, Outcome};
use crate::core::state::{App, Phase};
use crate::core::tone::Tone;
use crate::core::validate::validate;
use crate::webhook::{RequestPayload, WebhookError};

#[derive(Debug)]
pub enum Action {
    EditInputText(String),
    EditWebhookUrl(String),
    SelectTone(Tone),
    Submit,
    /// The in-flight request finished, one way or another.
    RequestSettled(Result<String, WebhookError>),
    DismissNotification,
    /// Clock tick; expires stale notifications.
    Tick(Instant),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    SpawnRequest { url: String, payload: RequestPayload },
    Quit,
}

fn notify(app: &mut App, outcome: Outcome) {
    app.notification = Some(Notification::new(outcome, Instant::now()));
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EditInputText(text) => {
            app.input.input_text = text;
            Effect::None
        }
        Action::EditWebhookUrl(url) => {
            app.input.webhook_url = url;
            Effect::None
        }
        Action::SelectTone(tone) => {
            app.input.tone = tone;
            Effect::None
        }
        Action::Submit => {
            if app.is_loading() {
                debug!("Submit ignored: a request is already in flight");
                return Effect::None;
            }
            if let Err(e) = validate(&app.input) {
                warn!("Submission rejected: {}", e);
                notify(app, Outcome::MissingField(e));
                return Effect::None;
            }

            app.phase = Phase::Submitting;
            app.response.clear();
            let payload = RequestPayload::from_input(&app.input);
            info!("Submitting with tone {}", payload.tone.id());
            Effect::SpawnRequest {
                url: app.input.webhook_url.trim().to_string(),
                payload,
            }
        }
        Action::RequestSettled(result) => {
            if !app.is_loading() {
                warn!("Request settled while idle; ignoring: {:?}", result);
                return Effect::None;
            }
            app.phase = Phase::Idle;
            match result {
                Ok(text) => {
                    info!("Reply received ({} bytes)", text.len());
                    app.response = text;
                    notify(app, Outcome::Success);
                }
                Err(e) => {
                    error!("Failed to generate reply: {}", e);
                    notify(app, Outcome::CallFailed);
                }
            }
            Effect::None
        }
        Action::DismissNotification => {
            app.notification = None;
            Effect::None
        }
        Action::Tick(now) => {
            if app
                .notification
                .as_ref()
                .is_some_and(|n| n.is_expired(now, app.notification_ttl))
            {
                app.notification = None;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate::ValidationError;
    use crate::test_support::test_app;
    use std::time::Duration;

    fn filled_app() -> App {
        let mut app = test_app();
        update(&mut app, Action::EditInputText("  where is my order?  ".to_string()));
        update(&mut app, Action::EditWebhookUrl(" http://hook/abc ".to_string()));
        update(&mut app, Action::SelectTone(Tone::Humor));
        app
    }

    fn outcome(app: &App) -> Option<Outcome> {
        app.notification.as_ref().map(|n| n.outcome)
    }

    #[test]
    fn test_submit_empty_text_notifies_without_request() {
        let mut app = test_app();
        update(&mut app, Action::EditWebhookUrl("http://hook".to_string()));
        let effect = update(&mut app, Action::Submit);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.phase, Phase::Idle);
        assert_eq!(
            outcome(&app),
            Some(Outcome::MissingField(ValidationError::MissingInputText))
        );
    }

    #[test]
    fn test_submit_empty_url_notifies_without_request() {
        let mut app = test_app();
        update(&mut app, Action::EditInputText("hello".to_string()));
        let effect = update(&mut app, Action::Submit);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.phase, Phase::Idle);
        assert_eq!(
            outcome(&app),
            Some(Outcome::MissingField(ValidationError::MissingWebhookUrl))
        );
    }

    #[test]
    fn test_valid_submit_spawns_request() {
        let mut app = filled_app();
        app.response = "old reply".to_string();

        let effect = update(&mut app, Action::Submit);

        match effect {
            Effect::SpawnRequest { url, payload } => {
                assert_eq!(url, "http://hook/abc");
                assert_eq!(payload.input_text, "where is my order?");
                assert_eq!(payload.tone, Tone::Humor);
                assert!(payload.timestamp.ends_with('Z'));
            }
            other => panic!("Expected SpawnRequest, got {:?}", other),
        }
        assert!(app.is_loading());
        assert!(app.response.is_empty(), "response is cleared on submit");
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        let mut app = filled_app();
        update(&mut app, Action::Submit);
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert!(app.is_loading());
    }

    #[test]
    fn test_settle_ok_sets_response_and_idles() {
        let mut app = filled_app();
        update(&mut app, Action::Submit);
        update(&mut app, Action::RequestSettled(Ok("Hello".to_string())));
        assert_eq!(app.phase, Phase::Idle);
        assert_eq!(app.response, "Hello");
        assert_eq!(outcome(&app), Some(Outcome::Success));
    }

    #[test]
    fn test_settle_err_leaves_response_and_idles() {
        let mut app = filled_app();
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::RequestSettled(Err(WebhookError::Http {
                status: 500,
                body: "boom".to_string(),
            })),
        );
        assert_eq!(app.phase, Phase::Idle);
        assert!(app.response.is_empty());
        assert_eq!(outcome(&app), Some(Outcome::CallFailed));
    }

    #[test]
    fn test_every_error_kind_returns_to_idle() {
        let errors = [
            WebhookError::Network("refused".to_string()),
            WebhookError::Http { status: 404, body: String::new() },
            WebhookError::Parse("eof".to_string()),
            WebhookError::Aborted,
        ];
        for err in errors {
            let mut app = filled_app();
            update(&mut app, Action::Submit);
            update(&mut app, Action::RequestSettled(Err(err)));
            assert!(!app.is_loading());
            assert_eq!(outcome(&app), Some(Outcome::CallFailed));
        }
    }

    #[test]
    fn test_stray_settle_while_idle_changes_nothing() {
        let mut app = filled_app();
        update(&mut app, Action::RequestSettled(Ok("late".to_string())));
        assert!(app.response.is_empty());
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_failed_resubmit_leaves_response_cleared() {
        // Cleared at submit time; a failure does not restore the old reply.
        let mut app = filled_app();
        update(&mut app, Action::Submit);
        update(&mut app, Action::RequestSettled(Ok("first".to_string())));
        update(&mut app, Action::Submit);
        assert!(app.response.is_empty());
        update(&mut app, Action::RequestSettled(Err(WebhookError::Aborted)));
        assert!(app.response.is_empty());
    }

    #[test]
    fn test_tick_expires_notification() {
        let mut app = test_app();
        update(&mut app, Action::Submit);
        let created = app.notification.as_ref().unwrap().created_at;

        update(&mut app, Action::Tick(created + Duration::from_secs(1)));
        assert!(app.notification.is_some());

        let ttl = app.notification_ttl;
        update(&mut app, Action::Tick(created + ttl));
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_dismiss_and_quit() {
        let mut app = test_app();
        update(&mut app, Action::Submit);
        assert!(app.notification.is_some());
        update(&mut app, Action::DismissNotification);
        assert!(app.notification.is_none());
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
