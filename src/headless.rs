//! One-shot submission without the TUI (`retort --text "..."`).
//!
//! Drives the same `update()` reducer the TUI uses, so validation, payload
//! shape and reply extraction are identical.

use std::sync::mpsc;

use log::{info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::notify::{NotificationKind, Outcome};
use crate::core::state::App;
use crate::request::spawn_request;
use crate::webhook::WebhookError;

/// Submits the current form once and waits for it to settle.
///
/// Returns the reply text, or the user-facing description of whatever went
/// wrong.
pub async fn submit_once(app: &mut App) -> Result<String, &'static str> {
    let (tx, rx) = mpsc::channel();

    if let Effect::SpawnRequest { url, payload } = update(app, Action::Submit) {
        spawn_request(app.generator.clone(), url, payload, tx);
        let settled = tokio::task::spawn_blocking(move || rx.recv()).await;
        let action = match settled {
            Ok(Ok(action)) => action,
            _ => {
                warn!("Request channel closed without a result");
                Action::RequestSettled(Err(WebhookError::Aborted))
            }
        };
        update(app, action);
    }

    match app.notification.as_ref() {
        Some(n) if n.kind() == NotificationKind::Success => {
            info!("Headless submission succeeded");
            Ok(app.response.clone())
        }
        Some(n) => Err(n.description()),
        None => Err(Outcome::CallFailed.description()),
    }
}
