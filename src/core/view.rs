//! Pure mapping from [`App`] to what a front end should draw.

use std::time::Instant;

use crate::core::notify::NotificationKind;
use crate::core::state::App;
use crate::core::tone::Tone;

pub const WEBHOOK_PLACEHOLDER: &str = "https://your-n8n-instance.com/webhook/your-webhook-id";
pub const INPUT_PLACEHOLDER: &str = "Paste the text you received and want to reply to...";
pub const BUTTON_IDLE_LABEL: &str = "Generate Reply";
pub const BUTTON_BUSY_LABEL: &str = "Generating...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneRow {
    pub tone: Tone,
    pub label: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub webhook_url: String,
    pub input_text: String,
    pub tones: Vec<ToneRow>,
    pub button: ButtonView,
    /// Present only when there is something to show.
    pub response: Option<String>,
    pub notification: Option<NotificationView>,
}

pub fn view(app: &App, now: Instant) -> FormView {
    let busy = app.is_loading();

    let tones = Tone::ALL
        .into_iter()
        .map(|tone| ToneRow {
            tone,
            label: tone.label(),
            description: tone.description(),
            selected: tone == app.input.tone,
        })
        .collect();

    let notification = app
        .notification
        .as_ref()
        .filter(|n| !n.is_expired(now, app.notification_ttl))
        .map(|n| NotificationView {
            kind: n.kind(),
            title: n.title(),
            description: n.description(),
        });

    FormView {
        webhook_url: app.input.webhook_url.clone(),
        input_text: app.input.input_text.clone(),
        tones,
        button: ButtonView {
            label: if busy { BUTTON_BUSY_LABEL } else { BUTTON_IDLE_LABEL },
            enabled: !busy,
            busy,
        },
        response: (!app.response.is_empty()).then(|| app.response.clone()),
        notification,
    }
}
