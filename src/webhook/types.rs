use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::core::state::SessionInput;
use crate::core::tone::Tone;

/// The JSON body posted to the webhook. Field names are fixed by the
/// receiving workflow.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RequestPayload {
    #[serde(rename = "inputText")]
    pub input_text: String,
    pub tone: Tone,
    /// ISO-8601, UTC, millisecond precision (`2024-05-01T12:00:00.000Z`)
    pub timestamp: String,
}

impl RequestPayload {
    /// Builds a payload stamped with the current time.
    pub fn from_input(input: &SessionInput) -> Self {
        Self::at(input, Utc::now())
    }

    pub fn at(input: &SessionInput, now: DateTime<Utc>) -> Self {
        Self {
            input_text: input.input_text.trim().to_string(),
            tone: input.tone,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
