//! Pulls a display string out of whatever JSON the webhook returned.
//!
//! Precedence, first usable candidate wins:
//!
//! ```text
//! response.output  >  output  >  response (string only)  >  message  >  fallback
//! ```
//!
//! A candidate is usable when present and not an "empty" value: `null`,
//! `false`, `0` and `""` are skipped. A chosen non-string is rendered as
//! JSON text so the UI only ever shows strings.

use serde_json::Value;

/// Shown when the webhook answered 2xx but nothing recognisable came back.
pub const FALLBACK_RESPONSE: &str = "Response generated successfully!";

/// Returns true for values the upstream tool uses to mean "nothing here".
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn usable(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !is_empty_value(v))
}

fn to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn extract_display_text(data: &Value) -> String {
    let nested_output = usable(data.get("response").and_then(|r| r.get("output")));
    let output = usable(data.get("output"));
    let response = usable(data.get("response")).filter(|r| r.is_string());
    let message = usable(data.get("message"));

    nested_output
        .or(output)
        .or(response)
        .or(message)
        .map(to_display)
        .unwrap_or_else(|| FALLBACK_RESPONSE.to_string())
}
