pub mod client;
pub mod extract;
pub mod generator;
pub mod types;

pub use client::WebhookClient;
pub use extract::{FALLBACK_RESPONSE, extract_display_text};
pub use generator::{ResponseGenerator, WebhookError};
pub use types::RequestPayload;
