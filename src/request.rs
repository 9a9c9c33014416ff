//! Runs one webhook call on a tokio task and reports back as an `Action`.
//!
//! Exactly one `Action::RequestSettled` is delivered per spawned request.
//! If the task dies before reporting (panic, runtime shutdown), the
//! [`SettleGuard`] sends `Err(WebhookError::Aborted)` from its `Drop`, so the
//! form can never stay stuck in `Submitting`.

use std::sync::Arc;
use std::sync::mpsc;

use log::{debug, info, warn};

use crate::core::action::Action;
use crate::webhook::{RequestPayload, ResponseGenerator, WebhookError};

struct SettleGuard {
    tx: mpsc::Sender<Action>,
    settled: bool,
}

impl SettleGuard {
    fn new(tx: mpsc::Sender<Action>) -> Self {
        Self { tx, settled: false }
    }

    fn settle(mut self, result: Result<String, WebhookError>) {
        self.settled = true;
        if self.tx.send(Action::RequestSettled(result)).is_err() {
            warn!("Failed to deliver request result: receiver dropped");
        }
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        warn!("Request task ended without a result; reporting abort");
        let _ = self.tx.send(Action::RequestSettled(Err(WebhookError::Aborted)));
    }
}

pub fn spawn_request(
    generator: Arc<dyn ResponseGenerator>,
    url: String,
    payload: RequestPayload,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning {} request", generator.name());
    let guard = SettleGuard::new(tx);

    tokio::spawn(async move {
        let started = std::time::Instant::now();
        let result = generator.generate(&url, &payload).await;
        debug!(
            "Request settled after {}ms (ok={})",
            started.elapsed().as_millis(),
            result.is_ok()
        );
        guard.settle(result);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::SessionInput;
    use crate::test_support::{PanickingGenerator, ScriptedGenerator};

    fn payload() -> RequestPayload {
        RequestPayload::from_input(&SessionInput {
            input_text: "hi".to_string(),
            ..Default::default()
        })
    }

    fn drain(rx: &mpsc::Receiver<Action>) -> Vec<Action> {
        rx.try_iter().collect()
    }

    #[tokio::test]
    async fn test_success_settles_once() {
        let (tx, rx) = mpsc::channel();
        let generator = Arc::new(ScriptedGenerator(Ok("Hello".to_string())));
        spawn_request(generator, "http://hook".to_string(), payload(), tx)
            .await
            .unwrap();

        let actions = drain(&rx);
        assert_eq!(actions.len(), 1);
        assert!(matches!(&actions[0], Action::RequestSettled(Ok(text)) if text == "Hello"));
    }

    #[tokio::test]
    async fn test_error_settles_once() {
        let (tx, rx) = mpsc::channel();
        let generator = Arc::new(ScriptedGenerator(Err(WebhookError::Network(
            "refused".to_string(),
        ))));
        spawn_request(generator, "http://hook".to_string(), payload(), tx)
            .await
            .unwrap();

        let actions = drain(&rx);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            &actions[0],
            Action::RequestSettled(Err(WebhookError::Network(_)))
        ));
    }

    #[tokio::test]
    async fn test_panic_still_settles_with_abort() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_request(
            Arc::new(PanickingGenerator),
            "http://hook".to_string(),
            payload(),
            tx,
        );
        assert!(handle.await.is_err(), "task should have panicked");

        let actions = drain(&rx);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            &actions[0],
            Action::RequestSettled(Err(WebhookError::Aborted))
        ));
    }
}
