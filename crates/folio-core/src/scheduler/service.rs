use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::handle::TaskHandle;
use crate::page::TypingAnimator;

/// Timer loop that drives a [`TypingAnimator`] and publishes its text.
///
/// The latest text is always readable from the watch receiver returned by
/// [`TypingService::new`].
pub struct TypingService {
    animator: TypingAnimator,
    text_tx: watch::Sender<String>,
}

impl TypingService {
    pub fn new(animator: TypingAnimator) -> (Self, watch::Receiver<String>) {
        let (text_tx, text_rx) = watch::channel(animator.text().to_string());
        (
            Self {
                animator,
                text_tx,
            },
            text_rx,
        )
    }

    /// Run until the shutdown signal flips to true or its sender is dropped
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        if self.animator.phrases().is_empty() {
            info!("Typing effect idle: no phrases configured");
            let _ = shutdown.changed().await;
            return;
        }

        debug!("Typing loop started with {} phrases", self.animator.phrases().len());
        let mut delay: Duration = self.animator.initial_delay();

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        debug!("Typing loop received shutdown signal");
                        break;
                    }
                }

                _ = tokio::time::sleep(delay) => {
                    let was_deleting = self.animator.state().is_deleting;
                    delay = self.animator.tick();
                    self.text_tx.send_replace(self.animator.text().to_string());

                    let state = self.animator.state();
                    if !was_deleting && state.is_deleting {
                        debug!("Phrase {} typed, holding", state.phrase_index);
                    }
                }
            }
        }
    }

    /// Spawn the loop on the current tokio runtime
    pub fn spawn(self) -> TaskHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let join = tokio::spawn(self.run(shutdown_rx));
        TaskHandle::new("typing", shutdown_tx, join)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::TypingTiming;

    fn animator(phrases: &[&str]) -> TypingAnimator {
        TypingAnimator::new(
            phrases.iter().map(|p| p.to_string()).collect(),
            TypingTiming {
                typing_interval: Duration::from_millis(80),
                deleting_interval: Duration::from_millis(30),
                pause_duration: Duration::from_millis(2000),
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_publishes_typed_text() {
        let (service, text) = TypingService::new(animator(&["Hi"]));
        let handle = service.spawn();

        assert_eq!(*text.borrow(), "");
        tokio::time::sleep(Duration::from_millis(90)).await;
        assert_eq!(*text.borrow(), "H");
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(*text.borrow(), "Hi");
        // still holding the full phrase during the pause
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(*text.borrow(), "Hi");

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_published_text_follows_trace() {
        let (service, text) = TypingService::new(animator(&["A", "BC"]));
        let handle = service.spawn();

        // Steps land at 80, 2080, 2160, 2240, 4240, 4270, 4350 ms
        let samples = [
            (40, ""),
            (100, "A"),
            (2100, ""),
            (2200, "B"),
            (2300, "BC"),
            (4250, "B"),
            (4300, ""),
            (4400, "A"),
        ];
        let mut elapsed = 0;
        for (at, expected) in samples {
            tokio::time::sleep(Duration::from_millis(at - elapsed)).await;
            elapsed = at;
            assert_eq!(*text.borrow(), expected, "at {} ms", at);
        }

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_the_loop() {
        let (service, text) = TypingService::new(animator(&["abc"]));
        let handle = service.spawn();
        tokio::time::sleep(Duration::from_millis(100)).await;
        drop(handle);

        tokio::time::sleep(Duration::from_secs(5)).await;
        // sender went away with the task, nothing new was published
        assert!(text.has_changed().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_without_phrases() {
        let (service, text) = TypingService::new(animator(&[]));
        let handle = service.spawn();
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(*text.borrow(), "");
        assert!(!handle.is_finished());
        handle.shutdown().await;
    }
}
