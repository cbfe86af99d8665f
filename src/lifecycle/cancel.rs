//! Cancellation coordination for configured project loads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Coordinator for cancelling in-flight work.
///
/// Provides a broadcast channel that every outstanding [`CancelToken`] listens on.
#[derive(Debug)]
pub struct Cancellation {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
    cancelled: Arc<AtomicBool>,
}

impl Cancellation {
    /// Create a new cancellation coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Hand out a token observing this coordinator.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            tx: self.tx.clone(),
            cancelled: self.cancelled.clone(),
        }
    }

    /// Trigger cancellation. Idempotent.
    pub fn trigger(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        let _ = self.tx.send(());
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable view of a [`Cancellation`] threaded through load calls.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: broadcast::Sender<()>,
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// A token that is never cancelled.
    pub fn none() -> Self {
        Cancellation::new().token()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once cancellation has been triggered.
    ///
    /// Pends forever for a token that is never cancelled, so it is meant to be
    /// raced against real work in `tokio::select!`.
    pub async fn cancelled(&self) {
        // Subscribe before checking the flag so a trigger in between is not lost.
        let mut rx = self.tx.subscribe();
        if self.is_cancelled() {
            return;
        }
        let _ = rx.recv().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_wakes_waiters() {
        let cancellation = Cancellation::new();
        let token = cancellation.token();

        let waiter = tokio::spawn(async move { token.cancelled().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        cancellation.trigger();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }

    #[tokio::test]
    async fn test_token_after_trigger() {
        let cancellation = Cancellation::new();
        cancellation.trigger();

        let token = cancellation.token();
        assert!(token.is_cancelled());
        tokio::time::timeout(Duration::from_millis(100), token.cancelled())
            .await
            .expect("already cancelled token resolves immediately");
    }

    #[tokio::test]
    async fn test_none_never_cancels() {
        let token = CancelToken::none();
        assert!(!token.is_cancelled());
        assert!(tokio::time::timeout(Duration::from_millis(20), token.cancelled())
            .await
            .is_err());
    }
}
