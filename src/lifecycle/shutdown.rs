//! Shutdown coordination.

use std::future::Future;

use tokio::sync::broadcast;

use crate::lifecycle::signals::{wait_for_termination, TerminationSignal};

/// Broadcast handle that tells long-running tasks to stop.
///
/// Cloning shares the same channel, so any clone may trigger.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal. Returns how many subscribers were told.
    pub fn trigger(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }

    /// Trigger once SIGINT or SIGTERM arrives.
    pub fn trigger_on_termination(&self) -> tokio::task::JoinHandle<()> {
        self.trigger_on(wait_for_termination())
    }

    /// Trigger when `signal` resolves successfully.
    ///
    /// If the listener fails the server keeps running; only a received
    /// signal shuts it down.
    pub fn trigger_on<F>(&self, signal: F) -> tokio::task::JoinHandle<()>
    where
        F: Future<Output = std::io::Result<TerminationSignal>> + Send + 'static,
    {
        let shutdown = self.clone();
        tokio::spawn(async move {
            match signal.await {
                Ok(signal) => {
                    tracing::info!(%signal, "Signal received, shutting down");
                    shutdown.trigger();
                }
                Err(e) => tracing::error!(error = %e, "Failed to listen for termination signals"),
            }
        })
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_all_subscribers() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.clone().subscribe();

        assert_eq!(shutdown.trigger(), 2);
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_received_signal_triggers() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();

        shutdown
            .trigger_on(async { Ok(TerminationSignal::Terminate) })
            .await
            .unwrap();
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_listener_failure_does_not_trigger() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();

        shutdown
            .trigger_on(async {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "signal handler unavailable"))
            })
            .await
            .unwrap();
        assert!(matches!(rx.try_recv(), Err(broadcast::error::TryRecvError::Empty)));
    }

    #[test]
    fn test_trigger_without_subscribers() {
        assert_eq!(Shutdown::new().trigger(), 0);
    }
}
