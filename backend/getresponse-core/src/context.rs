//! Per-call cancellation and deadline.
//!
//! A [`CallContext`] is passed to every operation. It can carry a deadline,
//! a cancellation signal, both, or neither. When either fires while the
//! exchange is in flight, the transport future is dropped (which aborts the
//! underlying connection) and the call returns a `Transport` error of kind
//! `Timeout` or `Cancelled`.

use crate::error::GetResponseError;

use std::future::{Future, pending};
use std::time::Duration;

use tokio::sync::watch;

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    timeout: Option<Duration>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Cancels every [`CallContext`] cloned from the one it was created with.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl CallContext {
    /// No deadline, no cancellation.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a cancellation signal, replacing any previous one.
    pub fn cancellable(mut self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        self.cancel = Some(receiver);
        (self, CancelHandle { sender })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|receiver| *receiver.borrow())
            .unwrap_or(false)
    }

    /// Resolves once cancelled. Never resolves without a signal, or after the
    /// handle was dropped without cancelling.
    async fn cancelled(&self) {
        match &self.cancel {
            Some(receiver) => {
                let mut receiver = receiver.clone();
                if receiver.wait_for(|cancelled| *cancelled).await.is_err() {
                    pending::<()>().await;
                }
            }
            None => pending::<()>().await,
        }
    }

    /// Drive `call` under this context's deadline and cancellation.
    pub(crate) async fn run<F, T>(&self, call: F) -> Result<T, GetResponseError>
    where
        F: Future<Output = Result<T, GetResponseError>>,
    {
        if self.is_cancelled() {
            return Err(GetResponseError::cancelled());
        }

        let bounded = async {
            match self.timeout {
                Some(limit) => match tokio::time::timeout(limit, call).await {
                    Ok(result) => result,
                    Err(_) => Err(GetResponseError::deadline_exceeded(limit)),
                },
                None => call.await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(GetResponseError::cancelled()),
            result = bounded => result,
        }
    }
}
