//! Single-settlement primitive
//!
//! [`channel`] returns a cloneable [`Settler`] and a [`Pending`] future. The
//! first call to [`Settler::resolve`] or [`Settler::reject`] settles the
//! future; every later call is ignored. When every settler is dropped
//! without settling, the future rejects with [`LedgerError::Abandoned`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::FutureExt;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use super::traits::Completion;
use crate::types::{LedgerError, RemoteError};

type Outcome<T> = Result<T, LedgerError>;

/// Settling side of a pending operation
pub struct Settler<T> {
    slot: Arc<Mutex<Option<oneshot::Sender<Outcome<T>>>>>,
    operation: &'static str,
}

impl<T> Clone for Settler<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            operation: self.operation,
        }
    }
}

impl<T> Settler<T> {
    /// Settle with a value; returns false if already settled
    pub fn resolve(&self, value: T) -> bool {
        self.settle(Ok(value))
    }

    /// Settle with an error; returns false if already settled
    pub fn reject(&self, error: LedgerError) -> bool {
        self.settle(Err(error))
    }

    /// Whether the operation has already been settled
    pub fn is_settled(&self) -> bool {
        self.slot.lock().is_none()
    }

    fn settle(&self, outcome: Outcome<T>) -> bool {
        let sender = self.slot.lock().take();
        match sender {
            Some(tx) => {
                // A dropped receiver means the caller stopped waiting.
                let _ = tx.send(outcome);
                true
            }
            None => {
                tracing::warn!(operation = self.operation, "ignoring duplicate settlement");
                false
            }
        }
    }
}

impl<T: Send + 'static> Settler<T> {
    /// Wrap this settler as a completion callback, mapping the collaborator's error
    pub fn completion(self, wrap: fn(RemoteError) -> LedgerError) -> Completion<T> {
        Box::new(move |outcome| match outcome {
            Ok(value) => {
                self.resolve(value);
            }
            Err(e) => {
                self.reject(wrap(e));
            }
        })
    }
}

/// Waiting side of a pending operation
pub struct Pending<T> {
    rx: oneshot::Receiver<Outcome<T>>,
    operation: &'static str,
}

impl<T> Future for Pending<T> {
    type Output = Outcome<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let operation = self.operation;
        self.rx.poll_unpin(cx).map(|received| match received {
            Ok(outcome) => outcome,
            Err(_) => Err(LedgerError::abandoned(operation)),
        })
    }
}

/// Create a linked settler and pending future for `operation`
pub fn channel<T>(operation: &'static str) -> (Settler<T>, Pending<T>) {
    let (tx, rx) = oneshot::channel();
    let settler = Settler {
        slot: Arc::new(Mutex::new(Some(tx))),
        operation,
    };
    (settler, Pending { rx, operation })
}
