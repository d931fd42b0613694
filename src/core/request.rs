//! Request adapter
//!
//! Turns a one-shot, event-emitting request object into a single future.

use super::settle;
use super::traits::LedgerRequest;
use crate::types::{LedgerError, Payload};

/// Run one request and settle with its outcome
///
/// `make` must return a fresh request that has not been started. Both
/// handlers are registered before the request is started. The first event
/// delivered settles the future; an error is returned as
/// `LedgerError::Request` carrying the collaborator's error unchanged.
///
/// There is no timeout: a request that stays alive but never fires either
/// event keeps the future pending.
///
/// # Errors
///
/// * `LedgerError::Request` - the request emitted its error event
/// * `LedgerError::Abandoned` - the request dropped both handlers unfired
pub async fn request<Q, F>(make: F) -> Result<Payload, LedgerError>
where
    Q: LedgerRequest,
    F: FnOnce() -> Q,
{
    let mut req = make();
    let (settler, pending) = settle::channel::<Payload>("request");

    let on_success = settler.clone();
    req.on_success(Box::new(move |payload| {
        on_success.resolve(payload);
    }));
    req.on_error(Box::new(move |e| {
        tracing::debug!(error = %e, "request failed");
        settler.reject(LedgerError::Request(e));
    }));

    req.request();
    pending.await
}
