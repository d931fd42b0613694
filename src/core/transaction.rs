//! Transaction adapter
//!
//! Two-phase protocol over a transaction builder: configure, then submit.
//!
//! ```text
//! remote.transaction() ──► configure(&mut builder) ──Ok──► builder.submit(done) ──► result
//!                                   │
//!                                   └──Err──► rejected, nothing submitted
//! ```

use super::connection::ConnectionHandle;
use super::settle;
use super::traits::{Remote, TransactionBuilder};
use crate::types::{LedgerError, SubmissionResult};

/// Build, configure and submit one transaction
///
/// A fresh builder bound to `handle` is passed to `configure`. If
/// configuration fails the error is returned unchanged and the builder is
/// dropped without submitting. Otherwise the builder is submitted exactly
/// once and the future settles with the submission outcome.
///
/// # Errors
///
/// * any error returned by `configure` (typically `LedgerError::Validation`)
/// * `LedgerError::Submission` - the network rejected the transaction
/// * `LedgerError::Abandoned` - the builder dropped its completion callback
pub async fn transaction<R, F>(
    handle: &ConnectionHandle<R>,
    configure: F,
) -> Result<SubmissionResult, LedgerError>
where
    R: Remote,
    F: FnOnce(&mut R::Transaction) -> Result<(), LedgerError>,
{
    let mut tx = handle.remote().transaction();
    if let Err(e) = configure(&mut tx) {
        tracing::debug!(peer = %handle.peer(), error = %e, "transaction refused before submission");
        return Err(e);
    }

    let (settler, pending) = settle::channel::<SubmissionResult>("submission");
    tracing::debug!(peer = %handle.peer(), "submitting transaction");
    tx.submit(settler.completion(LedgerError::Submission));
    pending.await
}
