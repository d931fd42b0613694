//! Ledger lookups
//!
//! Full-ledger queries can be expensive for the server and are only answered
//! by trusted peers.

use crate::core::{request, ConnectionHandle, Remote};
use crate::types::{LedgerError, LedgerOptions, Payload, RequestCommand};

/// Ledger selected by `options`
pub async fn ledger<R: Remote>(
    handle: &ConnectionHandle<R>,
    options: LedgerOptions,
) -> Result<Payload, LedgerError> {
    request(|| handle.remote().request(RequestCommand::Ledger(options))).await
}

/// Most recently closed ledger
pub async fn ledger_closed<R: Remote>(
    handle: &ConnectionHandle<R>,
) -> Result<Payload, LedgerError> {
    request(|| handle.remote().request(RequestCommand::LedgerClosed)).await
}

/// Header of the latest ledger
pub async fn ledger_header<R: Remote>(
    handle: &ConnectionHandle<R>,
) -> Result<Payload, LedgerError> {
    request(|| handle.remote().request(RequestCommand::LedgerHeader)).await
}

/// Ledger currently being built
pub async fn ledger_current<R: Remote>(
    handle: &ConnectionHandle<R>,
) -> Result<Payload, LedgerError> {
    request(|| handle.remote().request(RequestCommand::LedgerCurrent)).await
}

/// A single ledger entry of `entry_type`
pub async fn ledger_entry<R: Remote>(
    handle: &ConnectionHandle<R>,
    entry_type: &str,
) -> Result<Payload, LedgerError> {
    let command = RequestCommand::LedgerEntry {
        entry_type: entry_type.to_string(),
    };
    request(|| handle.remote().request(command)).await
}
