//! Transaction lookups

use crate::core::{request, ConnectionHandle, Remote};
use crate::types::{LedgerError, Payload, RequestCommand};

/// Transaction `hash` as recorded in ledger `ledger_hash`
pub async fn transaction_entry<R: Remote>(
    handle: &ConnectionHandle<R>,
    hash: &str,
    ledger_hash: Option<&str>,
) -> Result<Payload, LedgerError> {
    let command = RequestCommand::TransactionEntry {
        tx_hash: hash.to_string(),
        ledger_hash: ledger_hash.map(str::to_string),
    };
    request(|| handle.remote().request(command)).await
}

/// Transaction looked up by its hash
pub async fn transaction_by_hash<R: Remote>(
    handle: &ConnectionHandle<R>,
    hash: &str,
) -> Result<Payload, LedgerError> {
    let command = RequestCommand::Transaction {
        transaction: hash.to_string(),
    };
    request(|| handle.remote().request(command)).await
}

/// Recent transactions, starting `start` entries back
pub async fn transaction_history<R: Remote>(
    handle: &ConnectionHandle<R>,
    start: u32,
) -> Result<Payload, LedgerError> {
    request(|| {
        handle
            .remote()
            .request(RequestCommand::TransactionHistory { start })
    })
    .await
}
