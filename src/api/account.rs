//! Account state queries
//!
//! Every query takes the account address and nothing else.

use crate::core::{request, ConnectionHandle, Remote};
use crate::types::{AccountQuery, LedgerError, Payload, RequestCommand};

async fn account_request<R: Remote>(
    handle: &ConnectionHandle<R>,
    command: fn(AccountQuery) -> RequestCommand,
    address: &str,
) -> Result<Payload, LedgerError> {
    let query = AccountQuery::new(address);
    request(|| handle.remote().request(command(query))).await
}

/// Open offers placed by `address`
pub async fn account_offers<R: Remote>(
    handle: &ConnectionHandle<R>,
    address: &str,
) -> Result<Payload, LedgerError> {
    account_request(handle, RequestCommand::AccountOffers, address).await
}

/// Currencies `address` can send or receive
pub async fn account_currencies<R: Remote>(
    handle: &ConnectionHandle<R>,
    address: &str,
) -> Result<Payload, LedgerError> {
    account_request(handle, RequestCommand::AccountCurrencies, address).await
}

/// Native balance of `address`
pub async fn account_balance<R: Remote>(
    handle: &ConnectionHandle<R>,
    address: &str,
) -> Result<Payload, LedgerError> {
    account_request(handle, RequestCommand::AccountBalance, address).await
}

/// Trust lines of `address`
pub async fn account_lines<R: Remote>(
    handle: &ConnectionHandle<R>,
    address: &str,
) -> Result<Payload, LedgerError> {
    account_request(handle, RequestCommand::AccountLines, address).await
}

/// Account root of `address`
pub async fn account_info<R: Remote>(
    handle: &ConnectionHandle<R>,
    address: &str,
) -> Result<Payload, LedgerError> {
    account_request(handle, RequestCommand::AccountInfo, address).await
}

/// Transactions affecting `address`
pub async fn account_transactions<R: Remote>(
    handle: &ConnectionHandle<R>,
    address: &str,
) -> Result<Payload, LedgerError> {
    account_request(handle, RequestCommand::AccountTransactions, address).await
}
