//! Order book adapter
//!
//! An order book query is two callback-style steps run in series: the
//! issuer's transfer rate first, then the offers. Only the offers are
//! returned; the transfer-rate step primes the book so offers are quoted
//! with fees applied.

use super::connection::ConnectionHandle;
use super::settle;
use super::traits::{OrderBook, Remote};
use crate::types::{BookParams, LedgerError, Payload};

/// Fetch the offers on one side of an order book
///
/// The offers step starts only after the transfer-rate step succeeded.
///
/// # Errors
///
/// * `LedgerError::Request` - either step failed; a failed transfer-rate
///   step skips the offers step
/// * `LedgerError::Abandoned` - a step dropped its completion callback
pub async fn order_book<R: Remote>(
    handle: &ConnectionHandle<R>,
    params: BookParams,
) -> Result<Payload, LedgerError> {
    tracing::debug!(
        gets = %params.currency_gets,
        pays = %params.currency_pays,
        "requesting order book"
    );
    let mut book = handle.remote().order_book(params);

    let (settler, pending) = settle::channel::<Payload>("transfer rate request");
    book.request_transfer_rate(settler.completion(LedgerError::Request));
    pending.await?;

    let (settler, pending) = settle::channel::<Payload>("offers request");
    book.request_offers(settler.completion(LedgerError::Request));
    pending.await
}
