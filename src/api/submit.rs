//! State-changing submissions
//!
//! Each helper sets exactly the fields of its operation on a fresh builder
//! and always completes configuration successfully; no local validation
//! runs here.

use crate::core::{transaction, ConnectionHandle, Remote, TransactionBuilder};
use crate::types::{
    Amount, LedgerError, OfferCancel, OfferCreate, Payment, Sequence, SubmissionResult, TrustSet,
};

/// Place an offer exchanging `pays` for `gets`
///
/// `flags` is a bitmask of [`offer_flags`](crate::types::offer_flags).
pub async fn offer_create<R: Remote>(
    handle: &ConnectionHandle<R>,
    address: &str,
    pays: Amount,
    gets: Amount,
    flags: u32,
) -> Result<SubmissionResult, LedgerError> {
    let offer = OfferCreate {
        from: address.to_string(),
        taker_pays: pays,
        taker_gets: gets,
    };
    transaction(handle, move |tx| {
        tx.offer_create(offer);
        tx.set_flags(flags);
        Ok(())
    })
    .await
}

/// Cancel the offer created by `address` in transaction `sequence`
pub async fn offer_cancel<R: Remote>(
    handle: &ConnectionHandle<R>,
    address: &str,
    sequence: Sequence,
) -> Result<SubmissionResult, LedgerError> {
    let cancel = OfferCancel {
        from: address.to_string(),
        sequence,
    };
    transaction(handle, move |tx| {
        tx.offer_cancel(cancel);
        Ok(())
    })
    .await
}

/// Send `amount` from `address` to `destination`
///
/// The destination tag is only set when one is given and non-zero.
pub async fn payment<R: Remote>(
    handle: &ConnectionHandle<R>,
    address: &str,
    destination: &str,
    amount: Amount,
    tag: Option<u32>,
) -> Result<SubmissionResult, LedgerError> {
    let payment = Payment {
        account: address.to_string(),
        destination: destination.to_string(),
        amount,
    };
    transaction(handle, move |tx| {
        tx.payment(payment);
        if let Some(tag) = tag.filter(|t| *t != 0) {
            tx.destination_tag(tag);
        }
        Ok(())
    })
    .await
}

/// Set the trust line limit of `address`
pub async fn trust_set<R: Remote>(
    handle: &ConnectionHandle<R>,
    address: &str,
    limit: Amount,
) -> Result<SubmissionResult, LedgerError> {
    let trust = TrustSet {
        account: address.to_string(),
        limit,
    };
    transaction(handle, move |tx| {
        tx.trust_set(trust);
        Ok(())
    })
    .await
}
