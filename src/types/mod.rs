//! Types module
//!
//! Contains the value types used throughout the crate.
//! This module organizes types into logical submodules:
//! - `amount`: Ledger amounts
//! - `error`: Error types for the adapters
//! - `peer`: Peer descriptors and the default peer list
//! - `request`: Read-only query descriptions
//! - `transaction`: Field sets for state-changing operations

pub mod amount;
pub mod error;
pub mod peer;
pub mod request;
pub mod transaction;

pub use amount::{Amount, IssuedAmount};
pub use error::{LedgerError, RemoteError};
pub use peer::{default_peers, select_peer, PeerDescriptor};
pub use request::{AccountQuery, LedgerIndex, LedgerOptions, Payload, RequestCommand};
pub use transaction::{
    offer_flags, BookParams, OfferCancel, OfferCreate, Payment, Sequence, SubmissionResult,
    TrustSet,
};
