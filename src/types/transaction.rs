//! Transaction field sets for state-changing operations
//!
//! Each struct holds exactly the fields one submission helper sets on a
//! transaction builder. Field names follow the ledger client's JSON form.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::request::Payload;

/// Result delivered by a successful submission
pub type SubmissionResult = Payload;

/// Sequence number of an account's transaction
pub type Sequence = u32;

/// Bit flags accepted by an offer-create transaction
pub mod offer_flags {
    /// Do not consume offers that exactly match this one
    pub const PASSIVE: u32 = 0x0001_0000;
    /// Fill what can be filled now, never place the remainder on the book
    pub const IMMEDIATE_OR_CANCEL: u32 = 0x0002_0000;
    /// Fill completely or not at all
    pub const FILL_OR_KILL: u32 = 0x0004_0000;
    /// Exchange the full taker-gets amount even if that yields more than taker-pays
    pub const SELL: u32 = 0x0008_0000;
}

/// Place an offer on the order book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferCreate {
    /// Account placing the offer
    pub from: String,
    /// What the taker of the offer pays
    pub taker_pays: Amount,
    /// What the taker of the offer gets
    pub taker_gets: Amount,
}

/// Remove a previously placed offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferCancel {
    /// Account that placed the offer
    pub from: String,
    /// Sequence number of the offer-create transaction
    pub sequence: Sequence,
}

/// Send value to another account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Sending account
    pub account: String,
    /// Receiving account
    pub destination: String,
    /// Amount delivered
    pub amount: Amount,
}

/// Create or modify a trust line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustSet {
    /// Account extending trust
    pub account: String,
    /// Maximum balance the account is willing to hold
    pub limit: Amount,
}

/// Identifies one side of an order book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookParams {
    /// Currency the taker gets
    pub currency_gets: String,
    /// Issuer of the currency the taker gets (absent for the native currency)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_gets: Option<String>,
    /// Currency the taker pays
    pub currency_pays: String,
    /// Issuer of the currency the taker pays (absent for the native currency)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_pays: Option<String>,
}
