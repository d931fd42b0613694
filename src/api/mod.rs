//! Ledger query and submission helpers
//!
//! Each helper is configuration over one adapter: queries pick a
//! [`RequestCommand`](crate::types::RequestCommand) for
//! [`request`](crate::core::request), submissions set builder fields inside
//! [`transaction`](crate::core::transaction).
//!
//! - `server` - server status and liveness
//! - `ledger` - ledger lookups
//! - `lookup` - transaction lookups
//! - `account` - account state queries
//! - `submit` - offer, payment and trust-line submissions

pub mod account;
pub mod ledger;
pub mod lookup;
pub mod server;
pub mod submit;

pub use account::{
    account_balance, account_currencies, account_info, account_lines, account_offers,
    account_transactions,
};
pub use ledger::{ledger, ledger_closed, ledger_current, ledger_entry, ledger_header};
pub use lookup::{transaction_by_hash, transaction_entry, transaction_history};
pub use server::{ping, server_info};
pub use submit::{offer_cancel, offer_create, payment, trust_set};
