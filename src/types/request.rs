//! Read-only query descriptions
//!
//! A [`RequestCommand`] names one query against the ledger client together
//! with its parameters. It serializes to the client's command shape
//! (`{"command": "account_info", "account": ...}`) so that transports can
//! forward it as-is.

use serde::{Deserialize, Serialize};

/// Result payload delivered by a successful query or submission
pub type Payload = serde_json::Value;

/// Selects a ledger by sequence number or by a symbolic name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LedgerIndex {
    /// Ledger sequence number
    Sequence(u32),
    /// `validated`, `closed` or `current`
    Named(String),
}

/// Options for a generic ledger query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerOptions {
    /// Ledger to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
    /// Ledger to fetch by hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<String>,
    /// Include the ledger's transactions
    #[serde(default)]
    pub transactions: bool,
    /// Include the ledger's account states
    #[serde(default)]
    pub accounts: bool,
    /// Expand transactions and accounts into full objects
    #[serde(default)]
    pub expand: bool,
}

/// Parameters shared by every account query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountQuery {
    /// Address of the account
    pub account: String,
}

impl AccountQuery {
    /// Create an AccountQuery for `address`
    pub fn new(address: impl Into<String>) -> Self {
        AccountQuery {
            account: address.into(),
        }
    }
}

/// A single read-only query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum RequestCommand {
    /// Server status
    ServerInfo,
    /// Liveness probe
    Ping,
    /// Ledger selected by options
    Ledger(LedgerOptions),
    /// Most recently closed ledger
    LedgerClosed,
    /// Header of a ledger
    LedgerHeader,
    /// Ledger currently in progress
    LedgerCurrent,
    /// A single ledger entry of the given type
    LedgerEntry {
        /// Entry type (e.g. `account_root`)
        entry_type: String,
    },
    /// A transaction within a specific ledger
    TransactionEntry {
        /// Transaction hash
        tx_hash: String,
        /// Ledger containing the transaction
        #[serde(skip_serializing_if = "Option::is_none")]
        ledger_hash: Option<String>,
    },
    /// A transaction looked up by hash
    #[serde(rename = "tx")]
    Transaction {
        /// Transaction hash
        transaction: String,
    },
    /// Recent transactions starting at an offset
    #[serde(rename = "tx_history")]
    TransactionHistory {
        /// Offset of the first transaction
        start: u32,
    },
    /// Open offers of an account
    AccountOffers(AccountQuery),
    /// Currencies an account can send or receive
    AccountCurrencies(AccountQuery),
    /// Native balance of an account
    AccountBalance(AccountQuery),
    /// Trust lines of an account
    AccountLines(AccountQuery),
    /// Account root information
    AccountInfo(AccountQuery),
    /// Transactions touching an account
    #[serde(rename = "account_tx")]
    AccountTransactions(AccountQuery),
}

impl RequestCommand {
    /// Wire name of the command
    pub fn name(&self) -> &'static str {
        match self {
            RequestCommand::ServerInfo => "server_info",
            RequestCommand::Ping => "ping",
            RequestCommand::Ledger(_) => "ledger",
            RequestCommand::LedgerClosed => "ledger_closed",
            RequestCommand::LedgerHeader => "ledger_header",
            RequestCommand::LedgerCurrent => "ledger_current",
            RequestCommand::LedgerEntry { .. } => "ledger_entry",
            RequestCommand::TransactionEntry { .. } => "transaction_entry",
            RequestCommand::Transaction { .. } => "tx",
            RequestCommand::TransactionHistory { .. } => "tx_history",
            RequestCommand::AccountOffers(_) => "account_offers",
            RequestCommand::AccountCurrencies(_) => "account_currencies",
            RequestCommand::AccountBalance(_) => "account_balance",
            RequestCommand::AccountLines(_) => "account_lines",
            RequestCommand::AccountInfo(_) => "account_info",
            RequestCommand::AccountTransactions(_) => "account_tx",
        }
    }
}
