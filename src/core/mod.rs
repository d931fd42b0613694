//! Core adaptation module
//!
//! This module contains the adapters that turn the ledger client's
//! callback/event style into futures:
//! - `traits` - Collaborator seams implemented by a concrete ledger client
//! - `settle` - Single-settlement primitive shared by every adapter
//! - `connection` - Connection adapter and scoped-connection helper
//! - `request` - Event-emitting request adapter
//! - `transaction` - Configure-then-submit transaction adapter
//! - `order_book` - Two-step order book adapter

pub mod connection;
pub mod order_book;
pub mod request;
pub mod settle;
pub mod traits;
pub mod transaction;

pub use connection::{connect, with_connection, ConnectionHandle};
pub use order_book::order_book;
pub use request::request;
pub use traits::{
    Completion, Connector, ErrorHandler, LedgerRequest, LifecycleEvent, LifecycleListener,
    OrderBook, Remote, RemoteOptions, SuccessHandler, TransactionBuilder,
};
pub use transaction::transaction;
