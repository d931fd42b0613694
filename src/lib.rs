//! Stellar Promise Library
//! # Overview
//!
//! This library adapts a callback/event-driven ledger client to futures and
//! provides short helpers for a fixed set of ledger queries and transaction
//! submissions. The ledger protocol itself lives in the external client,
//! which the caller supplies by implementing the traits in [`core::traits`].
//!
//! # Architecture
//!
//! The crate is organized into several key components:
//!
//! - [`types`] - Value types (errors, peers, amounts, commands, transaction fields)
//! - [`config`] - Client configuration, loadable from TOML
//! - [`core`] - The adapters:
//!   - [`core::connection`] - Connect to a random peer; scoped connections with guaranteed release
//!   - [`core::request`] - One-shot event-emitting request to a single future
//!   - [`core::transaction`] - Configure-then-submit transaction to a single future
//!   - [`core::order_book`] - Transfer rate then offers, in series
//! - [`api`] - Query and submission helpers built on the adapters
//! - [`client`] - A connector bundled with its configuration
//!
//! # Settlement
//!
//! Every adapter settles exactly once. Errors reported by the ledger client
//! are returned unchanged inside [`LedgerError`]; nothing is retried.

// Module declarations
pub mod api;
pub mod client;
pub mod config;
pub mod core;
pub mod types;

pub use crate::core::{
    connect, order_book, request, transaction, with_connection, ConnectionHandle, Connector,
    LedgerRequest, LifecycleEvent, OrderBook, Remote, RemoteOptions, TransactionBuilder,
};
pub use client::LedgerClient;
pub use config::ClientConfig;
pub use types::{
    Amount, BookParams, LedgerError, Payload, PeerDescriptor, RemoteError, RequestCommand,
    SubmissionResult,
};
