//! Collaborator traits for the external ledger client
//!
//! This module defines the seams through which the adapters drive a
//! callback/event-driven ledger client. Implementations wrap a concrete
//! transport; the adapters only register handlers and trigger actions.
//!
//! Every handler is registered before the action that may fire it is
//! triggered, so an implementation is free to invoke handlers synchronously
//! from inside `request`, `connect` or `submit`.

use std::sync::Arc;

use crate::types::{
    BookParams, OfferCancel, OfferCreate, Payload, Payment, PeerDescriptor, RemoteError,
    RequestCommand, SubmissionResult, TrustSet,
};

/// Handler called once with the payload of a successful request
pub type SuccessHandler = Box<dyn FnOnce(Payload) + Send>;

/// Handler called once with the error of a failed request
pub type ErrorHandler = Box<dyn FnOnce(RemoteError) + Send>;

/// Completion callback of a callback-style operation
pub type Completion<T> = Box<dyn FnOnce(Result<T, RemoteError>) + Send>;

/// Listener for connection lifecycle events
pub type LifecycleListener = Arc<dyn Fn(LifecycleEvent) + Send + Sync>;

/// Lifecycle events reported by a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The transport finished its handshake
    Connected,
    /// The transport lost or closed its connection
    Disconnected,
}

/// Construction options for a remote
///
/// Remote-reported ledger data is trusted and transactions are signed
/// locally. Both flags are fixed; use [`RemoteOptions::for_peer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOptions {
    /// Trust ledger data reported by the peer
    pub trusted: bool,
    /// Sign transactions locally instead of delegating to the peer
    pub local_signing: bool,
    /// Servers the remote connects to
    pub servers: Vec<PeerDescriptor>,
}

impl RemoteOptions {
    /// Options for a remote connected to exactly one peer
    pub fn for_peer(peer: PeerDescriptor) -> Self {
        RemoteOptions {
            trusted: true,
            local_signing: true,
            servers: vec![peer],
        }
    }
}

/// Builds remotes for a given set of options
pub trait Connector: Send + Sync {
    /// The remote type produced by this connector
    type Remote: Remote;

    /// Construct a remote; it is not connected until [`Remote::connect`] is called
    fn build(&self, options: RemoteOptions) -> Self::Remote;
}

/// A connection to a ledger-network peer
///
/// A remote may be used concurrently by many in-flight requests and
/// submissions; multiplexing is the implementation's responsibility.
pub trait Remote: Send + Sync + 'static {
    /// One-shot request object
    type Request: LedgerRequest;
    /// Transaction builder
    type Transaction: TransactionBuilder;
    /// Order book handle
    type OrderBook: OrderBook;

    /// Register a listener for the lifetime of the remote
    fn on_lifecycle(&self, listener: LifecycleListener);

    /// Open the connection and call `done` once the handshake completed or failed
    fn connect(&self, done: Completion<()>);

    /// Close the connection
    fn disconnect(&self);

    /// Create a fresh, not yet started request for `command`
    fn request(&self, command: RequestCommand) -> Self::Request;

    /// Create a fresh transaction builder bound to this remote
    fn transaction(&self) -> Self::Transaction;

    /// Create a handle on one side of an order book
    fn order_book(&self, params: BookParams) -> Self::OrderBook;
}

/// A one-shot, event-emitting query
///
/// Exactly one of the success or error handlers is expected to fire after
/// [`LedgerRequest::request`] is called.
pub trait LedgerRequest: Send + 'static {
    /// Register the success handler
    fn on_success(&mut self, handler: SuccessHandler);

    /// Register the error handler
    fn on_error(&mut self, handler: ErrorHandler);

    /// Start the request
    fn request(self);
}

/// A mutable transaction under construction
pub trait TransactionBuilder: Send + 'static {
    /// Configure as an offer-create transaction
    fn offer_create(&mut self, offer: OfferCreate);

    /// Configure as an offer-cancel transaction
    fn offer_cancel(&mut self, cancel: OfferCancel);

    /// Configure as a payment
    fn payment(&mut self, payment: Payment);

    /// Configure as a trust-set transaction
    fn trust_set(&mut self, trust: TrustSet);

    /// Set the transaction flag bitmask
    fn set_flags(&mut self, flags: u32);

    /// Attach a destination tag to a payment
    fn destination_tag(&mut self, tag: u32);

    /// Sign and submit the transaction; consumes the builder
    fn submit(self, done: Completion<SubmissionResult>);
}

/// One side of an order book
pub trait OrderBook: Send + 'static {
    /// Fetch the transfer rate of the book's issuer
    fn request_transfer_rate(&mut self, done: Completion<Payload>);

    /// Fetch the offers currently on the book
    fn request_offers(&mut self, done: Completion<Payload>);
}
