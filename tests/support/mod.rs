//! Scripted in-memory ledger client for integration tests
//!
//! `FakeConnector` builds `FakeRemote`s that share one `FakeState`. Tests
//! script how connects, requests, submissions and order-book steps behave,
//! then inspect what the adapters asked for.

#![allow(dead_code)]

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::json;
use tokio::time::Instant;

use stellar_promise::core::{
    Completion, Connector, ErrorHandler, LedgerRequest, LifecycleEvent, LifecycleListener,
    OrderBook, Remote, RemoteOptions, SuccessHandler, TransactionBuilder,
};
use stellar_promise::types::{
    BookParams, OfferCancel, OfferCreate, Payload, Payment, RemoteError, RequestCommand,
    SubmissionResult, TrustSet,
};

/// How a connect attempt behaves
#[derive(Debug, Clone)]
pub enum ConnectScript {
    /// Emit `Connected`, then complete successfully
    Succeed,
    /// Complete successfully without emitting `Connected`
    SucceedQuietly,
    /// Complete with an error
    Fail(RemoteError),
    /// Emit `Disconnected` and never complete
    DisconnectFirst,
}

/// How a request, submission or order-book step behaves
#[derive(Debug, Clone)]
pub enum Reply {
    /// Deliver a payload
    Success(Payload),
    /// Deliver an error
    Error(RemoteError),
    /// Deliver the payload, then the error as well
    Both(Payload, RemoteError),
    /// Keep the handlers alive and never call them
    Silent,
    /// Drop the handlers without calling them
    Drop,
}

/// Field set recorded on a transaction builder
#[derive(Debug, Clone, PartialEq)]
pub enum TxOp {
    OfferCreate(OfferCreate),
    OfferCancel(OfferCancel),
    Payment(Payment),
    TrustSet(TrustSet),
    Flags(u32),
    DestinationTag(u32),
}

#[derive(Default)]
pub struct FakeState {
    pub connect_script: Option<ConnectScript>,
    pub built: Vec<RemoteOptions>,
    pub replies: HashMap<&'static str, Reply>,
    pub requests: Vec<RequestCommand>,
    pub builders: usize,
    pub submissions: Vec<Vec<TxOp>>,
    pub submit_reply: Option<Reply>,
    pub transfer_rate_reply: Option<Reply>,
    pub offers_reply: Option<Reply>,
    pub books: Vec<BookParams>,
    pub disconnects: Vec<Instant>,
    pub events: Vec<String>,
    parked: Vec<Box<dyn Any + Send>>,
}

/// Connector whose remotes all share one scripted state
#[derive(Clone, Default)]
pub struct FakeConnector {
    state: Arc<Mutex<FakeState>>,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect(self, script: ConnectScript) -> Self {
        self.state.lock().connect_script = Some(script);
        self
    }

    pub fn reply(&self, command: &'static str, reply: Reply) {
        self.state.lock().replies.insert(command, reply);
    }

    pub fn submit_reply(&self, reply: Reply) {
        self.state.lock().submit_reply = Some(reply);
    }

    pub fn book_replies(&self, transfer_rate: Reply, offers: Reply) {
        let mut state = self.state.lock();
        state.transfer_rate_reply = Some(transfer_rate);
        state.offers_reply = Some(offers);
    }

    /// Append an entry to the shared event log
    pub fn log(&self, event: impl Into<String>) {
        self.state.lock().events.push(event.into());
    }

    pub fn state(&self) -> parking_lot::MutexGuard<'_, FakeState> {
        self.state.lock()
    }
}

impl Connector for FakeConnector {
    type Remote = FakeRemote;

    fn build(&self, options: RemoteOptions) -> FakeRemote {
        self.state.lock().built.push(options);
        FakeRemote {
            state: Arc::clone(&self.state),
            listeners: Mutex::new(Vec::new()),
        }
    }
}

pub struct FakeRemote {
    state: Arc<Mutex<FakeState>>,
    listeners: Mutex<Vec<LifecycleListener>>,
}

impl FakeRemote {
    fn emit(&self, event: LifecycleEvent) {
        let listeners: Vec<LifecycleListener> = self.listeners.lock().clone();
        for listener in listeners {
            listener(event);
        }
    }
}

impl Remote for FakeRemote {
    type Request = FakeRequest;
    type Transaction = FakeTransaction;
    type OrderBook = FakeOrderBook;

    fn on_lifecycle(&self, listener: LifecycleListener) {
        self.listeners.lock().push(listener);
    }

    fn connect(&self, done: Completion<()>) {
        let script = self
            .state
            .lock()
            .connect_script
            .clone()
            .unwrap_or(ConnectScript::Succeed);
        match script {
            ConnectScript::Succeed => {
                self.emit(LifecycleEvent::Connected);
                done(Ok(()));
            }
            ConnectScript::SucceedQuietly => done(Ok(())),
            ConnectScript::Fail(e) => done(Err(e)),
            ConnectScript::DisconnectFirst => {
                self.emit(LifecycleEvent::Disconnected);
                self.state.lock().parked.push(Box::new(done));
            }
        }
    }

    fn disconnect(&self) {
        {
            let mut state = self.state.lock();
            state.disconnects.push(Instant::now());
            state.events.push("disconnect".to_string());
        }
        self.emit(LifecycleEvent::Disconnected);
    }

    fn request(&self, command: RequestCommand) -> FakeRequest {
        FakeRequest {
            command,
            state: Arc::clone(&self.state),
            success: None,
            error: None,
        }
    }

    fn transaction(&self) -> FakeTransaction {
        self.state.lock().builders += 1;
        FakeTransaction {
            ops: Vec::new(),
            state: Arc::clone(&self.state),
        }
    }

    fn order_book(&self, params: BookParams) -> FakeOrderBook {
        self.state.lock().books.push(params);
        FakeOrderBook {
            state: Arc::clone(&self.state),
        }
    }
}

pub struct FakeRequest {
    command: RequestCommand,
    state: Arc<Mutex<FakeState>>,
    success: Option<SuccessHandler>,
    error: Option<ErrorHandler>,
}

impl LedgerRequest for FakeRequest {
    fn on_success(&mut self, handler: SuccessHandler) {
        self.success = Some(handler);
    }

    fn on_error(&mut self, handler: ErrorHandler) {
        self.error = Some(handler);
    }

    fn request(self) {
        let reply = {
            let mut state = self.state.lock();
            state.requests.push(self.command.clone());
            state.events.push(format!("request {}", self.command.name()));
            state.replies.get(self.command.name()).cloned()
        };
        // Unscripted commands echo their own wire form.
        let reply = reply.unwrap_or_else(|| {
            Reply::Success(serde_json::to_value(&self.command).unwrap_or(json!(null)))
        });

        let (success, error) = (self.success, self.error);
        match reply {
            Reply::Success(payload) => {
                if let Some(handler) = success {
                    handler(payload);
                }
            }
            Reply::Error(e) => {
                if let Some(handler) = error {
                    handler(e);
                }
            }
            Reply::Both(payload, e) => {
                if let Some(handler) = success {
                    handler(payload);
                }
                if let Some(handler) = error {
                    handler(e);
                }
            }
            Reply::Silent => {
                let mut state = self.state.lock();
                state.parked.push(Box::new(success));
                state.parked.push(Box::new(error));
            }
            Reply::Drop => {}
        }
    }
}

pub struct FakeTransaction {
    ops: Vec<TxOp>,
    state: Arc<Mutex<FakeState>>,
}

impl TransactionBuilder for FakeTransaction {
    fn offer_create(&mut self, offer: OfferCreate) {
        self.ops.push(TxOp::OfferCreate(offer));
    }

    fn offer_cancel(&mut self, cancel: OfferCancel) {
        self.ops.push(TxOp::OfferCancel(cancel));
    }

    fn payment(&mut self, payment: Payment) {
        self.ops.push(TxOp::Payment(payment));
    }

    fn trust_set(&mut self, trust: TrustSet) {
        self.ops.push(TxOp::TrustSet(trust));
    }

    fn set_flags(&mut self, flags: u32) {
        self.ops.push(TxOp::Flags(flags));
    }

    fn destination_tag(&mut self, tag: u32) {
        self.ops.push(TxOp::DestinationTag(tag));
    }

    fn submit(self, done: Completion<SubmissionResult>) {
        let reply = {
            let mut state = self.state.lock();
            state.submissions.push(self.ops);
            state.events.push("submit".to_string());
            state
                .submit_reply
                .clone()
                .unwrap_or_else(|| Reply::Success(json!({"engine_result": "tesSUCCESS"})))
        };
        settle_completion(&self.state, reply, done);
    }
}

pub struct FakeOrderBook {
    state: Arc<Mutex<FakeState>>,
}

impl OrderBook for FakeOrderBook {
    fn request_transfer_rate(&mut self, done: Completion<Payload>) {
        let reply = {
            let mut state = self.state.lock();
            state.events.push("transfer_rate".to_string());
            state
                .transfer_rate_reply
                .clone()
                .unwrap_or_else(|| Reply::Success(json!(1_000_000_000u64)))
        };
        settle_completion(&self.state, reply, done);
    }

    fn request_offers(&mut self, done: Completion<Payload>) {
        let reply = {
            let mut state = self.state.lock();
            state.events.push("offers".to_string());
            state
                .offers_reply
                .clone()
                .unwrap_or_else(|| Reply::Success(json!({"offers": []})))
        };
        settle_completion(&self.state, reply, done);
    }
}

fn settle_completion(state: &Arc<Mutex<FakeState>>, reply: Reply, done: Completion<Payload>) {
    match reply {
        Reply::Success(payload) | Reply::Both(payload, _) => done(Ok(payload)),
        Reply::Error(e) => done(Err(e)),
        Reply::Silent => state.lock().parked.push(Box::new(done)),
        Reply::Drop => {}
    }
}
