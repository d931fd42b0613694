//! Connection adapter and scoped-connection helper
//!
//! [`connect`] picks one candidate peer uniformly at random, builds a remote
//! for it and resolves once the transport reports a completed handshake.
//! [`with_connection`] wraps a connection around a caller's async work and
//! guarantees the handle is released afterwards.
//!
//! # Lifecycle
//!
//! ```text
//! connect ──► ConnectionHandle ──► callback(handle) ──► grace period ──► disconnect
//!                                        │                                    ▲
//!                                        └──── error / future dropped ────────┘
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::settle;
use super::traits::{Connector, LifecycleEvent, Remote, RemoteOptions};
use crate::config::ClientConfig;
use crate::types::{select_peer, LedgerError, PeerDescriptor, RemoteError};

/// An open connection to one ledger-network peer
///
/// Cloning is cheap and every clone refers to the same connection. The
/// connection is closed at most once, by whichever holder calls
/// [`ConnectionHandle::disconnect`] first.
pub struct ConnectionHandle<R> {
    inner: Arc<HandleInner<R>>,
}

struct HandleInner<R> {
    remote: R,
    peer: PeerDescriptor,
    released: AtomicBool,
}

impl<R> Clone for ConnectionHandle<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Remote> ConnectionHandle<R> {
    fn new(remote: R, peer: PeerDescriptor) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                remote,
                peer,
                released: AtomicBool::new(false),
            }),
        }
    }

    /// The underlying remote
    pub fn remote(&self) -> &R {
        &self.inner.remote
    }

    /// The peer this handle is connected to
    pub fn peer(&self) -> &PeerDescriptor {
        &self.inner.peer
    }

    /// Whether the connection has been released
    pub fn is_released(&self) -> bool {
        self.inner.released.load(Ordering::Acquire)
    }

    /// Release the connection
    ///
    /// Returns true if this call closed the connection, false if it had
    /// already been released.
    pub fn disconnect(&self) -> bool {
        if self.inner.released.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.inner.remote.disconnect();
        tracing::info!(peer = %self.inner.peer, "released ledger connection");
        true
    }
}

/// Open a connection to a randomly chosen peer
///
/// Candidates come from `config.peers`, or the default public servers when
/// that list is empty. The returned handle must be released with
/// [`ConnectionHandle::disconnect`]; prefer [`with_connection`] when the
/// connection is only needed for a bounded piece of work.
///
/// A disconnect reported before the handshake leaves the returned future
/// pending unless `config.reject_on_early_disconnect` is set.
///
/// # Errors
///
/// * `LedgerError::Connection` - the transport reported a failed handshake
/// * `LedgerError::DisconnectedBeforeConnect` - early disconnect, when enabled
/// * `LedgerError::Abandoned` - the transport dropped the connect callback and
///   the lifecycle listener without calling either
pub async fn connect<C: Connector>(
    connector: &C,
    config: &ClientConfig,
) -> Result<ConnectionHandle<C::Remote>, LedgerError> {
    let candidates = config.candidate_peers();
    let peer = {
        let mut rng = rand::thread_rng();
        select_peer(&candidates, &mut rng)
            .cloned()
            .ok_or_else(|| LedgerError::config("no candidate peers"))?
    };

    let remote = connector.build(RemoteOptions::for_peer(peer.clone()));
    let (settler, pending) = settle::channel::<()>("connect");

    let handshake = Arc::new(Handshake::new(
        peer.clone(),
        config.reject_on_early_disconnect,
        settler,
    ));
    let listener = {
        let handshake = Arc::clone(&handshake);
        Arc::new(move |event: LifecycleEvent| {
            handshake.on_event(event);
        })
    };
    remote.on_lifecycle(listener);

    tracing::debug!(peer = %peer, "connecting to ledger peer");
    remote.connect(Box::new(move |outcome| handshake.complete(outcome)));

    pending.await?;
    tracing::info!(peer = %peer, "ledger connection established");
    Ok(ConnectionHandle::new(remote, peer))
}

/// What a lifecycle event meant to a pending connect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventOutcome {
    Connected,
    Disconnected,
    RejectedEarly,
    IgnoredEarly,
}

/// Shared state of one connect attempt
///
/// The handshake counts as complete once the transport emits `Connected`
/// or reports success through the connect callback, whichever comes first.
struct Handshake {
    peer: PeerDescriptor,
    reject_early: bool,
    connected: AtomicBool,
    settler: settle::Settler<()>,
}

impl Handshake {
    fn new(peer: PeerDescriptor, reject_early: bool, settler: settle::Settler<()>) -> Self {
        Self {
            peer,
            reject_early,
            connected: AtomicBool::new(false),
            settler,
        }
    }

    fn on_event(&self, event: LifecycleEvent) -> EventOutcome {
        match event {
            LifecycleEvent::Connected => {
                self.connected.store(true, Ordering::Release);
                tracing::debug!(peer = %self.peer, "transport connected");
                EventOutcome::Connected
            }
            LifecycleEvent::Disconnected if self.connected.load(Ordering::Acquire) => {
                tracing::debug!(peer = %self.peer, "transport disconnected");
                EventOutcome::Disconnected
            }
            LifecycleEvent::Disconnected if self.reject_early => {
                self.settler
                    .reject(LedgerError::disconnected_before_connect(&self.peer));
                EventOutcome::RejectedEarly
            }
            LifecycleEvent::Disconnected => {
                tracing::warn!(
                    peer = %self.peer,
                    "transport disconnected before connecting; connect left pending"
                );
                EventOutcome::IgnoredEarly
            }
        }
    }

    fn complete(&self, outcome: Result<(), RemoteError>) {
        match outcome {
            Ok(()) => {
                self.connected.store(true, Ordering::Release);
                self.settler.resolve(());
            }
            Err(e) => {
                self.settler.reject(LedgerError::connection(&self.peer, e));
            }
        }
    }
}

/// Releases a handle when dropped
struct ReleaseGuard<R: Remote> {
    handle: ConnectionHandle<R>,
}

impl<R: Remote> Drop for ReleaseGuard<R> {
    fn drop(&mut self) {
        self.handle.disconnect();
    }
}

/// Run `callback` against a fresh connection and release it afterwards
///
/// Acquisition strictly precedes the callback. Once the callback's future
/// settles, the helper waits `config.grace_period()` so requests the
/// callback left in flight can finish, then releases the handle and returns
/// the callback's result unchanged. The handle is released exactly once on
/// every path: success, error, and the returned future being dropped.
///
/// # Errors
///
/// Connection failures from [`connect`], converted into `E`, and any error
/// returned by `callback`.
pub async fn with_connection<C, F, Fut, T, E>(
    connector: &C,
    config: &ClientConfig,
    callback: F,
) -> Result<T, E>
where
    C: Connector,
    F: FnOnce(ConnectionHandle<C::Remote>) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<LedgerError>,
{
    let handle = connect(connector, config).await?;
    let guard = ReleaseGuard {
        handle: handle.clone(),
    };

    let outcome = callback(handle).await;
    tokio::time::sleep(config.grace_period()).await;

    drop(guard);
    outcome
}
