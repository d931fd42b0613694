//! Peer descriptors for the ledger network
//!
//! A peer is a network node offering a connection endpoint into the ledger
//! network. When a caller supplies no peers, connections are spread over a
//! fixed list of three known-trusted public servers.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection endpoint of a ledger-network peer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerDescriptor {
    /// Host name or address
    pub host: String,
    /// TCP port
    pub port: u16,
    /// Whether the connection uses TLS
    pub secure: bool,
}

impl PeerDescriptor {
    /// Create a new PeerDescriptor
    pub fn new(host: impl Into<String>, port: u16, secure: bool) -> Self {
        PeerDescriptor {
            host: host.into(),
            port,
            secure,
        }
    }

    /// WebSocket URL for this peer
    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PeerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = if self.secure { "wss" } else { "ws" };
        write!(f, "{}://{}:{}", scheme, self.host, self.port)
    }
}

/// The public servers used when no peer list is supplied
pub fn default_peers() -> Vec<PeerDescriptor> {
    vec![
        PeerDescriptor::new("s1.stellar.com", 443, true),
        PeerDescriptor::new("s-west.stellar.com", 443, true),
        PeerDescriptor::new("s-east.stellar.com", 443, true),
    ]
}

/// Pick one candidate uniformly at random
///
/// Returns `None` only for an empty slice.
pub fn select_peer<'a, R>(
    candidates: &'a [PeerDescriptor],
    rng: &mut R,
) -> Option<&'a PeerDescriptor>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}
