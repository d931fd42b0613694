//! Client configuration
//!
//! `ClientConfig` carries the knobs of the connection adapters: the peers to
//! choose from, the grace period the scoped-connection helper waits before
//! releasing a handle, and how a disconnect before the handshake is treated.
//!
//! Configurations can be built in code or loaded from TOML:
//!
//! ```toml
//! grace_period_ms = 500
//! reject_on_early_disconnect = true
//!
//! [[peers]]
//! host = "127.0.0.1"
//! port = 5006
//! secure = false
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{default_peers, LedgerError, PeerDescriptor};

/// Grace period applied when none is configured
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(300);

/// Longest grace period accepted from a configuration file
pub const MAX_GRACE_PERIOD: Duration = Duration::from_secs(60);

/// Configuration for connecting to the ledger network
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Candidate peers; empty means the default public servers
    pub peers: Vec<PeerDescriptor>,
    /// Delay between the end of a scoped callback and releasing its handle
    pub grace_period_ms: u64,
    /// Reject a pending connect when the transport disconnects before connecting
    pub reject_on_early_disconnect: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            peers: Vec::new(),
            grace_period_ms: DEFAULT_GRACE_PERIOD.as_millis() as u64,
            reject_on_early_disconnect: false,
        }
    }
}

impl ClientConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Config` if the text is not valid TOML, names an
    /// unknown field, or sets a grace period above [`MAX_GRACE_PERIOD`].
    pub fn from_toml_str(text: &str) -> Result<Self, LedgerError> {
        let config: ClientConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::IoError` if the file cannot be read, and the
    /// errors of [`ClientConfig::from_toml_str`] otherwise.
    pub fn from_file(path: &Path) -> Result<Self, LedgerError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            peers = config.peers.len(),
            "loaded client configuration"
        );
        Ok(config)
    }

    /// Replace the candidate peers
    pub fn with_peers(mut self, peers: Vec<PeerDescriptor>) -> Self {
        self.peers = peers;
        self
    }

    /// Replace the grace period
    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period_ms = u64::try_from(grace_period.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Choose whether a disconnect before the handshake rejects the pending connect
    pub fn with_reject_on_early_disconnect(mut self, reject: bool) -> Self {
        self.reject_on_early_disconnect = reject;
        self
    }

    /// The grace period as a duration
    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_period_ms)
    }

    /// Peers to choose from, falling back to the default public servers
    pub fn candidate_peers(&self) -> Vec<PeerDescriptor> {
        if self.peers.is_empty() {
            default_peers()
        } else {
            self.peers.clone()
        }
    }

    fn validate(&self) -> Result<(), LedgerError> {
        if self.grace_period() > MAX_GRACE_PERIOD {
            return Err(LedgerError::config(format!(
                "grace_period_ms {} exceeds the maximum of {}",
                self.grace_period_ms,
                MAX_GRACE_PERIOD.as_millis()
            )));
        }
        if let Some(peer) = self.peers.iter().find(|p| p.host.trim().is_empty()) {
            return Err(LedgerError::config(format!(
                "peer with port {} has an empty host",
                peer.port
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.peers.is_empty());
        assert_eq!(config.grace_period(), Duration::from_millis(300));
        assert!(!config.reject_on_early_disconnect);
        assert_eq!(config.candidate_peers(), default_peers());
    }

    #[test]
    fn test_explicit_peers_replace_defaults() {
        let local = PeerDescriptor::new("127.0.0.1", 5006, false);
        let config = ClientConfig::default().with_peers(vec![local.clone()]);
        assert_eq!(config.candidate_peers(), vec![local]);
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::default()
            .with_grace_period(Duration::from_millis(25))
            .with_reject_on_early_disconnect(true);
        assert_eq!(config.grace_period_ms, 25);
        assert!(config.reject_on_early_disconnect);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(ClientConfig::from_toml_str("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let text = r#"
            grace_period_ms = 500
            reject_on_early_disconnect = true

            [[peers]]
            host = "127.0.0.1"
            port = 5006
            secure = false
        "#;
        let config = ClientConfig::from_toml_str(text).unwrap();
        assert_eq!(config.grace_period(), Duration::from_millis(500));
        assert!(config.reject_on_early_disconnect);
        assert_eq!(config.peers, vec![PeerDescriptor::new("127.0.0.1", 5006, false)]);
    }

    #[rstest]
    #[case::unknown_field("retries = 3")]
    #[case::wrong_type("grace_period_ms = \"soon\"")]
    #[case::grace_too_long("grace_period_ms = 600000")]
    #[case::empty_host("[[peers]]\nhost = \" \"\nport = 443\nsecure = true")]
    fn test_invalid_toml(#[case] text: &str) {
        let result = ClientConfig::from_toml_str(text);
        assert!(matches!(result, Err(LedgerError::Config { .. })), "got {:?}", result);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"grace_period_ms = 10\n")
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.grace_period(), Duration::from_millis(10));
    }

    #[test]
    fn test_from_missing_file() {
        let result = ClientConfig::from_file(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(LedgerError::IoError { .. })));
    }
}
