//! Connector bundled with its configuration
//!
//! `LedgerClient` is the entry point most callers need: it remembers how to
//! build remotes and which peers, grace period and disconnect policy to use.
//!
//! ```no_run
//! # use stellar_promise::{api, ClientConfig, Connector, LedgerClient, LedgerError};
//! # async fn demo<C: Connector>(connector: C) -> Result<(), LedgerError> {
//! let client = LedgerClient::with_config(connector, ClientConfig::default());
//! let info = client
//!     .with_connection(|handle| async move { api::server_info(&handle).await })
//!     .await?;
//! println!("{info}");
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use crate::config::ClientConfig;
use crate::core::{self, ConnectionHandle, Connector};
use crate::types::LedgerError;

/// A connector together with the configuration used for every connection
#[derive(Debug, Clone)]
pub struct LedgerClient<C> {
    connector: C,
    config: ClientConfig,
}

impl<C: Connector> LedgerClient<C> {
    /// Create a client with the default configuration
    pub fn new(connector: C) -> Self {
        Self::with_config(connector, ClientConfig::default())
    }

    /// Create a client with an explicit configuration
    pub fn with_config(connector: C, config: ClientConfig) -> Self {
        Self { connector, config }
    }

    /// The configuration in use
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying connector
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Open a connection; the caller is responsible for releasing it
    ///
    /// # Errors
    ///
    /// See [`core::connect`].
    pub async fn connect(&self) -> Result<ConnectionHandle<C::Remote>, LedgerError> {
        core::connect(&self.connector, &self.config).await
    }

    /// Run `callback` against a fresh connection and release it afterwards
    ///
    /// # Errors
    ///
    /// See [`core::with_connection`].
    pub async fn with_connection<F, Fut, T, E>(&self, callback: F) -> Result<T, E>
    where
        F: FnOnce(ConnectionHandle<C::Remote>) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<LedgerError>,
    {
        core::with_connection(&self.connector, &self.config, callback).await
    }
}
