//! Error types for the ledger adapters
//!
//! This module defines every failure an adapter can settle with. Errors
//! reported by the external ledger client are carried verbatim inside
//! [`RemoteError`]; the adapters never translate or retry them.
//!
//! # Error Categories
//!
//! - **Connection Errors**: the transport never reaches a connected state
//! - **Request Errors**: a read-only query reported an error payload
//! - **Validation Errors**: transaction configuration refused to continue
//! - **Submission Errors**: the network rejected a submitted transaction
//! - **Configuration Errors**: a client configuration could not be loaded

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error payload delivered by the external ledger client
///
/// Kept as reported so that callers can inspect the collaborator's own
/// error code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}: {message}")]
pub struct RemoteError {
    /// Short machine-readable error code (e.g. `actNotFound`)
    pub error: String,
    /// Human-readable description
    #[serde(default)]
    pub message: String,
}

impl RemoteError {
    /// Create a RemoteError from a code and a message
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        RemoteError {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Main error type for the ledger adapters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The transport reported a failed connection attempt
    #[error("Connection to {peer} failed: {cause}")]
    Connection {
        /// The peer the connection was attempted against
        peer: String,
        /// Error reported by the transport
        cause: RemoteError,
    },

    /// The transport disconnected before the connection was established
    ///
    /// Only produced when `reject_on_early_disconnect` is enabled.
    #[error("Disconnected from {peer} before the connection was established")]
    DisconnectedBeforeConnect {
        /// The peer that dropped the connection
        peer: String,
    },

    /// A read-only query reported an error
    #[error("Request failed: {0}")]
    Request(RemoteError),

    /// Transaction configuration reported an error; nothing was submitted
    #[error("Transaction rejected before submission: {message}")]
    Validation {
        /// Why the configuration was refused
        message: String,
    },

    /// The network rejected a submitted transaction
    #[error("Transaction submission failed: {0}")]
    Submission(RemoteError),

    /// The collaborator released every completion handler without calling one
    #[error("{operation} was abandoned before it settled")]
    Abandoned {
        /// The operation that was pending
        operation: String,
    },

    /// A client configuration could not be parsed or is inconsistent
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// I/O error while reading a configuration file
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for LedgerError {
    fn from(error: toml::de::Error) -> Self {
        LedgerError::Config {
            message: error.message().to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a Connection error
    pub fn connection(peer: impl ToString, cause: RemoteError) -> Self {
        LedgerError::Connection {
            peer: peer.to_string(),
            cause,
        }
    }

    /// Create a DisconnectedBeforeConnect error
    pub fn disconnected_before_connect(peer: impl ToString) -> Self {
        LedgerError::DisconnectedBeforeConnect {
            peer: peer.to_string(),
        }
    }

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        LedgerError::Validation {
            message: message.into(),
        }
    }

    /// Create an Abandoned error
    pub fn abandoned(operation: &str) -> Self {
        LedgerError::Abandoned {
            operation: operation.to_string(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        LedgerError::Config {
            message: message.into(),
        }
    }

    /// The collaborator's error, if this failure carries one
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            LedgerError::Connection { cause, .. } => Some(cause),
            LedgerError::Request(e) | LedgerError::Submission(e) => Some(e),
            _ => None,
        }
    }
}
