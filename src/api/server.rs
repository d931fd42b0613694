//! Server status queries

use crate::core::{request, ConnectionHandle, Remote};
use crate::types::{LedgerError, Payload, RequestCommand};

/// Status of the connected server
pub async fn server_info<R: Remote>(handle: &ConnectionHandle<R>) -> Result<Payload, LedgerError> {
    request(|| handle.remote().request(RequestCommand::ServerInfo)).await
}

/// Round-trip a ping through the connected server
pub async fn ping<R: Remote>(handle: &ConnectionHandle<R>) -> Result<Payload, LedgerError> {
    request(|| handle.remote().request(RequestCommand::Ping)).await
}
