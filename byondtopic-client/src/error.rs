//! Client error types.

use byondtopic_protocol::ProtocolError;
use thiserror::Error;

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("protocol error: {0}")]
    Protocol(ProtocolError),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("read timeout")]
    ReadTimeout,
}

impl From<ProtocolError> for ClientError {
    fn from(err: ProtocolError) -> Self {
        // Keep transport failures distinguishable from malformed frames
        match err {
            ProtocolError::Io(e) => ClientError::Io(e),
            other => ClientError::Protocol(other),
        }
    }
}

impl ClientError {
    /// Returns whether this error is worth retrying from the caller's side.
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Io(_) => true,
            ClientError::ConnectTimeout => true,
            ClientError::ReadTimeout => true,
            ClientError::Protocol(_) => false,
        }
    }
}
