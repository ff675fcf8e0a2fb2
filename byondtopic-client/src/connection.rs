//! Connection management.
//!
//! A [`Connection`] wraps one TCP socket and performs exactly one
//! query/reply exchange before it is dropped. The Topic port answers a
//! single frame per connection, so there is nothing to pool or reuse.

use crate::error::ClientError;
use byondtopic_protocol::{codec, SealedTopic};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default reply read timeout.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection configuration.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Server address as `host:port`. Hostnames are resolved at dial time.
    pub addr: String,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Reply read timeout.
    pub read_timeout: Duration,
}

impl ConnectionConfig {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
}

/// A single-use connection to a BYOND server's Topic port.
pub struct Connection {
    stream: TcpStream,
    read_timeout: Duration,
}

impl Connection {
    /// Resolves the configured address and dials it. Resolve and dial
    /// failures surface immediately; there is no retry.
    pub async fn open(config: &ConnectionConfig) -> Result<Self, ClientError> {
        tracing::debug!("connecting to {}", config.addr);

        let stream = tokio::time::timeout(
            config.connect_timeout,
            TcpStream::connect(config.addr.as_str()),
        )
        .await
        .map_err(|_| ClientError::ConnectTimeout)?
        .map_err(ClientError::Io)?;

        stream.set_nodelay(true).ok();

        Ok(Self {
            stream,
            read_timeout: config.read_timeout,
        })
    }

    /// Transmits a sealed topic and reads the server's single reply frame.
    ///
    /// The write completes, and its outcome is checked, before the read
    /// begins. Consuming `self` closes the socket on every exit path.
    pub async fn exchange(mut self, topic: SealedTopic) -> Result<String, ClientError> {
        tracing::debug!("sending topic frame ({} bytes)", topic.len());
        self.stream.write_all(topic.as_bytes()).await?;

        let body = tokio::time::timeout(
            self.read_timeout,
            codec::read_response(&mut self.stream),
        )
        .await
        .map_err(|_| ClientError::ReadTimeout)??;

        tracing::debug!("received reply ({} bytes)", body.len());
        // Replies are conventionally text; non-UTF-8 sequences are replaced
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
