//! High-level client API.

use crate::connection::{Connection, ConnectionConfig};
use crate::error::ClientError;
use byondtopic_protocol::TopicBuilder;

/// High-level client for a BYOND server's Topic port.
///
/// Each query dials its own connection, so a `Client` is just configuration
/// and may be shared freely; concurrent queries never share socket or codec
/// state.
#[derive(Debug, Clone)]
pub struct Client {
    config: ConnectionConfig,
}

impl Client {
    /// Creates a new client with the given configuration.
    pub fn new(config: ConnectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Sends `command` as a topic query (the conventional ASCII `?` prefix
    /// is added) and returns the server's reply.
    pub async fn query(&self, command: &str) -> Result<String, ClientError> {
        let mut builder = TopicBuilder::new();
        builder.append(b"?").append(command.as_bytes());
        self.send(builder).await
    }

    /// Sends `payload` verbatim, without the `?` prefix, and returns the
    /// server's reply.
    pub async fn query_raw(&self, payload: &[u8]) -> Result<String, ClientError> {
        let mut builder = TopicBuilder::new();
        builder.append(payload);
        self.send(builder).await
    }

    async fn send(&self, builder: TopicBuilder) -> Result<String, ClientError> {
        // Seal before dialing: an oversized payload aborts the call without
        // touching the network.
        let topic = builder.seal()?;
        let conn = Connection::open(&self.config).await?;
        conn.exchange(topic).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byondtopic_protocol::{ProtocolError, MAX_TOPIC_SIZE};

    #[test]
    fn test_client_is_cheap_to_clone() {
        let client = Client::new(ConnectionConfig::new("127.0.0.1:9000"));
        let other = client.clone();
        assert_eq!(other.config().addr, "127.0.0.1:9000");
    }

    #[tokio::test]
    async fn test_oversized_query_fails_without_dialing() {
        // Unroutable address: reaching the network would hang or error
        // differently, so TopicTooLarge proves the seal check ran first.
        let client = Client::new(ConnectionConfig::new("127.0.0.1:1"));
        let payload = vec![b'a'; MAX_TOPIC_SIZE + 1];

        let result = client.query_raw(&payload).await;
        assert!(matches!(
            result,
            Err(ClientError::Protocol(ProtocolError::TopicTooLarge { .. }))
        ));
    }
}
