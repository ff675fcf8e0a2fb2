//! # byondtopic-client
//!
//! Client library for the BYOND Topic port.
//!
//! This crate provides:
//! - One-shot query/reply exchanges over plain TCP
//! - Configurable connect and read timeouts
//! - A [`send_topic`] convenience function for single calls

pub mod client;
pub mod connection;
pub mod error;

pub use client::Client;
pub use connection::{Connection, ConnectionConfig};
pub use error::ClientError;

/// Sends a single topic `command` to the server at `addr` (`host:port`) and
/// returns its reply, using default timeouts.
pub async fn send_topic(addr: impl Into<String>, command: &str) -> Result<String, ClientError> {
    Client::new(ConnectionConfig::new(addr)).query(command).await
}
