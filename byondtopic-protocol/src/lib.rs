//! # byondtopic-protocol
//!
//! Wire protocol implementation for the BYOND Topic port.
//!
//! This crate provides:
//! - Binary framing with the `0x00 0x83` magic prefix and 16-bit length field
//! - A sealed/unsealed topic builder for outbound frames
//! - A single-pass decoder for inbound response frames

pub mod codec;
pub mod error;
pub mod frame;

pub use codec::read_response;
pub use error::ProtocolError;
pub use frame::{SealedTopic, TopicBuilder, MAGIC, RESPONSE_HEADER_SIZE, RESPONSE_TYPE};

/// Fixed per-frame overhead counted into the length field (magic, length,
/// one reserved byte, terminator).
pub const TOPIC_OVERHEAD: usize = 6;

/// Maximum topic payload size. The length field is 16 bits wide and carries
/// the payload length plus [`TOPIC_OVERHEAD`].
pub const MAX_TOPIC_SIZE: usize = u16::MAX as usize - TOPIC_OVERHEAD;
