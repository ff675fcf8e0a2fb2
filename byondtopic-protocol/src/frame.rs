//! Binary frame format for BYOND topics.
//!
//! Outbound frame layout (10 bytes of framing + payload):
//!
//! ```text
//! +--------+--------+----------------+---------+------+
//! | magic  | length | reserved       | payload | term |
//! | 2 bytes| 2 bytes| 5 bytes (zero) | N bytes | 0x00 |
//! +--------+--------+----------------+---------+------+
//! ```
//!
//! The length field is big-endian and carries `N + 6` (payload plus the
//! fixed overhead the protocol counts: magic, length, one reserved byte and
//! the terminator).
//!
//! Inbound response frames carry a 5-byte header instead: the same magic,
//! the same two length encodings, and a `0x06` type tag where outbound
//! frames carry zero padding. There is no terminator on the inbound side.

use crate::error::ProtocolError;
use crate::{MAX_TOPIC_SIZE, TOPIC_OVERHEAD};
use bytes::{BufMut, Bytes, BytesMut};

/// Magic bytes identifying a BYOND topic frame.
pub const MAGIC: [u8; 2] = [0x00, 0x83];

/// Type tag carried in the fifth header byte of a response frame.
pub const RESPONSE_TYPE: u8 = 0x06;

/// Size of the inbound response header in bytes (2 magic + 2 length + 1 type).
pub const RESPONSE_HEADER_SIZE: usize = 5;

/// Number of reserved zero bytes following the length field in an outbound frame.
const OUTBOUND_PADDING: usize = 5;

/// An unsealed outbound topic accumulating payload bytes.
///
/// Sealing consumes the builder and produces a [`SealedTopic`], so writing
/// after seal or reading before seal cannot be expressed.
#[derive(Debug, Default)]
pub struct TopicBuilder {
    payload: BytesMut,
}

impl TopicBuilder {
    pub fn new() -> Self {
        Self {
            payload: BytesMut::new(),
        }
    }

    /// Appends raw payload bytes to the topic.
    pub fn append(&mut self, data: &[u8]) -> &mut Self {
        self.payload.extend_from_slice(data);
        self
    }

    /// Returns the number of payload bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Seals the topic, serializing the complete outbound frame.
    ///
    /// Fails with [`ProtocolError::TopicTooLarge`] when the payload plus the
    /// fixed overhead does not fit the 16-bit length field. The check runs
    /// before any serialization, so a failed seal produces no bytes.
    pub fn seal(self) -> Result<SealedTopic, ProtocolError> {
        let payload_len = self.payload.len();
        if payload_len > MAX_TOPIC_SIZE {
            return Err(ProtocolError::TopicTooLarge {
                size: payload_len,
                max: MAX_TOPIC_SIZE,
            });
        }

        // magic + length + padding + payload + terminator
        let total = MAGIC.len() + 2 + OUTBOUND_PADDING + payload_len + 1;
        let mut buf = BytesMut::with_capacity(total);

        // Magic (2 bytes)
        buf.put_slice(&MAGIC);

        // Length (2 bytes, big-endian, payload plus overhead)
        buf.put_u16((payload_len + TOPIC_OVERHEAD) as u16);

        // Reserved padding (5 bytes)
        buf.put_bytes(0x00, OUTBOUND_PADDING);

        // Payload
        buf.put_slice(&self.payload);

        // Null terminator
        buf.put_u8(0x00);

        Ok(SealedTopic {
            bytes: buf.freeze(),
        })
    }
}

/// A sealed outbound topic frame, frozen and ready for transmission.
#[derive(Debug, Clone)]
pub struct SealedTopic {
    bytes: Bytes,
}

impl SealedTopic {
    /// Returns the serialized frame. Repeated calls yield identical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total serialized frame length, framing included.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the topic, returning the underlying buffer.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

/// Validates a response header and returns the body length.
///
/// The header must start with [`MAGIC`] and carry [`RESPONSE_TYPE`] in its
/// fifth byte; anything else is rejected as not a topic. The length field
/// has two encodings: when byte 2 is zero the length is byte 3 alone (short
/// form for bodies under 256 bytes), otherwise bytes 2-3 form a big-endian
/// 16-bit value.
pub fn parse_response_header(head: &[u8; RESPONSE_HEADER_SIZE]) -> Result<usize, ProtocolError> {
    if head[..2] != MAGIC {
        return Err(ProtocolError::InvalidMagic([head[0], head[1]]));
    }
    if head[4] != RESPONSE_TYPE {
        return Err(ProtocolError::InvalidResponseType(head[4]));
    }

    let len = if head[2] == 0x00 {
        head[3] as usize
    } else {
        u16::from_be_bytes([head[2], head[3]]) as usize
    };

    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seal_layout() {
        let mut builder = TopicBuilder::new();
        builder.append(b"?status");
        let sealed = builder.seal().unwrap();

        let bytes = sealed.as_bytes();
        assert_eq!(bytes.len(), 7 + 10);
        assert_eq!(&bytes[..2], &MAGIC);
        // Length field counts payload plus 6 bytes of overhead
        assert_eq!(u16::from_be_bytes([bytes[2], bytes[3]]), 7 + 6);
        assert_eq!(&bytes[4..9], &[0x00; 5]);
        assert_eq!(&bytes[9..16], b"?status");
        assert_eq!(bytes[16], 0x00);
    }

    #[test]
    fn test_seal_empty_payload() {
        let sealed = TopicBuilder::new().seal().unwrap();
        let bytes = sealed.as_bytes();
        assert_eq!(bytes.len(), 10);
        assert_eq!(u16::from_be_bytes([bytes[2], bytes[3]]), 6);
    }

    #[test]
    fn test_seal_incremental_append() {
        let mut builder = TopicBuilder::new();
        builder.append(b"?").append(b"pi").append(b"ng");
        assert_eq!(builder.len(), 5);
        let sealed = builder.seal().unwrap();
        assert_eq!(&sealed.as_bytes()[9..14], b"?ping");
    }

    #[test]
    fn test_seal_too_large() {
        let mut builder = TopicBuilder::new();
        builder.append(&vec![0u8; MAX_TOPIC_SIZE + 1]);
        let result = builder.seal();
        assert!(matches!(result, Err(ProtocolError::TopicTooLarge { .. })));
    }

    #[test]
    fn test_seal_at_limit() {
        let mut builder = TopicBuilder::new();
        builder.append(&vec![b'a'; MAX_TOPIC_SIZE]);
        let sealed = builder.seal().unwrap();
        assert_eq!(
            u16::from_be_bytes([sealed.as_bytes()[2], sealed.as_bytes()[3]]),
            u16::MAX
        );
    }

    #[test]
    fn test_sealed_bytes_stable() {
        let mut builder = TopicBuilder::new();
        builder.append(b"?players");
        let sealed = builder.seal().unwrap();
        let first = sealed.as_bytes().to_vec();
        assert_eq!(sealed.as_bytes(), first.as_slice());
    }

    #[test]
    fn test_parse_header_short_form() {
        let head = [0x00, 0x83, 0x00, 0x01, 0x06];
        assert_eq!(parse_response_header(&head).unwrap(), 1);
    }

    #[test]
    fn test_parse_header_long_form() {
        // 0x0100 = 256, outside the short form
        let head = [0x00, 0x83, 0x01, 0x00, 0x06];
        assert_eq!(parse_response_header(&head).unwrap(), 256);

        let head = [0x00, 0x83, 0x12, 0x34, 0x06];
        assert_eq!(parse_response_header(&head).unwrap(), 0x1234);
    }

    #[test]
    fn test_parse_header_bad_magic() {
        let head = [0xde, 0xad, 0x00, 0x01, 0x06];
        let result = parse_response_header(&head);
        assert!(matches!(result, Err(ProtocolError::InvalidMagic(_))));
    }

    #[test]
    fn test_parse_header_bad_type() {
        let head = [0x00, 0x83, 0x00, 0x01, 0x00];
        let result = parse_response_header(&head);
        assert!(matches!(
            result,
            Err(ProtocolError::InvalidResponseType(0x00))
        ));
    }

    proptest! {
        #[test]
        fn prop_length_field_counts_overhead(payload in proptest::collection::vec(any::<u8>(), 0..4096)) {
            let mut builder = TopicBuilder::new();
            builder.append(&payload);
            let sealed = builder.seal().unwrap();
            let bytes = sealed.as_bytes();

            let field = u16::from_be_bytes([bytes[2], bytes[3]]) as usize;
            prop_assert_eq!(field, payload.len() + TOPIC_OVERHEAD);
            prop_assert_eq!(&bytes[9..bytes.len() - 1], payload.as_slice());
            prop_assert_eq!(bytes[bytes.len() - 1], 0x00);
        }

        #[test]
        fn prop_oversized_payload_rejected(extra in 1usize..64) {
            let mut builder = TopicBuilder::new();
            builder.append(&vec![0u8; MAX_TOPIC_SIZE + extra]);
            prop_assert!(
                matches!(builder.seal(), Err(ProtocolError::TopicTooLarge { .. })),
                "expected Err(ProtocolError::TopicTooLarge)"
            );
        }
    }
}
