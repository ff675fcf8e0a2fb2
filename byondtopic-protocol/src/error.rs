//! Protocol error types.

use thiserror::Error;

/// Protocol-level errors that can occur while framing or parsing topics.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid magic bytes: expected [00, 83], got {0:02x?}")]
    InvalidMagic([u8; 2]),

    #[error("invalid response type: expected 0x06, got {0:#04x}")]
    InvalidResponseType(u8),

    #[error("topic too large: {size} bytes (max {max})")]
    TopicTooLarge { size: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    /// Returns whether this error means the peer sent bytes that are not a
    /// valid topic frame, as opposed to a transport failure.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ProtocolError::InvalidMagic(_) | ProtocolError::InvalidResponseType(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_classification() {
        assert!(ProtocolError::InvalidMagic([0x00, 0x84]).is_malformed());
        assert!(ProtocolError::InvalidResponseType(0x00).is_malformed());
        assert!(!ProtocolError::TopicTooLarge { size: 70000, max: 65529 }.is_malformed());
        assert!(!ProtocolError::Io(std::io::Error::from(std::io::ErrorKind::UnexpectedEof))
            .is_malformed());
    }

    #[test]
    fn test_error_display() {
        let err = ProtocolError::InvalidMagic([0xff, 0x00]);
        assert!(err.to_string().contains("magic"));

        let err = ProtocolError::InvalidResponseType(0x42);
        assert!(err.to_string().contains("0x42"));

        let err = ProtocolError::TopicTooLarge { size: 100, max: 50 };
        assert!(err.to_string().contains("100"));
    }
}
