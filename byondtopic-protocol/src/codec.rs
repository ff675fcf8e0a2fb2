//! Single-pass decoder for inbound response frames.

use crate::error::ProtocolError;
use crate::frame::{self, RESPONSE_HEADER_SIZE};
use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Reads exactly one response frame from `reader` and returns its body.
///
/// One linear pass: the 5-byte header, validation, then the fixed-size body.
/// Short reads surface as the underlying I/O error; there is no partial-decode
/// resume across calls. The body comes back byte-exact — BYOND replies carry
/// no further structure at this layer, and not all of them are UTF-8.
pub async fn read_response<R>(reader: &mut R) -> Result<Bytes, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    let mut head = [0u8; RESPONSE_HEADER_SIZE];
    reader.read_exact(&mut head).await?;

    let len = frame::parse_response_header(&head)?;
    tracing::trace!("response header ok, body length {}", len);

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body).await?;

    Ok(Bytes::from(body))
}
