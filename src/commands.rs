//! Command execution.

use crate::Commands;
use byondtopic_client::Client;
use byondtopic_protocol::TopicBuilder;

/// Executes a command against the server and returns the output to print.
pub async fn execute(client: &Client, cmd: Commands) -> Result<String, Box<dyn std::error::Error>> {
    match cmd {
        Commands::Query { command } => {
            let reply = client.query(&command).await?;
            Ok(reply)
        }

        Commands::Encode { .. } => unreachable!(), // Handled locally in main
    }
}

/// Seals `?command` into a frame and renders it as hex.
pub fn encode(command: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut builder = TopicBuilder::new();
    builder.append(b"?").append(command.as_bytes());
    let sealed = builder.seal()?;
    Ok(hex::encode(sealed.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hex_frame() {
        // "?ping" is 5 bytes, length field 5 + 6 = 0x000b
        let hex_frame = encode("ping").unwrap();
        assert_eq!(hex_frame, "0083000b00000000003f70696e6700");
    }
}
