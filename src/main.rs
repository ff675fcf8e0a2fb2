//! byondtopic - Command-line client for the BYOND Topic port
//!
//! Sends a topic command to a running BYOND game server and prints the reply.

mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "byondtopic")]
#[command(about = "Command-line client for the BYOND Topic port")]
#[command(version)]
struct Cli {
    /// Server address (host:port)
    #[arg(short, long, env = "BYOND_SERVER")]
    server: Option<String>,

    /// Connect timeout in seconds
    #[arg(long, default_value = "10")]
    connect_timeout: u64,

    /// Reply read timeout in seconds
    #[arg(long, default_value = "30")]
    read_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a topic command and print the reply
    Query {
        /// Command string (sent as "?COMMAND")
        command: String,
    },

    /// Encode a topic command and print the frame as hex, without connecting
    Encode {
        /// Command string (sent as "?COMMAND")
        command: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Handle encode locally (no server connection needed)
    if let Commands::Encode { command } = &cli.command {
        println!("{}", commands::encode(command)?);
        return Ok(());
    }

    let server = match cli.server {
        Some(ref s) => s.clone(),
        None => {
            eprintln!(
                "{}: --server (or BYOND_SERVER) is required for this command",
                "Error".red()
            );
            std::process::exit(2);
        }
    };

    let config = byondtopic_client::ConnectionConfig::new(server)
        .with_connect_timeout(Duration::from_secs(cli.connect_timeout))
        .with_read_timeout(Duration::from_secs(cli.read_timeout));
    let client = byondtopic_client::Client::new(config);
    tracing::debug!("target server: {}", client.config().addr);

    match commands::execute(&client, cli.command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            std::process::exit(1);
        }
    }
}
