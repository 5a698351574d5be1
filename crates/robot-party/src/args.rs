//! Command line handling for the `robot-party` binary
//!
//! Usage: `robot-party [HOST] [PORT]`. Both default to the extension's
//! `localhost:8766`.

use anyhow::{Context, Result, bail};
use isaac_mcp_client::ClientConfig;

/// Build the client configuration from `std::env::args()`-style arguments
pub fn parse_args(args: &[String]) -> Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Some(host) = args.get(1) {
        config.host = host.clone();
    }
    if let Some(port) = args.get(2) {
        config.port = port
            .parse()
            .with_context(|| format!("Invalid port: {}", port))?;
    }
    if args.len() > 3 {
        bail!("Usage: robot-party [HOST] [PORT]");
    }

    Ok(config)
}
