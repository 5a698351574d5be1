//! robot-party: populate a running Isaac Sim stage over the MCP extension socket
//!
//! Sends the fixed command sequence once and exits. Any error ends the run
//! with a non-zero status.

use anyhow::Result;
use isaac_mcp_client::McpClient;
use robot_party::{ScenarioConfig, parse_args, run_scenario};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let config = parse_args(&args)?;
    info!("Using Isaac Sim MCP extension at {}", config.address());

    let client = McpClient::with_config(config);
    let summary = run_scenario(&client, &ScenarioConfig::default()).await?;
    info!(
        "Spawned {} robots with {} commands",
        summary.robots.len(),
        summary.commands_sent
    );

    Ok(())
}
