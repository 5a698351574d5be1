//! One-shot TCP client for the MCP extension

use crate::config::ClientConfig;
use async_trait::async_trait;
use isaac_mcp_core::{Command, IsaacMcpError, Request, Result};
use serde_json::{Map, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, warn};

/// Anything that can deliver a command to the extension and hand back its reply
#[async_trait]
pub trait CommandSender: Send + Sync {
    /// Send a raw command; `None` params go out as `{}`
    async fn send_command(
        &self,
        command_type: &str,
        params: Option<Map<String, Value>>,
    ) -> Result<Value>;

    /// Send a typed command
    async fn send(&self, command: &Command) -> Result<Value> {
        let params = command.params()?;
        self.send_command(command.name(), Some(params)).await
    }
}

/// Client for the Isaac Sim MCP extension
///
/// Holds no connection. Each call dials, sends, reads once and hangs up.
#[derive(Debug, Clone, Default)]
pub struct McpClient {
    config: ClientConfig,
}

impl McpClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn connect(&self) -> Result<TcpStream> {
        let addr = self.config.address();
        debug!("Connecting to MCP extension at {}", addr);

        let connecting = TcpStream::connect(&addr);
        let connected = match self.config.connect_timeout {
            Some(limit) => tokio::time::timeout(limit, connecting)
                .await
                .map_err(|_| IsaacMcpError::Connection(format!("Connection timeout to {}", addr)))?,
            None => connecting.await,
        };

        connected
            .map_err(|e| IsaacMcpError::Connection(format!("Failed to connect to {}: {}", addr, e)))
    }
}

#[async_trait]
impl CommandSender for McpClient {
    async fn send_command(
        &self,
        command_type: &str,
        params: Option<Map<String, Value>>,
    ) -> Result<Value> {
        let payload = Request::new(command_type, params).to_bytes()?;
        let mut stream = self.connect().await?;

        let preview: String = String::from_utf8_lossy(&payload).chars().take(200).collect();
        debug!("[Rust→Isaac] len={} json={}", payload.len(), preview);

        stream
            .write_all(&payload)
            .await
            .map_err(|e| IsaacMcpError::Io(format!("Send failed: {}", e)))?;

        // Single bounded read; the extension does not frame its replies
        let mut buf = vec![0u8; self.config.recv_buffer_size];
        let len = stream
            .read(&mut buf)
            .await
            .map_err(|e| IsaacMcpError::Io(format!("Receive failed: {}", e)))?;

        if let Err(e) = stream.shutdown().await {
            debug!("Shutdown after {} failed: {}", command_type, e);
        }

        if len == buf.len() {
            warn!(
                "Reply to {} filled the {} byte receive buffer and may be truncated",
                command_type, len
            );
        }

        let data = &buf[..len];
        let preview: String = String::from_utf8_lossy(data).chars().take(200).collect();
        debug!("[Isaac→Rust] len={} json={}", len, preview);

        serde_json::from_slice(data).map_err(Into::into)
    }
}
