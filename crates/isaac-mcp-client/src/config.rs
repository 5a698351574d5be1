//! Connection settings for the MCP extension

use std::time::Duration;

/// Host the extension listens on
pub const DEFAULT_HOST: &str = "localhost";
/// Port the extension listens on
pub const DEFAULT_PORT: u16 = 8766;
/// Capacity of the single reply read
pub const DEFAULT_RECV_BUFFER: usize = 16384;

/// Configuration for the MCP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host to connect to (default: localhost)
    pub host: String,
    /// Port to connect to (default: 8766)
    pub port: u16,
    /// Bytes read for each reply; anything beyond is dropped (default: 16384)
    pub recv_buffer_size: usize,
    /// Connection timeout (default: none, wait as long as the OS does)
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    /// `host:port` to dial
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            recv_buffer_size: DEFAULT_RECV_BUFFER,
            connect_timeout: None,
        }
    }
}
