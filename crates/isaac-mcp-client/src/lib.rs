//! Isaac Sim MCP client
//!
//! This crate provides a client for the Isaac Sim MCP extension's TCP socket.
//! Every command opens its own connection, writes one JSON request, reads one
//! bounded reply and closes the socket again.

pub mod client;
pub mod config;

pub use client::{CommandSender, McpClient};
pub use config::{ClientConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RECV_BUFFER};
