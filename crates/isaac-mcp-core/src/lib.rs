//! # isaac-mcp-core
//!
//! Core types for talking to the Isaac Sim MCP extension over its socket.
//!
//! This crate provides:
//! - Typed commands and their parameter shapes
//! - Robot kinds and stage positions
//! - Grid layout for placing robots
//! - Helpers for peeking at opaque replies
//! - The shared error type

pub mod command;
pub mod error;
pub mod grid;
pub mod response;
pub mod robot;

pub use command::{Command, PhysicsSceneParams, Request, RobotParams, ScriptParams};
pub use error::{IsaacMcpError, Result};
pub use grid::{GridCell, grid_positions};
pub use robot::{Position, RobotType};
