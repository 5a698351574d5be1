//! Commands understood by the Isaac Sim MCP extension
//!
//! On the wire every command is a single JSON object:
//! `{"type": "<command name>", "params": {...}}`
//!
//! Parameters are typed per command here and only flattened into a generic
//! string-keyed map at the serialization boundary.

use crate::error::{IsaacMcpError, Result};
use crate::robot::{Position, RobotType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw request as written to the socket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "type")]
    pub command_type: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl Request {
    /// Build a request; missing params are sent as an empty object
    pub fn new(command_type: impl Into<String>, params: Option<Map<String, Value>>) -> Self {
        Self {
            command_type: command_type.into(),
            params: params.unwrap_or_default(),
        }
    }

    /// Encode as UTF-8 JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Into::into)
    }
}

/// Parameters for `create_physics_scene`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsSceneParams {
    /// Objects to spawn along with the scene
    #[serde(default)]
    pub objects: Vec<Value>,
    /// Whether to add a ground plane
    pub floor: bool,
    /// Gravity vector
    pub gravity: Position,
    pub scene_name: String,
}

/// Parameters for `create_robot`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotParams {
    pub robot_type: RobotType,
    pub position: Position,
}

/// Parameters for `execute_script`
///
/// `code` runs inside the simulator's own interpreter and is opaque here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptParams {
    pub code: String,
}

/// A typed command for the extension
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Ask for a summary of the current stage
    GetSceneInfo,
    /// Create the physics scene
    CreatePhysicsScene(PhysicsSceneParams),
    /// Spawn a robot asset
    CreateRobot(RobotParams),
    /// Run a script inside the simulator
    ExecuteScript(ScriptParams),
}

impl Command {
    /// Spawn `robot_type` at `position`
    pub fn create_robot(robot_type: impl Into<RobotType>, position: Position) -> Self {
        Command::CreateRobot(RobotParams {
            robot_type: robot_type.into(),
            position,
        })
    }

    /// Run `code` inside the simulator
    pub fn execute_script(code: impl Into<String>) -> Self {
        Command::ExecuteScript(ScriptParams { code: code.into() })
    }

    /// Command name as sent in the `type` field
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetSceneInfo => "get_scene_info",
            Command::CreatePhysicsScene(_) => "create_physics_scene",
            Command::CreateRobot(_) => "create_robot",
            Command::ExecuteScript(_) => "execute_script",
        }
    }

    /// Flatten the typed parameters into the wire map
    pub fn params(&self) -> Result<Map<String, Value>> {
        let value = match self {
            Command::GetSceneInfo => return Ok(Map::new()),
            Command::CreatePhysicsScene(params) => serde_json::to_value(params)?,
            Command::CreateRobot(params) => serde_json::to_value(params)?,
            Command::ExecuteScript(params) => serde_json::to_value(params)?,
        };

        match value {
            Value::Object(map) => Ok(map),
            other => Err(IsaacMcpError::Protocol(format!(
                "params for {} must be an object, got {}",
                self.name(),
                other
            ))),
        }
    }

    /// Build the raw request for this command
    pub fn to_request(&self) -> Result<Request> {
        Ok(Request::new(self.name(), Some(self.params()?)))
    }
}
