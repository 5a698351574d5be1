//! Robot kinds and stage positions

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the stage as `[x, y, z]`
pub type Position = [f64; 3];

/// Robot asset understood by the extension's `create_robot` command
///
/// Names the extension does not know are carried through untouched; only the
/// remote side decides whether a robot type is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RobotType {
    /// Franka Panda arm
    Franka,
    /// Unitree G1 humanoid
    G1,
    /// Unitree Go1 quadruped
    Go1,
    /// Any other asset name
    Other(String),
}

impl RobotType {
    /// Name as sent on the wire
    pub fn as_str(&self) -> &str {
        match self {
            RobotType::Franka => "franka",
            RobotType::G1 => "g1",
            RobotType::Go1 => "go1",
            RobotType::Other(name) => name.as_str(),
        }
    }

    /// Name used in progress output
    pub fn display_name(&self) -> &str {
        match self {
            RobotType::Franka => "Franka",
            RobotType::G1 => "G1",
            RobotType::Go1 => "Go1",
            RobotType::Other(name) => name.as_str(),
        }
    }
}

impl From<String> for RobotType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "franka" => RobotType::Franka,
            "g1" => RobotType::G1,
            "go1" => RobotType::Go1,
            _ => RobotType::Other(name),
        }
    }
}

impl From<&str> for RobotType {
    fn from(name: &str) -> Self {
        RobotType::from(name.to_string())
    }
}

impl From<RobotType> for String {
    fn from(robot_type: RobotType) -> Self {
        match robot_type {
            RobotType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RobotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
