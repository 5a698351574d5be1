//! Robot party: fills an Isaac Sim stage through the MCP extension
//!
//! Lays out a grid of Franka arms, lights the stage, adds a G1 and a Go1 and
//! finally nudges the Go1 into place.

pub mod args;
pub mod scenario;
pub mod scripts;

pub use args::parse_args;
pub use scenario::{ScenarioConfig, ScenarioSummary, run_scenario};
