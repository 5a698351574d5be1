//! The fixed command sequence that builds the robot party stage
//!
//! Commands go out strictly one after another. The first failure aborts the
//! run; whatever the extension already applied stays on the stage.

use crate::scripts::{LIGHTING_SCRIPT, move_robot_script};
use isaac_mcp_client::CommandSender;
use isaac_mcp_core::response::{preview, remote_error};
use isaac_mcp_core::{
    Command, PhysicsSceneParams, Position, Result, RobotType, grid_positions,
};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Layout of the stage to build
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub scene_name: String,
    pub gravity: Position,
    /// Add a ground plane with the physics scene
    pub floor: bool,
    /// Robot placed on every grid slot
    pub grid_robot: RobotType,
    /// First corner of the grid
    pub grid_start: Position,
    /// Opposite corner of the grid
    pub grid_end: Position,
    /// Slots along x and along y
    pub grid_size: (usize, usize),
    pub g1_position: Position,
    pub go1_position: Position,
    /// Where the Go1 ends up after the move script runs
    pub go1_target: Position,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            scene_name: "robot_party_scene".into(),
            gravity: [0.0, -0.981, 0.0],
            floor: true,
            grid_robot: RobotType::Franka,
            grid_start: [3.0, 0.0, 0.0],
            grid_end: [6.0, 3.0, 0.0],
            grid_size: (3, 3),
            g1_position: [3.0, 9.0, 0.0],
            go1_position: [2.0, 1.0, 0.0],
            go1_target: [1.0, 1.0, 0.0],
        }
    }
}

/// What a completed run sent and spawned
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioSummary {
    /// Commands answered by the extension
    pub commands_sent: usize,
    /// Robots requested, in spawn order
    pub robots: Vec<(RobotType, Position)>,
}

struct Runner<'a, S: ?Sized> {
    sender: &'a S,
    summary: ScenarioSummary,
}

impl<S: CommandSender + ?Sized> Runner<'_, S> {
    async fn send(&mut self, command: &Command) -> Result<Value> {
        debug!("Sending {}", command.name());
        let reply = self.sender.send(command).await?;
        self.summary.commands_sent += 1;

        if let Some(message) = remote_error(&reply) {
            warn!("{} reported an error: {}", command.name(), message);
        } else {
            debug!("{} replied: {}", command.name(), preview(&reply, 200));
        }

        Ok(reply)
    }

    async fn spawn(&mut self, robot_type: RobotType, position: Position) -> Result<Value> {
        let reply = self
            .send(&Command::create_robot(robot_type.clone(), position))
            .await?;
        self.summary.robots.push((robot_type, position));
        Ok(reply)
    }
}

fn banner(title: &str) {
    let rule = "=".repeat(50);
    println!("\n{}\n{}\n{}", rule, title, rule);
}

/// Build the whole stage through `sender`
pub async fn run_scenario<S: CommandSender + ?Sized>(
    sender: &S,
    config: &ScenarioConfig,
) -> Result<ScenarioSummary> {
    let mut runner = Runner {
        sender,
        summary: ScenarioSummary::default(),
    };

    println!("Checking connection to Isaac Sim...");
    let reply = runner.send(&Command::GetSceneInfo).await?;
    println!("Scene info: {}", reply);

    println!("\nCreating physics scene...");
    let reply = runner
        .send(&Command::CreatePhysicsScene(PhysicsSceneParams {
            objects: Vec::new(),
            floor: config.floor,
            gravity: config.gravity,
            scene_name: config.scene_name.clone(),
        }))
        .await?;
    println!("Physics scene created: {}", reply);

    let (rows, cols) = config.grid_size;
    let robot_name = config.grid_robot.display_name();
    banner(&format!("Creating {}x{} {} robot grid...", rows, cols, robot_name));
    for cell in grid_positions(config.grid_start, config.grid_end, rows, cols) {
        println!(
            "Creating {} {},{} at {:?}",
            robot_name, cell.row, cell.col, cell.position
        );
        let reply = runner.spawn(config.grid_robot.clone(), cell.position).await?;
        println!("  Result: {}", reply);
    }
    info!("Placed {} {} robots", rows * cols, robot_name);

    banner("Adding enhanced lighting...");
    let reply = runner.send(&Command::execute_script(LIGHTING_SCRIPT)).await?;
    println!("Lighting result: {}", reply);

    banner(&format!("Creating G1 robot at {:?}...", config.g1_position));
    let reply = runner.spawn(RobotType::G1, config.g1_position).await?;
    println!("G1 robot created: {}", reply);

    banner(&format!("Creating Go1 robot at {:?}...", config.go1_position));
    let reply = runner.spawn(RobotType::Go1, config.go1_position).await?;
    println!("Go1 robot created: {}", reply);

    println!("\nMoving Go1 robot to {:?}...", config.go1_target);
    let script = move_robot_script(&RobotType::Go1, config.go1_target);
    let reply = runner.send(&Command::execute_script(script)).await?;
    println!("Move result: {}", reply);

    banner("ALL DONE!");
    println!("Created:");
    println!("  - {} {} robots in {}x{} grid", rows * cols, robot_name, rows, cols);
    println!("  - Enhanced lighting (dome + sun + 3 fill lights)");
    println!("  - G1 robot at {:?}", config.g1_position);
    println!("  - Go1 robot at {:?}", config.go1_target);

    info!("Scenario complete after {} commands", runner.summary.commands_sent);
    Ok(runner.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use isaac_mcp_client::{ClientConfig, McpClient};
    use isaac_mcp_core::{IsaacMcpError, Request};
    use serde_json::{Map, json};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio_test::{assert_err, assert_ok};

    /// Answers `{"status":"ok"}` and remembers every request; fails the
    /// request numbered `fail_at` (zero-based) when set
    #[derive(Default)]
    struct RecordingSender {
        requests: Mutex<Vec<Request>>,
        fail_at: Option<usize>,
    }

    #[async_trait]
    impl CommandSender for RecordingSender {
        async fn send_command(
            &self,
            command_type: &str,
            params: Option<Map<String, Value>>,
        ) -> Result<Value> {
            let mut requests = self.requests.lock().unwrap();
            if self.fail_at == Some(requests.len()) {
                return Err(IsaacMcpError::Connection("connection refused".into()));
            }
            requests.push(Request::new(command_type, params));
            Ok(json!({"status": "ok"}))
        }
    }

    #[tokio::test]
    async fn test_fixed_command_order() {
        let sender = RecordingSender::default();
        let summary = assert_ok!(run_scenario(&sender, &ScenarioConfig::default()).await);

        let requests = sender.requests.into_inner().unwrap();
        let types: Vec<&str> = requests.iter().map(|r| r.command_type.as_str()).collect();

        let mut expected = vec!["get_scene_info", "create_physics_scene"];
        expected.extend(std::iter::repeat_n("create_robot", 9));
        expected.extend([
            "execute_script",
            "create_robot",
            "create_robot",
            "execute_script",
        ]);
        assert_eq!(types, expected);
        assert_eq!(summary.commands_sent, 15);

        assert_eq!(
            Value::Object(requests[1].params.clone()),
            json!({
                "objects": [],
                "floor": true,
                "gravity": [0.0, -0.981, 0.0],
                "scene_name": "robot_party_scene"
            })
        );
        for request in &requests[2..11] {
            assert_eq!(request.params["robot_type"], json!("franka"));
        }
        assert_eq!(requests[2].params["position"], json!([3.0, 0.0, 0.0]));
        assert_eq!(requests[10].params["position"], json!([6.0, 3.0, 0.0]));
        assert_eq!(requests[11].params["code"], json!(LIGHTING_SCRIPT));
        assert_eq!(requests[12].params["robot_type"], json!("g1"));
        assert_eq!(requests[12].params["position"], json!([3.0, 9.0, 0.0]));
        assert_eq!(requests[13].params["robot_type"], json!("go1"));
        assert_eq!(requests[13].params["position"], json!([2.0, 1.0, 0.0]));
        assert!(
            requests[14].params["code"]
                .as_str()
                .unwrap()
                .contains("Gf.Vec3d(1.0, 1.0, 0.0)")
        );

        assert_eq!(summary.robots.len(), 11);
        assert_eq!(summary.robots[9], (RobotType::G1, [3.0, 9.0, 0.0]));
        assert_eq!(summary.robots[10], (RobotType::Go1, [2.0, 1.0, 0.0]));
    }

    #[tokio::test]
    async fn test_failure_stops_the_run() {
        let sender = RecordingSender {
            fail_at: Some(4),
            ..Default::default()
        };

        let err = assert_err!(run_scenario(&sender, &ScenarioConfig::default()).await);
        assert!(matches!(err, IsaacMcpError::Connection(_)));

        // Earlier commands stay applied; nothing after the failure is sent
        assert_eq!(sender.requests.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_remote_error_status_does_not_abort() {
        struct RejectingSender;

        #[async_trait]
        impl CommandSender for RejectingSender {
            async fn send_command(
                &self,
                _command_type: &str,
                _params: Option<Map<String, Value>>,
            ) -> Result<Value> {
                Ok(json!({"status": "error", "message": "Isaac Sim is busy"}))
            }
        }

        let summary = assert_ok!(run_scenario(&RejectingSender, &ScenarioConfig::default()).await);
        assert_eq!(summary.commands_sent, 15);
    }

    #[tokio::test]
    async fn test_scenario_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let mut types = Vec::new();
            // 15 commands, each on its own connection
            for _ in 0..15 {
                let (mut stream, _) = listener.accept().await.unwrap();
                let mut data = Vec::new();
                let mut chunk = [0u8; 4096];
                let request: Value = loop {
                    let n = stream.read(&mut chunk).await.unwrap();
                    assert!(n > 0);
                    data.extend_from_slice(&chunk[..n]);
                    if let Ok(value) = serde_json::from_slice(&data) {
                        break value;
                    }
                };
                stream.write_all(br#"{"status":"ok"}"#).await.unwrap();
                let _ = stream.shutdown().await;
                types.push(request["type"].as_str().unwrap().to_string());
            }

            let extra = tokio::time::timeout(Duration::from_millis(200), listener.accept()).await;
            assert!(extra.is_err(), "unexpected connection after the last command");
            types
        });

        let client = McpClient::with_config(ClientConfig {
            host: addr.ip().to_string(),
            port: addr.port(),
            ..Default::default()
        });
        let summary = assert_ok!(run_scenario(&client, &ScenarioConfig::default()).await);
        assert_eq!(summary.commands_sent, 15);

        let types = server.await.unwrap();
        assert_eq!(types.len(), 15);
        assert_eq!(types.first().map(String::as_str), Some("get_scene_info"));
        assert_eq!(types.last().map(String::as_str), Some("execute_script"));
    }
}
