//! Scripts executed inside the simulator via `execute_script`
//!
//! These are opaque payloads. They run in Isaac Sim's embedded Python with
//! access to the USD stage; nothing here interprets them.

use isaac_mcp_core::{Position, RobotType};

/// Dome light, a distant sun light and three sphere fill lights
pub const LIGHTING_SCRIPT: &str = r#"
from pxr import UsdLux, UsdGeom, Gf
import omni.usd

stage = omni.usd.get_context().get_stage()

print("Adding dome light...")
dome_light = UsdLux.DomeLight.Define(stage, "/World/DomeLight")
dome_light.CreateIntensityAttr(1000.0)

print("Adding directional sun light...")
distant_light = UsdLux.DistantLight.Define(stage, "/World/SunLight")
distant_light.CreateIntensityAttr(3000.0)
distant_light.CreateAngleAttr(0.53)
xform = UsdGeom.Xformable(distant_light)
xform.AddRotateXYZOp().Set(Gf.Vec3f(-45, 45, 0))

fill_positions = [
    ([10, 10, 5], "FillLight_1"),
    ([-10, 10, 5], "FillLight_2"),
    ([0, -10, 5], "FillLight_3"),
]

for pos, name in fill_positions:
    print(f"Adding {name} at {pos}")
    sphere_light = UsdLux.SphereLight.Define(stage, f"/World/{name}")
    sphere_light.CreateIntensityAttr(2000.0)
    sphere_light.CreateRadiusAttr(0.5)

    xform = UsdGeom.Xformable(sphere_light)
    xform.ClearXformOpOrder()
    translate_op = xform.AddTranslateOp()
    translate_op.Set(Gf.Vec3d(pos[0], pos[1], pos[2]))

print("Lighting setup complete!")
"#;

const MOVE_TEMPLATE: &str = r#"
from pxr import UsdGeom, Gf
import omni.usd

stage = omni.usd.get_context().get_stage()

target = Gf.Vec3d(__X__, __Y__, __Z__)
robot_prim = None
for prim in stage.Traverse():
    if "__NEEDLE__" in prim.GetName().lower() or "__LABEL__" in str(prim.GetPath()):
        robot_prim = prim
        break

if robot_prim:
    print("Found __LABEL__ at:", robot_prim.GetPath())
    xform = UsdGeom.Xformable(robot_prim)

    ops = xform.GetOrderedXformOps()
    if ops:
        for op in ops:
            if op.GetOpType() == UsdGeom.XformOp.TypeTranslate:
                op.Set(target)
                print("Moved __LABEL__ to __TARGET__")
                break
    else:
        xform.ClearXformOpOrder()
        translate_op = xform.AddTranslateOp()
        translate_op.Set(target)
        print("Moved __LABEL__ to __TARGET__")
else:
    print("Could not find __LABEL__ robot to move")
"#;

/// Script that moves the first prim matching `robot` to `target`.
///
/// A prim matches when its name, lower-cased, contains the robot's wire name
/// or its path contains the robot's display name.
pub fn move_robot_script(robot: &RobotType, target: Position) -> String {
    MOVE_TEMPLATE
        .replace("__NEEDLE__", &escape_python(&robot.as_str().to_lowercase()))
        .replace("__LABEL__", &escape_python(robot.display_name()))
        .replace("__TARGET__", &display_position(target))
        .replace("__X__", &format!("{:?}", target[0]))
        .replace("__Y__", &format!("{:?}", target[1]))
        .replace("__Z__", &format!("{:?}", target[2]))
}

/// Escape text for a double-quoted Python string literal
fn escape_python(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `[1, 1, 0]` style, whole numbers without a trailing `.0`
fn display_position(position: Position) -> String {
    format!("[{}, {}, {}]", position[0], position[1], position[2])
}
