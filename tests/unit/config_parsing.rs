//! Unit tests for TOML configuration parsing.

use linear_axis_motion::config::SystemConfig;

/// Test parsing a valid axis configuration from TOML.
#[test]
fn test_parse_axis_config() {
    let toml_str = r#"
[axes.x]
name = "x"
steps_per_mm = 80.0
velocity_mm_s = 100.0
acceleration_mm_s2 = 1000.0
homing_velocity_mm_s = 20.0
homing_acceleration_mm_s2 = 200.0
homing_direction = -1
homing_distance_mm = 200.0
homing_bounce_mm = 2.0
homing_sensitivity = 50
invert_direction = false
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("x").expect("Axis not found");

    assert_eq!(axis.name, 'x');
    assert_eq!(axis.steps_per_mm, 80.0);
    assert_eq!(axis.velocity_mm_s, 100.0);
    assert_eq!(axis.acceleration_mm_s2, 1000.0);
    assert_eq!(axis.homing_direction, -1);
    assert!(!axis.invert_direction);
}

/// Test parsing a named move with percentage overrides.
#[test]
fn test_parse_move_with_percent_overrides() {
    let toml_str = r#"
[axes.x]
name = "x"
steps_per_mm = 80.0
velocity_mm_s = 100.0
acceleration_mm_s2 = 1000.0
homing_velocity_mm_s = 20.0
homing_acceleration_mm_s2 = 200.0
homing_direction = -1
homing_distance_mm = 200.0
homing_bounce_mm = 2.0
homing_sensitivity = 50

[moves.home]
axis = "x"
target_mm = 0.0
velocity_percent = 50
acceleration_percent = 80
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let mv = config.move_("home").expect("Move not found");

    assert_eq!(mv.axis.as_str(), "x");
    assert_eq!(mv.target_mm, 0.0);
    assert_eq!(mv.velocity_percent, 50);
    assert_eq!(mv.acceleration_percent, 80);
}

/// Test that percent overrides default to 100 when omitted.
#[test]
fn test_move_percent_defaults_to_100() {
    let toml_str = r#"
[axes.x]
name = "x"
steps_per_mm = 80.0
velocity_mm_s = 100.0
acceleration_mm_s2 = 1000.0
homing_velocity_mm_s = 20.0
homing_acceleration_mm_s2 = 200.0
homing_direction = -1
homing_distance_mm = 200.0
homing_bounce_mm = 2.0
homing_sensitivity = 50

[moves.park]
axis = "x"
target_mm = 140.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let mv = config.move_("park").expect("Move not found");

    assert_eq!(mv.velocity_percent, 100);
    assert_eq!(mv.acceleration_percent, 100);
}

/// Test parsing an axis with soft limits.
#[test]
fn test_parse_axis_with_limits() {
    let toml_str = r#"
[axes.x]
name = "x"
steps_per_mm = 80.0
velocity_mm_s = 100.0
acceleration_mm_s2 = 1000.0
homing_velocity_mm_s = 20.0
homing_acceleration_mm_s2 = 200.0
homing_direction = -1
homing_distance_mm = 200.0
homing_bounce_mm = 2.0
homing_sensitivity = 50

[axes.x.limits]
min_mm = 0.0
max_mm = 150.0
policy = "reject"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("x").expect("Axis not found");

    let limits = axis.limits.as_ref().expect("Limits not found");
    assert_eq!(limits.min_mm, 0.0);
    assert_eq!(limits.max_mm, 150.0);
}

/// Test that an endstop axis with unset endstop pin parses fine (valid for
/// sensorless-only axes).
#[test]
fn test_parse_axis_without_endstop() {
    let toml_str = r#"
[axes.x]
name = "x"
steps_per_mm = 80.0
velocity_mm_s = 100.0
acceleration_mm_s2 = 1000.0
homing_velocity_mm_s = 20.0
homing_acceleration_mm_s2 = 200.0
homing_direction = -1
homing_distance_mm = 200.0
homing_bounce_mm = 2.0
homing_sensitivity = 50
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("x").expect("Axis not found");
    assert!(axis.endstop.is_none());
}

/// Test that a missing required field is rejected during parsing.
#[test]
fn test_missing_steps_per_mm_rejected() {
    let toml_str = r#"
[axes.x]
name = "x"
velocity_mm_s = 100.0
acceleration_mm_s2 = 1000.0
homing_velocity_mm_s = 20.0
homing_acceleration_mm_s2 = 200.0
homing_direction = -1
homing_distance_mm = 200.0
homing_bounce_mm = 2.0
homing_sensitivity = 50
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject axis missing steps_per_mm");
}
