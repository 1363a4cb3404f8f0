//! Unit tests for configuration validation.

use linear_axis_motion::config::{validate_config, SystemConfig};

const BASE_AXIS: &str = r#"
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

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = format!(
        r#"{BASE_AXIS}
[moves.park]
axis = "x"
target_mm = 90.0
velocity_percent = 100
"#
    );

    let config: SystemConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a move referencing a non-existent axis.
#[test]
fn test_move_invalid_axis_reference() {
    let toml_str = format!(
        r#"{BASE_AXIS}
[moves.bad_ref]
axis = "nonexistent_axis"
target_mm = 90.0
"#
    );

    let config: SystemConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_err());
}

/// Test validation fails for invalid velocity percent.
#[test]
fn test_invalid_velocity_percent() {
    let toml_str = format!(
        r#"{BASE_AXIS}
[moves.too_fast]
axis = "x"
target_mm = 90.0
velocity_percent = 250
"#
    );

    let config: SystemConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_err());
}

/// Test validation fails for invalid soft limits (min >= max).
#[test]
fn test_invalid_soft_limits() {
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
min_mm = 90.0
max_mm = -90.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_err());
}

/// Test validation fails for a non-unit homing direction.
#[test]
fn test_invalid_homing_direction() {
    let toml_str = r#"
[axes.x]
name = "x"
steps_per_mm = 80.0
velocity_mm_s = 100.0
acceleration_mm_s2 = 1000.0
homing_velocity_mm_s = 20.0
homing_acceleration_mm_s2 = 200.0
homing_direction = 2
homing_distance_mm = 200.0
homing_bounce_mm = 2.0
homing_sensitivity = 50
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_err());
}

/// Test that an empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}
