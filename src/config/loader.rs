//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
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

        let config = parse_config(toml).unwrap();
        assert!(config.axis("x").is_some());
    }

    #[test]
    fn parse_with_move() {
        let toml = r#"
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
"#;

        let config = parse_config(toml).unwrap();
        assert!(config.move_("home").is_some());
    }

    #[test]
    fn parse_with_soft_limits() {
        let toml = r#"
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
endstop = 7

[axes.x.limits]
min_mm = 0.0
max_mm = 300.0
policy = "reject"
"#;

        let config = parse_config(toml).unwrap();
        let axis = config.axis("x").unwrap();
        assert_eq!(axis.endstop, Some(7));
        assert!(axis.limits.is_some());
    }
}
