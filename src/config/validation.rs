//! Configuration validation.

use crate::error::{ConfigError, Error, MoveError, Result};

use super::{AxisConfig, MoveConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Axis configurations are valid (positive kinematics, valid homing
///   direction, valid soft limits)
/// - Moves reference existing axes
/// - Velocity/acceleration percentages are in range
/// - Move targets fall within soft limits, when the policy is `Reject`
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, axis) in config.axes.iter() {
        validate_axis(axis)?;
    }

    for (name, mv) in config.moves.iter() {
        validate_move(name.as_str(), mv, config)?;
    }

    Ok(())
}

fn validate_axis(config: &AxisConfig) -> Result<()> {
    if config.steps_per_mm <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerMm(
            config.steps_per_mm,
        )));
    }

    if config.velocity_mm_s <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidVelocity(
            config.velocity_mm_s,
        )));
    }

    if config.acceleration_mm_s2 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidAcceleration(
            config.acceleration_mm_s2,
        )));
    }

    if config.homing_direction != -1 && config.homing_direction != 1 {
        return Err(Error::Config(ConfigError::InvalidHomingDirection(
            config.homing_direction,
        )));
    }

    if let Some(ref limits) = config.limits {
        if !limits.is_valid() {
            return Err(Error::Config(ConfigError::InvalidSoftLimits {
                min: limits.min_mm,
                max: limits.max_mm,
            }));
        }
    }

    Ok(())
}

fn validate_move(name: &str, mv: &MoveConfig, config: &SystemConfig) -> Result<()> {
    let axis = config.axis(mv.axis.as_str()).ok_or_else(|| {
        Error::Config(ConfigError::AxisNotFound(
            heapless::String::try_from(mv.axis.as_str()).unwrap_or_default(),
        ))
    })?;

    if mv.velocity_percent == 0 || mv.velocity_percent > 200 {
        return Err(Error::Config(ConfigError::InvalidVelocityPercent(
            mv.velocity_percent,
        )));
    }

    if mv.acceleration_percent == 0 || mv.acceleration_percent > 200 {
        return Err(Error::Config(ConfigError::InvalidAccelerationPercent(
            mv.acceleration_percent,
        )));
    }

    if let Some(ref limits) = axis.limits {
        if limits.policy == super::LimitPolicy::Reject && limits.apply(mv.target_mm).is_none() {
            return Err(Error::Move(MoveError::TargetExceedsLimits {
                target: mv.target_mm,
                min: limits.min_mm,
                max: limits.max_mm,
            }));
        }
    }

    let _ = name;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::limits::{LimitPolicy, SoftLimits};

    fn make_axis(overrides: impl FnOnce(&mut AxisConfig)) -> AxisConfig {
        let mut axis = AxisConfig {
            name: 'x',
            steps_per_mm: 80.0,
            velocity_mm_s: 100.0,
            acceleration_mm_s2: 1000.0,
            homing_velocity_mm_s: 20.0,
            homing_acceleration_mm_s2: 200.0,
            homing_direction: -1,
            homing_distance_mm: 200.0,
            homing_bounce_mm: 2.0,
            homing_sensitivity: 50,
            endstop: None,
            invert_direction: false,
            limits: None,
        };
        overrides(&mut axis);
        axis
    }

    #[test]
    fn rejects_non_positive_steps_per_mm() {
        let axis = make_axis(|a| a.steps_per_mm = 0.0);
        assert!(matches!(
            validate_axis(&axis),
            Err(Error::Config(ConfigError::InvalidStepsPerMm(_)))
        ));
    }

    #[test]
    fn rejects_invalid_homing_direction() {
        let axis = make_axis(|a| a.homing_direction = 0);
        assert!(matches!(
            validate_axis(&axis),
            Err(Error::Config(ConfigError::InvalidHomingDirection(_)))
        ));
    }

    #[test]
    fn rejects_inverted_soft_limits() {
        let axis = make_axis(|a| {
            a.limits = Some(SoftLimits::new(100.0, -100.0, LimitPolicy::Reject));
        });
        assert!(matches!(
            validate_axis(&axis),
            Err(Error::Config(ConfigError::InvalidSoftLimits { .. }))
        ));
    }

    #[test]
    fn rejects_move_referencing_unknown_axis() {
        let axis = make_axis(|_| {});
        let mut axes = heapless::FnvIndexMap::new();
        axes.insert(heapless::String::try_from("x").unwrap(), axis).unwrap();
        let config = SystemConfig {
            axes,
            moves: heapless::FnvIndexMap::new(),
        };

        let mv = MoveConfig {
            axis: heapless::String::try_from("y").unwrap(),
            target_mm: 10.0,
            velocity_percent: 100,
            acceleration_percent: 100,
            dwell_ms: None,
        };

        assert!(matches!(
            validate_move("bad", &mv, &config),
            Err(Error::Config(ConfigError::AxisNotFound(_)))
        ));
    }

    #[test]
    fn rejects_move_target_outside_reject_limits() {
        let axis = make_axis(|a| {
            a.limits = Some(SoftLimits::new(0.0, 50.0, LimitPolicy::Reject));
        });
        let mut axes = heapless::FnvIndexMap::new();
        axes.insert(heapless::String::try_from("x").unwrap(), axis).unwrap();
        let config = SystemConfig {
            axes,
            moves: heapless::FnvIndexMap::new(),
        };

        let mv = MoveConfig {
            axis: heapless::String::try_from("x").unwrap(),
            target_mm: 100.0,
            velocity_percent: 100,
            acceleration_percent: 100,
            dwell_ms: None,
        };

        assert!(matches!(
            validate_move("bad", &mv, &config),
            Err(Error::Move(MoveError::TargetExceedsLimits { .. }))
        ));
    }
}
