//! Builder pattern for [`Axis`](super::Axis).

use crate::clock::Clock;
use crate::config::AxisConfig;
use crate::driver::StepperDriver;
use crate::error::{ConfigError, Error, Result};
use crate::motion::Direction;
use crate::report::ReportSink;

use super::{Axis, AxisState};

/// Builder for [`Axis`].
pub struct AxisBuilder<D, C, R>
where
    D: StepperDriver,
    C: Clock,
    R: ReportSink,
{
    name: Option<char>,
    steps_per_mm: Option<f32>,
    velocity_mm_s: Option<f32>,
    acceleration_mm_s2: Option<f32>,
    homing_velocity_mm_s: f32,
    homing_acceleration_mm_s2: f32,
    homing_direction: Direction,
    homing_distance_mm: f32,
    homing_bounce_mm: f32,
    homing_sensitivity: u16,
    endstop: u32,
    stepper: Option<D>,
    stepper2: Option<D>,
    clock: Option<C>,
    report: Option<R>,
}

impl<D, C, R> Default for AxisBuilder<D, C, R>
where
    D: StepperDriver,
    C: Clock,
    R: ReportSink,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D, C, R> AxisBuilder<D, C, R>
where
    D: StepperDriver,
    C: Clock,
    R: ReportSink,
{
    /// Create a new builder with conservative homing defaults.
    pub fn new() -> Self {
        Self {
            name: None,
            steps_per_mm: None,
            velocity_mm_s: None,
            acceleration_mm_s2: None,
            homing_velocity_mm_s: 10.0,
            homing_acceleration_mm_s2: 100.0,
            homing_direction: Direction::Negative,
            homing_distance_mm: 200.0,
            homing_bounce_mm: 2.0,
            homing_sensitivity: 50,
            endstop: 0,
            stepper: None,
            stepper2: None,
            clock: None,
            report: None,
        }
    }

    /// Set the axis's single-character label.
    pub fn name(mut self, name: char) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the mechanical conversion constant, in steps per mm.
    pub fn steps_per_mm(mut self, value: f32) -> Self {
        self.steps_per_mm = Some(value);
        self
    }

    /// Set the nominal cruise velocity, in mm/s.
    pub fn velocity_mm_s(mut self, value: f32) -> Self {
        self.velocity_mm_s = Some(value);
        self
    }

    /// Set the nominal acceleration magnitude, in mm/s².
    pub fn acceleration_mm_s2(mut self, value: f32) -> Self {
        self.acceleration_mm_s2 = Some(value);
        self
    }

    /// Set the homing cruise velocity, in mm/s.
    pub fn homing_velocity_mm_s(mut self, value: f32) -> Self {
        self.homing_velocity_mm_s = value;
        self
    }

    /// Set the homing acceleration magnitude, in mm/s².
    pub fn homing_acceleration_mm_s2(mut self, value: f32) -> Self {
        self.homing_acceleration_mm_s2 = value;
        self
    }

    /// Set the direction the axis travels to seek its home trigger.
    pub fn homing_direction(mut self, direction: Direction) -> Self {
        self.homing_direction = direction;
        self
    }

    /// Set the upper bound on the initial homing seek, in mm.
    pub fn homing_distance_mm(mut self, value: f32) -> Self {
        self.homing_distance_mm = value;
        self
    }

    /// Set the backoff distance between seek and re-seek, in mm.
    pub fn homing_bounce_mm(mut self, value: f32) -> Self {
        self.homing_bounce_mm = value;
        self
    }

    /// Set the stall-detector sensitivity threshold.
    pub fn homing_sensitivity(mut self, value: u16) -> Self {
        self.homing_sensitivity = value;
        self
    }

    /// Set the endstop pin number (0 means unset, for sensorless-only axes).
    pub fn endstop(mut self, pin: u32) -> Self {
        self.endstop = pin;
        self
    }

    /// Set the primary driver.
    pub fn stepper(mut self, stepper: D) -> Self {
        self.stepper = Some(stepper);
        self
    }

    /// Set a secondary driver mechanically slaved to the primary.
    pub fn stepper2(mut self, stepper2: D) -> Self {
        self.stepper2 = Some(stepper2);
        self
    }

    /// Set the clock.
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the report sink.
    pub fn report(mut self, report: R) -> Self {
        self.report = Some(report);
        self
    }

    /// Apply all scalar fields from an [`AxisConfig`], leaving driver,
    /// clock, and report sink to be set separately.
    pub fn from_config(mut self, config: &AxisConfig) -> Self {
        self.name = Some(config.name);
        self.steps_per_mm = Some(config.steps_per_mm);
        self.velocity_mm_s = Some(config.velocity_mm_s);
        self.acceleration_mm_s2 = Some(config.acceleration_mm_s2);
        self.homing_velocity_mm_s = config.homing_velocity_mm_s;
        self.homing_acceleration_mm_s2 = config.homing_acceleration_mm_s2;
        self.homing_direction = if config.homing_direction < 0 {
            Direction::Negative
        } else {
            Direction::Positive
        };
        self.homing_distance_mm = config.homing_distance_mm;
        self.homing_bounce_mm = config.homing_bounce_mm;
        self.homing_sensitivity = config.homing_sensitivity;
        self.endstop = config.endstop.unwrap_or(0);
        self
    }

    /// Build the axis.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field (`name`, `steps_per_mm`,
    /// `velocity_mm_s`, `acceleration_mm_s2`, `stepper`, `clock`, `report`)
    /// was never set.
    pub fn build(self) -> Result<Axis<D, C, R>> {
        let missing = |field: &str| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from(field).unwrap_or_default(),
            ))
        };

        let name = self.name.ok_or_else(|| missing("name is required"))?;
        let steps_per_mm = self
            .steps_per_mm
            .ok_or_else(|| missing("steps_per_mm is required"))?;
        let velocity_mm_s = self
            .velocity_mm_s
            .ok_or_else(|| missing("velocity_mm_s is required"))?;
        let acceleration_mm_s2 = self
            .acceleration_mm_s2
            .ok_or_else(|| missing("acceleration_mm_s2 is required"))?;
        let stepper = self.stepper.ok_or_else(|| missing("stepper is required"))?;
        let clock = self.clock.ok_or_else(|| missing("clock is required"))?;
        let report = self.report.ok_or_else(|| missing("report is required"))?;

        Ok(Axis {
            name,
            steps_per_mm,
            velocity_mm_s,
            acceleration_mm_s2,
            homing_velocity_mm_s: self.homing_velocity_mm_s,
            homing_acceleration_mm_s2: self.homing_acceleration_mm_s2,
            homing_direction: self.homing_direction,
            homing_distance_mm: self.homing_distance_mm,
            homing_bounce_mm: self.homing_bounce_mm,
            homing_sensitivity: self.homing_sensitivity,
            endstop: self.endstop,
            stepper,
            stepper2: self.stepper2,
            clock,
            report,
            state: AxisState::Idle,
        })
    }
}
