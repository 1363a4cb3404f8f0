//! Per-axis configuration.

use serde::Deserialize;

use super::limits::SoftLimits;

/// TOML-deserializable configuration for one axis.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Single-character label, used in logging.
    pub name: char,

    /// Mechanical conversion constant, in steps per mm.
    pub steps_per_mm: f32,

    /// Nominal cruise velocity for normal moves, in mm/s.
    pub velocity_mm_s: f32,

    /// Nominal constant acceleration magnitude for normal moves, in mm/s².
    pub acceleration_mm_s2: f32,

    /// Cruise velocity during homing, in mm/s.
    pub homing_velocity_mm_s: f32,

    /// Acceleration magnitude during homing, in mm/s².
    pub homing_acceleration_mm_s2: f32,

    /// Direction the axis travels to seek its home trigger (-1 or +1).
    pub homing_direction: i8,

    /// Upper bound on the initial homing seek, in mm.
    pub homing_distance_mm: f32,

    /// Backoff distance between seek and re-seek, in mm.
    pub homing_bounce_mm: f32,

    /// Stall-detector sensitivity threshold (sensorless homing).
    pub homing_sensitivity: u16,

    /// Endstop pin number, if this axis supports endstop homing.
    #[serde(default)]
    pub endstop: Option<u32>,

    /// Whether the direction pin's logic sense is inverted.
    #[serde(default)]
    pub invert_direction: bool,

    /// Soft position limits, if any.
    #[serde(default)]
    pub limits: Option<SoftLimits>,
}
