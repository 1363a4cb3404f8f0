//! Named-move configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// A named move: an absolute destination in mm for one axis.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveConfig {
    /// Target axis name (must match an axis in the configuration).
    pub axis: String<32>,

    /// Target position in mm (absolute from origin).
    pub target_mm: f32,

    /// Velocity as a percentage of the axis's nominal velocity (1-200).
    #[serde(default = "default_percent")]
    pub velocity_percent: u8,

    /// Acceleration as a percentage of the axis's nominal acceleration (1-200).
    #[serde(default = "default_percent")]
    pub acceleration_percent: u8,

    /// Optional dwell time at the target, in milliseconds.
    #[serde(default)]
    pub dwell_ms: Option<u32>,
}

fn default_percent() -> u8 {
    100
}

impl MoveConfig {
    /// Effective cruise velocity for this move, given the axis's nominal
    /// velocity.
    pub fn effective_velocity_mm_s(&self, axis_velocity_mm_s: f32) -> f32 {
        axis_velocity_mm_s * (self.velocity_percent as f32 / 100.0)
    }

    /// Effective acceleration magnitude for this move, given the axis's
    /// nominal acceleration.
    pub fn effective_acceleration_mm_s2(&self, axis_acceleration_mm_s2: f32) -> f32 {
        axis_acceleration_mm_s2 * (self.acceleration_percent as f32 / 100.0)
    }
}
