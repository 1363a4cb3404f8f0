//! Soft limit configuration and types.

use serde::Deserialize;

/// Policy for handling limit violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitPolicy {
    /// Reject moves that would exceed limits.
    #[default]
    Reject,
    /// Clamp target to nearest limit.
    Clamp,
}

/// Soft limits in mm (from configuration).
#[derive(Debug, Clone, Deserialize)]
pub struct SoftLimits {
    /// Minimum allowed position, in mm.
    pub min_mm: f32,

    /// Maximum allowed position, in mm.
    pub max_mm: f32,

    /// What to do when a target exceeds limits.
    #[serde(default)]
    pub policy: LimitPolicy,
}

impl SoftLimits {
    /// Create new soft limits.
    pub fn new(min_mm: f32, max_mm: f32, policy: LimitPolicy) -> Self {
        Self {
            min_mm,
            max_mm,
            policy,
        }
    }

    /// Check if limits are valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min_mm < self.max_mm
    }

    /// Check if a position is within limits.
    pub fn contains(&self, position_mm: f32) -> bool {
        position_mm >= self.min_mm && position_mm <= self.max_mm
    }

    /// Apply limit policy to a target position.
    ///
    /// Returns `Some(position)` if valid or clamped, `None` if rejected.
    pub fn apply(&self, target_mm: f32) -> Option<f32> {
        if self.contains(target_mm) {
            Some(target_mm)
        } else {
            match self.policy {
                LimitPolicy::Reject => None,
                LimitPolicy::Clamp => {
                    if target_mm < self.min_mm {
                        Some(self.min_mm)
                    } else {
                        Some(self.max_mm)
                    }
                }
            }
        }
    }
}
