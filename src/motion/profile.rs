//! Trapezoidal motion profile calculation (the "Profiler").

use libm::{ceilf, roundf, sqrtf};

/// Direction of axis motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing step count.
    Positive,
    /// Decreasing step count.
    Negative,
}

impl Direction {
    /// Direction from a signed step delta. By convention `sign(0) == Positive`.
    #[inline]
    pub fn from_delta(delta: i32) -> Self {
        if delta < 0 {
            Direction::Negative
        } else {
            Direction::Positive
        }
    }

    /// The `+1`/`-1` sign multiplier.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }
}

/// A computed trapezoidal move plan.
///
/// Immutable once returned by [`calculate_move`]: the mutable `steps_taken`
/// counter for an in-flight move lives in [`crate::axis::AxisState`], not
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    /// Direction of travel for this move.
    pub direction: Direction,
    /// Steps spent accelerating from rest.
    pub accel_step_count: u32,
    /// Steps spent at constant cruise velocity.
    pub coast_step_count: u32,
    /// Steps spent decelerating to rest.
    pub decel_step_count: u32,
    /// Total steps in the move. Always `accel + coast + decel`.
    pub total_step_count: u32,
}

impl Movement {
    /// The no-op move: zero steps in every phase.
    pub const ZERO: Movement = Movement {
        direction: Direction::Positive,
        accel_step_count: 0,
        coast_step_count: 0,
        decel_step_count: 0,
        total_step_count: 0,
    };

    /// `true` for the no-op move (`total_step_count == 0`).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_step_count == 0
    }
}

/// Convert a destination in mm to a target step count.
///
/// Ceiling-then-round: conservative by construction, the axis never stops
/// short of the requested mm value due to truncation.
fn dest_mm_to_steps(dest_mm: f32, steps_per_mm: f32) -> i32 {
    roundf(ceilf(dest_mm * steps_per_mm)) as i32
}

/// Compute a trapezoidal [`Movement`] plan for a move from `current_total_steps`
/// to `dest_mm`, at the given nominal kinematics.
///
/// This is the Profiler: it never touches a driver or a clock, it only
/// computes the plan. Passing a destination already reached is legal and
/// yields [`Movement::ZERO`].
pub fn calculate_move(
    current_total_steps: i32,
    dest_mm: f32,
    steps_per_mm: f32,
    velocity_mm_s: f32,
    acceleration_mm_s2: f32,
) -> Movement {
    let dest_steps = dest_mm_to_steps(dest_mm, steps_per_mm);
    let delta_steps = dest_steps - current_total_steps;
    let direction = Direction::from_delta(delta_steps);
    let total_step_count = delta_steps.unsigned_abs();

    if total_step_count == 0 {
        return Movement::ZERO;
    }

    // Ideal ramp length: time to reach cruise velocity, and the distance
    // covered while doing so.
    let accel_time_s = velocity_mm_s / acceleration_mm_s2;
    let accel_distance_mm = 0.5 * accel_time_s * velocity_mm_s;
    let mut accel_step_count = roundf(accel_distance_mm * steps_per_mm) as i64;
    let mut decel_step_count = accel_step_count;
    let total = total_step_count as i64;
    let mut coast_step_count = total - accel_step_count - decel_step_count;

    // Short-move correction: the move never reaches cruise velocity.
    if coast_step_count <= 0 {
        accel_step_count = total / 2;
        decel_step_count = total - accel_step_count;
        coast_step_count = 0;
    }

    Movement {
        direction,
        accel_step_count: accel_step_count as u32,
        coast_step_count: coast_step_count as u32,
        decel_step_count: decel_step_count as u32,
        total_step_count,
    }
}

/// Instantaneous velocity (mm/s) at `steps_taken` into `movement`, given the
/// nominal kinematics the move was planned with.
///
/// Used by the axis stepper loop to recompute the next step interval from
/// the actual current position rather than from a precomputed schedule.
pub fn instantaneous_velocity_mm_s(
    movement: &Movement,
    steps_taken: u32,
    steps_per_mm: f32,
    velocity_mm_s: f32,
    acceleration_mm_s2: f32,
) -> f32 {
    if steps_taken < movement.accel_step_count {
        let distance_mm = steps_taken as f32 / steps_per_mm;
        sqrtf(2.0 * distance_mm * acceleration_mm_s2)
    } else if steps_taken < movement.accel_step_count + movement.coast_step_count {
        velocity_mm_s
    } else {
        let total_distance_mm = movement.total_step_count as f32 / steps_per_mm;
        let distance_mm = steps_taken as f32 / steps_per_mm;
        let remaining_mm = total_distance_mm - distance_mm;
        sqrtf(2.0 * remaining_mm * acceleration_mm_s2)
    }
}
