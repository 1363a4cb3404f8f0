//! A single translational axis: kinematics, stepper loop, and homing.
//!
//! Homing is implemented as additional inherent methods on [`Axis`], split
//! across [`crate::homing::sensorless`] and [`crate::homing::endstop`] so
//! each variant's three-phase logic stays in one file.

mod builder;

pub use builder::AxisBuilder;

use libm::{ceilf, roundf};

use crate::clock::Clock;
use crate::driver::StepperDriver;
use crate::error::{AxisError, Result};
use crate::motion::{calculate_move, instantaneous_velocity_mm_s, Direction, Movement};
use crate::report::ReportSink;

/// Bootstrap interval for the first pulse of a move, in microseconds.
const BOOTSTRAP_INTERVAL_US: u32 = 100;

/// Upper clamp on the inter-step interval, in microseconds.
const MAX_INTERVAL_US: u32 = 5000;

/// Substitute interval used when the kinematic velocity is zero.
const ZERO_VELOCITY_INTERVAL_US: u32 = 1000;

/// Progress log cadence during `wait_for_move`, in microseconds.
const PROGRESS_LOG_INTERVAL_US: u64 = 1_000_000;

/// State of an [`Axis`]: either idle, or mid-move with its live progress.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AxisState {
    Idle,
    Moving {
        movement: Movement,
        steps_taken: u32,
        step_interval_us: u32,
        next_step_at: u64,
        /// Kinematics this particular move was planned with — captured at
        /// `start_move` time rather than read from the axis's nominal
        /// fields, so a scaled named move keeps its own velocity profile
        /// even after the axis's nominal fields are restored mid-flight.
        velocity_mm_s: f32,
        acceleration_mm_s2: f32,
    },
}

/// A single translational axis driven by one (or two slaved) stepper
/// drivers, against a monotonic clock and a report sink.
pub struct Axis<D, C, R>
where
    D: StepperDriver,
    C: Clock,
    R: ReportSink,
{
    name: char,
    pub(crate) steps_per_mm: f32,
    pub(crate) velocity_mm_s: f32,
    pub(crate) acceleration_mm_s2: f32,
    pub(crate) homing_velocity_mm_s: f32,
    pub(crate) homing_acceleration_mm_s2: f32,
    pub(crate) homing_direction: Direction,
    pub(crate) homing_distance_mm: f32,
    pub(crate) homing_bounce_mm: f32,
    pub(crate) homing_sensitivity: u16,
    pub(crate) endstop: u32,
    pub(crate) stepper: D,
    pub(crate) stepper2: Option<D>,
    pub(crate) clock: C,
    pub(crate) report: R,
    pub(crate) state: AxisState,
}

impl<D, C, R> Axis<D, C, R>
where
    D: StepperDriver,
    C: Clock,
    R: ReportSink,
{
    /// Start building an axis.
    pub fn builder() -> AxisBuilder<D, C, R> {
        AxisBuilder::new()
    }

    /// The axis's single-character label.
    #[inline]
    pub fn name(&self) -> char {
        self.name
    }

    /// Current position, derived from the primary driver's step counter.
    #[inline]
    pub fn position_mm(&self) -> f32 {
        self.stepper.total_steps() as f32 / self.steps_per_mm
    }

    /// Overwrite the current position without moving the axis.
    ///
    /// Uses the same ceil-then-round-to-nearest-even conversion as move
    /// planning, so `set_position_mm(x)` followed by `position_mm()` round-trips
    /// for any `x` that lands exactly on a step boundary.
    pub fn set_position_mm(&mut self, mm: f32) {
        let steps = roundf(ceilf(mm * self.steps_per_mm)) as i32;
        self.stepper.set_total_steps(steps);
    }

    /// `true` iff the axis is mid-move.
    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self.state, AxisState::Moving { .. })
    }

    /// Compute a [`Movement`] plan to an absolute destination in mm, using
    /// this axis's nominal kinematics. Does not move the axis.
    pub fn calculate_move(&self, dest_mm: f32) -> Movement {
        calculate_move(
            self.stepper.total_steps(),
            dest_mm,
            self.steps_per_mm,
            self.velocity_mm_s,
            self.acceleration_mm_s2,
        )
    }

    /// Install `movement` and transition `Idle -> Moving`. A zero-length
    /// movement leaves the axis idle.
    pub fn start_move(&mut self, movement: Movement) {
        if movement.is_zero() {
            return;
        }

        self.stepper.set_direction(movement.direction);
        if let Some(stepper2) = self.stepper2.as_mut() {
            stepper2.set_direction(movement.direction);
        }

        let now = self.clock.now_us();
        self.state = AxisState::Moving {
            movement,
            steps_taken: 0,
            step_interval_us: BOOTSTRAP_INTERVAL_US,
            next_step_at: now + BOOTSTRAP_INTERVAL_US as u64,
            velocity_mm_s: self.velocity_mm_s,
            acceleration_mm_s2: self.acceleration_mm_s2,
        };
    }

    /// Plan and start a move to an absolute destination in mm, honoring
    /// soft limits if `limits` is provided.
    pub fn move_to(&mut self, dest_mm: f32, limits: Option<(f32, f32)>) -> Result<()> {
        if let Some((min_mm, max_mm)) = limits {
            if dest_mm < min_mm || dest_mm > max_mm {
                let limit_mm = if dest_mm < min_mm { min_mm } else { max_mm };
                return Err(AxisError::LimitExceeded {
                    position: roundf(dest_mm * self.steps_per_mm) as i32,
                    limit: roundf(limit_mm * self.steps_per_mm) as i32,
                }
                .into());
            }
        }

        let movement = self.calculate_move(dest_mm);
        self.start_move(movement);
        Ok(())
    }

    /// Plan and start a move to `dest_mm` at a velocity/acceleration scaled
    /// by the given percentages of this axis's nominal kinematics (as used
    /// by named moves with `velocity_percent`/`acceleration_percent`
    /// overrides).
    pub fn move_to_scaled(
        &mut self,
        dest_mm: f32,
        velocity_percent: u8,
        acceleration_percent: u8,
        limits: Option<(f32, f32)>,
    ) -> Result<()> {
        if let Some((min_mm, max_mm)) = limits {
            if dest_mm < min_mm || dest_mm > max_mm {
                let limit_mm = if dest_mm < min_mm { min_mm } else { max_mm };
                return Err(AxisError::LimitExceeded {
                    position: roundf(dest_mm * self.steps_per_mm) as i32,
                    limit: roundf(limit_mm * self.steps_per_mm) as i32,
                }
                .into());
            }
        }

        let velocity_mm_s = self.velocity_mm_s * (velocity_percent as f32 / 100.0);
        let acceleration_mm_s2 = self.acceleration_mm_s2 * (acceleration_percent as f32 / 100.0);

        let movement = calculate_move(
            self.stepper.total_steps(),
            dest_mm,
            self.steps_per_mm,
            velocity_mm_s,
            acceleration_mm_s2,
        );

        let (saved_velocity, saved_acceleration) = (self.velocity_mm_s, self.acceleration_mm_s2);
        self.velocity_mm_s = velocity_mm_s;
        self.acceleration_mm_s2 = acceleration_mm_s2;
        self.start_move(movement);
        self.velocity_mm_s = saved_velocity;
        self.acceleration_mm_s2 = saved_acceleration;

        Ok(())
    }

    /// Cooperative tick. Returns `true` iff a step was emitted this call.
    pub fn timed_step(&mut self) -> bool {
        let now = self.clock.now_us();

        let (movement, steps_taken, next_step_at, velocity_mm_s, acceleration_mm_s2) =
            match &self.state {
                AxisState::Idle => return false,
                AxisState::Moving {
                    movement,
                    steps_taken,
                    next_step_at,
                    velocity_mm_s,
                    acceleration_mm_s2,
                    ..
                } => (
                    *movement,
                    *steps_taken,
                    *next_step_at,
                    *velocity_mm_s,
                    *acceleration_mm_s2,
                ),
            };

        if now < next_step_at {
            return false;
        }

        self.direct_step();

        if let AxisState::Moving { .. } = self.state {
            let interval_us = self.next_interval_us(
                &movement,
                steps_taken + 1,
                velocity_mm_s,
                acceleration_mm_s2,
            );
            if let AxisState::Moving {
                step_interval_us,
                next_step_at,
                ..
            } = &mut self.state
            {
                *step_interval_us = interval_us;
                *next_step_at = now + interval_us as u64;
            }
        }

        true
    }

    /// Emit one step pulse on the driver(s) and advance progress. No-op if
    /// idle.
    fn direct_step(&mut self) {
        let (total_step_count, new_steps_taken) = match &self.state {
            AxisState::Idle => return,
            AxisState::Moving {
                movement,
                steps_taken,
                ..
            } => (movement.total_step_count, steps_taken + 1),
        };

        if let Some(stepper2) = self.stepper2.as_mut() {
            self.stepper.step_two(stepper2);
        } else {
            self.stepper.step();
        }

        if new_steps_taken >= total_step_count {
            self.state = AxisState::Idle;
        } else if let AxisState::Moving { steps_taken, .. } = &mut self.state {
            *steps_taken = new_steps_taken;
        }
    }

    /// Unconditionally return to `Idle`. Position is unaffected.
    pub fn stop(&mut self) {
        self.state = AxisState::Idle;
    }

    /// Drive `timed_step` until the move completes, logging progress at
    /// most once per second.
    pub fn wait_for_move(&mut self) {
        let mut last_log = self.clock.now_us();
        while self.is_moving() {
            self.timed_step();

            let now = self.clock.now_us();
            if now.saturating_sub(last_log) >= PROGRESS_LOG_INTERVAL_US {
                if let AxisState::Moving {
                    steps_taken,
                    movement,
                    ..
                } = &self.state
                {
                    crate::report_info!(
                        self.report,
                        "axis {}: {}/{} steps",
                        self.name,
                        steps_taken,
                        movement.total_step_count
                    );
                }
                last_log = now;
            }
        }
    }

    fn next_interval_us(
        &self,
        movement: &Movement,
        steps_taken: u32,
        velocity_mm_s: f32,
        acceleration_mm_s2: f32,
    ) -> u32 {
        let instantaneous_velocity_mm_s = instantaneous_velocity_mm_s(
            movement,
            steps_taken,
            self.steps_per_mm,
            velocity_mm_s,
            acceleration_mm_s2,
        );

        if instantaneous_velocity_mm_s <= 0.0 {
            return ZERO_VELOCITY_INTERVAL_US;
        }

        let interval =
            roundf(1_000_000.0 / (instantaneous_velocity_mm_s * self.steps_per_mm)) as u32;
        interval.min(MAX_INTERVAL_US)
    }
}
