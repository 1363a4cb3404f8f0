//! Stall-based (sensorless) homing.

use crate::axis::{Axis, AxisState};
use crate::clock::Clock;
use crate::driver::StepperDriver;
use crate::error::{ConfigError, HomingError, Result};
use crate::report::ReportSink;

impl<D, C, R> Axis<D, C, R>
where
    D: StepperDriver,
    C: Clock,
    R: ReportSink,
{
    /// Home this axis using the driver's sensorless stall detection.
    ///
    /// Seeks toward `homing_direction` until the driver reports a stall,
    /// bounces back off the hard stop, then re-seeks at the same kinematics
    /// over a shorter travel limit for a repeatable trigger position.
    /// Leaves the axis at position 0 on success.
    pub fn sensorless_home(&mut self) -> Result<()> {
        if self.steps_per_mm <= 0.0 {
            return Err(ConfigError::InvalidStepsPerMm(self.steps_per_mm).into());
        }
        // homing_direction is a `Direction` (Positive/Negative); no other
        // value is representable, so there's nothing further to validate.

        let saved_velocity = self.velocity_mm_s;
        let saved_acceleration = self.acceleration_mm_s2;
        self.velocity_mm_s = self.homing_velocity_mm_s;
        self.acceleration_mm_s2 = self.homing_acceleration_mm_s2;

        self.stepper.set_total_steps(0);

        let sign = self.homing_direction.sign() as f32;
        let result = self
            .sensorless_seek(sign * self.homing_distance_mm)
            .and_then(|()| {
                self.bounce_off();
                self.sensorless_seek(sign * 2.0 * self.homing_bounce_mm)
            });

        self.velocity_mm_s = saved_velocity;
        self.acceleration_mm_s2 = saved_acceleration;

        result
    }

    fn sensorless_seek(&mut self, relative_mm: f32) -> Result<()> {
        self.stepper.disable_stallguard();

        let dest_mm = self.position_mm() + relative_mm;
        let movement = self.calculate_move(dest_mm);
        let accel_step_count = movement.accel_step_count;
        self.start_move(movement);

        let mut armed = accel_step_count == 0;
        if armed {
            self.stepper.enable_stallguard(self.homing_sensitivity);
        }

        while self.is_moving() {
            self.timed_step();

            if !armed {
                if let AxisState::Moving { steps_taken, .. } = &self.state {
                    if *steps_taken >= accel_step_count {
                        self.stepper.enable_stallguard(self.homing_sensitivity);
                        armed = true;
                    }
                }
            }

            if armed && self.stepper.stalled() {
                self.stop();
                self.stepper.disable_stallguard();
                self.stepper.set_total_steps(0);
                return Ok(());
            }
        }

        self.stepper.disable_stallguard();
        Err(HomingError::Timeout {
            limit_mm: relative_mm.abs(),
        }
        .into())
    }

    fn bounce_off(&mut self) {
        let sign = -(self.homing_direction.sign() as f32);
        let dest_mm = self.position_mm() + sign * self.homing_bounce_mm;
        let movement = self.calculate_move(dest_mm);
        self.start_move(movement);
        self.wait_for_move();
    }
}
