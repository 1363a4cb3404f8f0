//! Endstop-based (limit switch) homing.

use crate::axis::Axis;
use crate::clock::Clock;
use crate::driver::StepperDriver;
use crate::error::{ConfigError, HomingError, Result};
use crate::gpio::Gpio;
use crate::report::ReportSink;

impl<D, C, R> Axis<D, C, R>
where
    D: StepperDriver,
    C: Clock,
    R: ReportSink,
{
    /// Home this axis using a digital limit switch wired to `endstop`.
    ///
    /// Same three-phase seek/bounce/re-seek structure as
    /// [`sensorless_home`](Axis::sensorless_home), but triggers on the
    /// endstop pin instead of a stall flag, and slows the re-seek further
    /// (velocity / 5, acceleration / 2) for a more repeatable trigger.
    pub fn endstop_home<G: Gpio>(&mut self, gpio: &mut G) -> Result<()> {
        if self.endstop == 0 {
            return Err(ConfigError::UnsetEndstopPin.into());
        }
        if self.steps_per_mm <= 0.0 {
            return Err(ConfigError::InvalidStepsPerMm(self.steps_per_mm).into());
        }
        // homing_direction is a `Direction` (Positive/Negative); no other
        // value is representable, so there's nothing further to validate.

        gpio.init(self.endstop);
        gpio.set_input(self.endstop);
        gpio.pull_up(self.endstop);

        let saved_velocity = self.velocity_mm_s;
        let saved_acceleration = self.acceleration_mm_s2;
        self.velocity_mm_s = self.homing_velocity_mm_s;
        self.acceleration_mm_s2 = self.homing_acceleration_mm_s2;

        self.stepper.set_total_steps(0);

        let sign = self.homing_direction.sign() as f32;
        let result = self
            .endstop_seek(gpio, sign * self.homing_distance_mm)
            .and_then(|()| {
                self.bounce_off_endstop();
                self.velocity_mm_s /= 5.0;
                self.acceleration_mm_s2 /= 2.0;
                self.endstop_seek(gpio, sign * 2.0 * self.homing_bounce_mm)
            });

        self.velocity_mm_s = saved_velocity;
        self.acceleration_mm_s2 = saved_acceleration;

        result
    }

    fn endstop_seek<G: Gpio>(&mut self, gpio: &mut G, relative_mm: f32) -> Result<()> {
        let dest_mm = self.position_mm() + relative_mm;
        let movement = self.calculate_move(dest_mm);
        self.start_move(movement);

        while self.is_moving() {
            self.timed_step();

            if gpio.read(self.endstop) {
                self.stop();
                self.stepper.set_total_steps(0);
                return Ok(());
            }
        }

        Err(HomingError::Timeout {
            limit_mm: relative_mm.abs(),
        }
        .into())
    }

    fn bounce_off_endstop(&mut self) {
        let sign = -(self.homing_direction.sign() as f32);
        let dest_mm = self.position_mm() + sign * self.homing_bounce_mm;
        let movement = self.calculate_move(dest_mm);
        self.start_move(movement);
        self.wait_for_move();
    }
}
