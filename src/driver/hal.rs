//! `embedded-hal` 1.0 backed [`StepperDriver`](super::StepperDriver).
//!
//! Bridges a STEP/DIR pin pair and a delay provider to the driver contract.
//! Real stall detection (e.g. reading a TMC2209's StallGuard register over
//! UART) is hardware-specific and out of scope here; `enable_stallguard`
//! only arms a software flag that a caller can drive via [`set_stalled`](HalStepperDriver::set_stalled)
//! for hardware that exposes stall as a plain GPIO diagnostic pin.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::StepperDriver;
use crate::motion::Direction;

/// Stepper driver over a STEP/DIR pin pair.
pub struct HalStepperDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    step_pin: STEP,
    dir_pin: DIR,
    delay: DELAY,
    total_steps: i32,
    current_direction: Option<Direction>,
    invert_direction: bool,
    stallguard_armed: bool,
    stalled: bool,
}

impl<STEP, DIR, DELAY> HalStepperDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Build a driver over the given pins, starting at step zero.
    pub fn new(step_pin: STEP, dir_pin: DIR, delay: DELAY, invert_direction: bool) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            total_steps: 0,
            current_direction: None,
            invert_direction,
            stallguard_armed: false,
            stalled: false,
        }
    }

    /// Inject a stall condition. Only observed by [`StepperDriver::stalled`]
    /// while stall detection is armed, mirroring real StallGuard behavior.
    pub fn set_stalled(&mut self, stalled: bool) {
        self.stalled = stalled;
    }
}

impl<STEP, DIR, DELAY> StepperDriver for HalStepperDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn total_steps(&self) -> i32 {
        self.total_steps
    }

    fn set_total_steps(&mut self, steps: i32) {
        self.total_steps = steps;
    }

    fn set_direction(&mut self, direction: Direction) {
        if self.current_direction == Some(direction) {
            return;
        }

        let pin_high = match direction {
            Direction::Positive => !self.invert_direction,
            Direction::Negative => self.invert_direction,
        };

        let _ = if pin_high {
            self.dir_pin.set_high()
        } else {
            self.dir_pin.set_low()
        };

        self.current_direction = Some(direction);
    }

    fn step(&mut self) {
        let _ = self.step_pin.set_high();
        self.delay.delay_us(2);
        let _ = self.step_pin.set_low();

        let sign = self.current_direction.unwrap_or(Direction::Positive).sign();
        self.total_steps += sign;
    }

    fn enable_stallguard(&mut self, _sensitivity: u16) {
        self.stallguard_armed = true;
        self.stalled = false;
    }

    fn disable_stallguard(&mut self) {
        self.stallguard_armed = false;
    }

    fn stalled(&self) -> bool {
        self.stallguard_armed && self.stalled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State as PinState, Transaction};

    #[test]
    fn step_advances_counter_by_direction_sign() {
        let step_expectations = [
            Transaction::set(PinState::High),
            Transaction::set(PinState::Low),
        ];
        let dir_expectations = [Transaction::set(PinState::High)];

        let step_pin = PinMock::new(&step_expectations);
        let dir_pin = PinMock::new(&dir_expectations);
        let delay = NoopDelay::new();

        let mut driver = HalStepperDriver::new(step_pin, dir_pin, delay, false);
        driver.set_direction(Direction::Positive);
        driver.step();

        assert_eq!(driver.total_steps(), 1);

        driver.step_pin.done();
        driver.dir_pin.done();
    }

    #[test]
    fn stall_flag_ignored_while_disarmed() {
        let step_pin = PinMock::new(&[]);
        let dir_pin = PinMock::new(&[]);
        let delay = NoopDelay::new();

        let mut driver = HalStepperDriver::new(step_pin, dir_pin, delay, false);
        driver.set_stalled(true);
        assert!(!driver.stalled());

        driver.enable_stallguard(50);
        assert!(driver.stalled());

        driver.disable_stallguard();
        assert!(!driver.stalled());
    }
}
