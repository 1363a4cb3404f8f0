//! Stepper driver contract.
//!
//! The motion core never talks to silicon directly: it drives a
//! [`StepperDriver`] implementation, which is responsible for turning a
//! direction and a step request into pulses on real (or simulated) pins.

mod hal;

pub use hal::HalStepperDriver;

use crate::motion::Direction;

/// A single-axis stepper driver: pulse generation, direction latch, and
/// (optionally) sensorless stall detection.
///
/// `total_steps` is the driver's own signed step counter. The Axis treats it
/// as authoritative for position and re-zeroes it at the start of homing;
/// the driver itself never resets it on its own.
pub trait StepperDriver {
    /// Current signed step count.
    fn total_steps(&self) -> i32;

    /// Overwrite the step counter (used to re-zero after homing).
    fn set_total_steps(&mut self, steps: i32);

    /// Latch the direction pin. Implementations should avoid redundant pin
    /// writes when the direction hasn't changed.
    fn set_direction(&mut self, direction: Direction);

    /// Emit one step pulse and advance `total_steps` by the latched
    /// direction's sign.
    fn step(&mut self);

    /// Emit one step pulse on both `self` and `other`.
    ///
    /// The default implementation steps them sequentially, which is
    /// sufficient for most configurations; a driver backed by real hardware
    /// that can toggle two STEP pins in the same instruction should
    /// override this to emit genuinely synchronous edges.
    fn step_two(&mut self, other: &mut Self)
    where
        Self: Sized,
    {
        self.step();
        other.step();
    }

    /// Arm sensorless stall detection at the given sensitivity.
    fn enable_stallguard(&mut self, sensitivity: u16);

    /// Disarm sensorless stall detection.
    fn disable_stallguard(&mut self);

    /// Read the stall flag. Meaningless while stall detection is disarmed.
    fn stalled(&self) -> bool;
}
