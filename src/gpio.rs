//! GPIO contract for endstop homing.
//!
//! Pins are addressed by number rather than owned as typed pin objects,
//! matching the pin-id-based contract the endstop homing routine was
//! originally written against.

/// Digital I/O bus, addressed by pin number.
pub trait Gpio {
    /// Initialize a pin for use (enable its function, reset its state).
    fn init(&mut self, pin: u32);

    /// Configure a pin as a digital input.
    fn set_input(&mut self, pin: u32);

    /// Enable the pin's internal pull-up resistor.
    fn pull_up(&mut self, pin: u32);

    /// Read the pin. Returns `true` for logic 1, `false` for logic 0.
    fn read(&mut self, pin: u32) -> bool;
}
