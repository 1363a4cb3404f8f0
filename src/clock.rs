//! Monotonic clock contract.
//!
//! The stepper loop is polled rather than put to sleep, so the core only
//! needs a free-running microsecond counter, not a delay provider.

/// A monotonic, free-running microsecond clock.
///
/// Implementations must never go backwards and must wrap only on `u64`
/// overflow (not a concern on any realistic mission duration).
pub trait Clock {
    /// Read the current time, in microseconds since an arbitrary epoch.
    fn now_us(&self) -> u64;
}

/// `std`-backed clock using [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a new clock, with its epoch at the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_us(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }
}
