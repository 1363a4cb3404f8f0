//! # linear-axis-motion
//!
//! Configuration-driven trapezoidal motion core for a single linear axis,
//! with sensorless (stall-based) and endstop (limit-switch) homing.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define axes and named moves in TOML files
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR, `DelayNs` for timing
//! - **no_std compatible**: Core library works without the standard library
//! - **Self-correcting step timing**: Each inter-step interval is recomputed
//!   from the axis's instantaneous kinematic velocity rather than a fixed
//!   lookup table, so timing jitter doesn't accumulate into position error
//! - **Position tracking**: Absolute position tracked in the driver's step
//!   counter at all times
//! - **Two homing strategies**: stall-detection (sensorless) and
//!   limit-switch (endstop), both seek/bounce/re-seek
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linear_axis_motion::{Axis, load_config};
//!
//! // Load configuration from TOML.
//! let config = load_config("motion.toml")?;
//! let axis_config = config.axis("x").expect("x axis configured");
//!
//! // Build an axis from config, wiring in real pins, a clock, and a sink.
//! let mut axis = Axis::builder()
//!     .from_config(axis_config)
//!     .stepper(HalStepperDriver::new(step_pin, dir_pin, delay))
//!     .clock(StdClock::new())
//!     .report(StdoutSink)
//!     .build()?;
//!
//! // Run a named move.
//! let mv = config.move_("home").expect("home move configured");
//! axis.move_to_scaled(mv.target_mm, mv.velocity_percent, mv.acceleration_percent, None)?;
//! axis.wait_for_move();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod axis;
pub mod clock;
pub mod config;
pub mod driver;
pub mod error;
pub mod gpio;
pub mod homing;
pub mod motion;
pub mod moves;
pub mod report;

// Re-exports for ergonomic API
pub use axis::{Axis, AxisBuilder};
pub use clock::Clock;
pub use config::{validate_config, AxisConfig, MoveConfig, SystemConfig};
pub use driver::{HalStepperDriver, StepperDriver};
pub use error::{Error, Result};
pub use gpio::Gpio;
pub use motion::{calculate_move, Direction, Movement};
pub use moves::MoveRegistry;
pub use report::ReportSink;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;
