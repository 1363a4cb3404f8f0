//! Configuration module for linear-axis-motion.
//!
//! Provides types for loading and validating axis and named-move
//! configurations from TOML files (with the `std` feature) or pre-parsed
//! data.

mod axis;
mod limits;
mod move_config;
mod system;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::AxisConfig;
pub use limits::{LimitPolicy, SoftLimits};
pub use move_config::MoveConfig;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
