//! Error types for linear-axis-motion.
//!
//! Provides unified error handling across configuration, axis control, motion
//! planning, and homing.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all linear-axis-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Axis operation error
    Axis(AxisError),
    /// Homing sequence error
    Homing(HomingError),
    /// Named-move lookup or execution error
    Move(MoveError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<32>),
    /// Named move not found in configuration
    MoveNotFound(heapless::String<32>),
    /// Duplicate axis name in configuration
    DuplicateAxisName(heapless::String<32>),
    /// Duplicate move name in configuration
    DuplicateMoveName(heapless::String<32>),
    /// `steps_per_mm` must be > 0
    InvalidStepsPerMm(f32),
    /// Invalid velocity percent (must be 1-200)
    InvalidVelocityPercent(u8),
    /// Invalid acceleration percent (must be 1-200)
    InvalidAccelerationPercent(u8),
    /// Invalid nominal velocity (must be > 0)
    InvalidVelocity(f32),
    /// Invalid nominal acceleration (must be > 0)
    InvalidAcceleration(f32),
    /// `homing_direction` must be -1 or +1
    InvalidHomingDirection(i8),
    /// Endstop pin is unset (0) while endstop homing was requested
    UnsetEndstopPin,
    /// Invalid soft limits (min must be < max)
    InvalidSoftLimits {
        /// Minimum limit value, in mm
        min: f32,
        /// Maximum limit value, in mm
        max: f32,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Axis operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisError {
    /// Position exceeds soft limits
    LimitExceeded {
        /// Requested position, in steps
        position: i32,
        /// Limit that was exceeded (min or max), in steps
        limit: i32,
    },
}

/// Homing sequence errors.
#[derive(Debug, Clone, PartialEq)]
pub enum HomingError {
    /// A seek phase exhausted its travel limit without the trigger firing.
    Timeout {
        /// Travel limit for the seek phase, in mm
        limit_mm: f32,
    },
}

/// Named-move lookup and configuration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveError {
    /// Move references a non-existent axis
    AxisNotFound {
        /// Move name
        mv: heapless::String<32>,
        /// Referenced axis name
        axis: heapless::String<32>,
    },
    /// Move target exceeds axis limits
    TargetExceedsLimits {
        /// Target position in mm
        target: f32,
        /// Axis's min limit, in mm
        min: f32,
        /// Axis's max limit, in mm
        max: f32,
    },
    /// Invalid move name or lookup failure
    InvalidName(heapless::String<64>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "configuration error: {}", e),
            Error::Axis(e) => write!(f, "axis error: {}", e),
            Error::Homing(e) => write!(f, "homing error: {}", e),
            Error::Move(e) => write!(f, "move error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "parse error: {}", msg),
            ConfigError::AxisNotFound(name) => write!(f, "axis '{}' not found", name),
            ConfigError::MoveNotFound(name) => write!(f, "move '{}' not found", name),
            ConfigError::DuplicateAxisName(name) => write!(f, "duplicate axis name: '{}'", name),
            ConfigError::DuplicateMoveName(name) => write!(f, "duplicate move name: '{}'", name),
            ConfigError::InvalidStepsPerMm(v) => {
                write!(f, "invalid steps_per_mm: {}. Must be > 0", v)
            }
            ConfigError::InvalidVelocityPercent(v) => {
                write!(f, "invalid velocity percent: {}. Must be 1-200", v)
            }
            ConfigError::InvalidAccelerationPercent(v) => {
                write!(f, "invalid acceleration percent: {}. Must be 1-200", v)
            }
            ConfigError::InvalidVelocity(v) => write!(f, "invalid velocity: {}. Must be > 0", v),
            ConfigError::InvalidAcceleration(v) => {
                write!(f, "invalid acceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidHomingDirection(v) => {
                write!(f, "invalid homing_direction: {}. Must be -1 or 1", v)
            }
            ConfigError::UnsetEndstopPin => {
                write!(f, "endstop pin is unset (0) but endstop homing was requested")
            }
            ConfigError::InvalidSoftLimits { min, max } => {
                write!(f, "invalid soft limits: min ({}) must be < max ({})", min, max)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::LimitExceeded { position, limit } => {
                write!(f, "position {} exceeds limit {}", position, limit)
            }
        }
    }
}

impl fmt::Display for HomingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomingError::Timeout { limit_mm } => write!(
                f,
                "homing seek exhausted {} mm of travel without a trigger",
                limit_mm
            ),
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::AxisNotFound { mv, axis } => {
                write!(f, "move '{}' references unknown axis '{}'", mv, axis)
            }
            MoveError::TargetExceedsLimits { target, min, max } => {
                write!(f, "target position {} exceeds limits [{}, {}]", target, min, max)
            }
            MoveError::InvalidName(name) => write!(f, "invalid move name or configuration: {}", name),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<AxisError> for Error {
    fn from(e: AxisError) -> Self {
        Error::Axis(e)
    }
}

impl From<HomingError> for Error {
    fn from(e: HomingError) -> Self {
        Error::Homing(e)
    }
}

impl From<MoveError> for Error {
    fn from(e: MoveError) -> Self {
        Error::Move(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for AxisError {}

#[cfg(feature = "std")]
impl std::error::Error for HomingError {}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
