//! Error types for face configuration and expression parsing
//!
//! Runtime face operations are total; only building a face from
//! configuration or parsing an expression name can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Display dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("Frame rate must be non-zero")]
    ZeroFrameRate,

    #[error("Gaze envelope fraction {0} outside (0, 0.5]")]
    EnvelopeOutOfRange(f64),

    #[error("Wander speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("Saccade hold range invalid: min {min}s, max {max}s, frame {frame}s")]
    HoldRange { min: f64, max: f64, frame: f64 },

    #[error("Tick cap must be a positive number of frames, got {0}")]
    InvalidTickCap(f64),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Returned when a string names no expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown expression: {0}")]
pub struct UnknownExpression(pub String);
