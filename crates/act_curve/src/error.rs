//! Curve error types

use thiserror::Error;

/// Errors that can occur when building animations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A time span must be finite and strictly increasing
    #[error("invalid time span [{start}, {end}]: start must be before end")]
    InvalidSpan { start: f64, end: f64 },
}

/// Result type for act_curve operations
pub type Result<T> = std::result::Result<T, CurveError>;
