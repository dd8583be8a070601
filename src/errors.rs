//! Error types for coordinate construction, conversion and distance calculations

use crate::coordinates::PointKind;
use thiserror::Error;

/// Main error type for the pointfield library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// A scalar input was non-finite or outside its permitted range
    #[error("Invalid argument {name}={value}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: String,
        /// The rejected value
        value: f64,
        /// Why the value was rejected
        reason: String,
    },

    /// No mapping exists between the two point kinds
    #[error("Unsupported conversion from {from} to {to}")]
    UnsupportedConversion {
        /// Kind of the point that was to be converted
        from: PointKind,
        /// Requested target kind
        to: PointKind,
    },

    /// The mapping exists but this particular input is degenerate
    #[error("Conversion failed: {0}")]
    ConversionFailure(String),

    /// A computation produced a non-finite result from valid inputs,
    /// or the canonicalization cache became unusable
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type for coordinate operations
pub type Result<T> = std::result::Result<T, CoordinateError>;

/// Helper to build an [`CoordinateError::InvalidArgument`]
pub(crate) fn invalid_argument(
    name: &str,
    value: f64,
    reason: impl Into<String>,
) -> CoordinateError {
    CoordinateError::InvalidArgument {
        name: name.to_string(),
        value,
        reason: reason.into(),
    }
}
