// ============================================================================
// Numeric Errors
// Error types for exact decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during exact decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero
    DivisionByZero,
    /// Input string is not a plain, unsigned decimal number
    InvalidInput,
    /// Requested precision is zero or above the supported maximum
    InvalidPrecision,
    /// Result scale does not fit in a u32
    ScaleOverflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::InvalidPrecision => {
                write!(f, "invalid precision: must be between 1 and {}", super::MAX_PRECISION)
            },
            NumericError::ScaleOverflow => write!(f, "scale overflow: too many fractional digits"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
