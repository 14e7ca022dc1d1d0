// ============================================================================
// Conversion Errors
// Error types for symbol mapping and base conversion
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors that abort a single conversion.
///
/// A conversion either returns a complete numeral or one of these; there are
/// no partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Character outside `0-9` / `a-z` (case-insensitive)
    InvalidSymbol(char),
    /// Digit value outside the inclusive range `0..=36`
    InvalidDigitValue(u32),
    /// Digit value inside the range check but without a symbol (36)
    UnmappedDigitValue(u32),
    /// Decimal pivot text is not a plain unsigned decimal number
    InvalidDecimal(String),
    /// Base for which the conversion arithmetic is undefined
    UnsupportedBase(u32),
    /// Numeral with more than one separator, or with no symbols at all
    MalformedNumeral(String),
    /// Symbol whose value is not a digit of the declared base
    DigitOutOfRange { symbol: char, base: u32 },
    /// Base outside `0..=36`
    BaseOutOfRange(i64),
    /// Line that is not `{source base} {target base}`
    InvalidBasePair(String),
    /// Arithmetic failure in the exact decimal layer
    Arithmetic(NumericError),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidSymbol(symbol) => write!(
                f,
                "'{}' is not a valid latin letter/digit",
                symbol.to_ascii_lowercase()
            ),
            ConversionError::InvalidDigitValue(value) => {
                write!(f, "cannot represent {} as a latin character", value)
            },
            ConversionError::UnmappedDigitValue(value) => {
                write!(f, "no latin character is assigned to digit value {}", value)
            },
            ConversionError::InvalidDecimal(text) => {
                write!(f, "'{}' is not a valid decimal number", text)
            },
            ConversionError::UnsupportedBase(base) => {
                write!(f, "base {} cannot be used for this conversion", base)
            },
            ConversionError::MalformedNumeral(text) => write!(f, "malformed numeral '{}'", text),
            ConversionError::DigitOutOfRange { symbol, base } => {
                write!(f, "'{}' is not a digit in base {}", symbol, base)
            },
            ConversionError::BaseOutOfRange(base) => {
                write!(f, "base {} is outside the supported range 0-36", base)
            },
            ConversionError::InvalidBasePair(line) => write!(
                f,
                "expected two numbers in format: {{source base}} {{target base}}, got '{}'",
                line
            ),
            ConversionError::Arithmetic(err) => write!(f, "arithmetic error: {}", err),
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversionError::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for ConversionError {
    fn from(err: NumericError) -> Self {
        ConversionError::Arithmetic(err)
    }
}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
