// ============================================================================
// Numeral
// Textual number in some base: `[integer]` or `[integer].[fraction]`
// ============================================================================

use crate::engine::{symbol_to_value, ConversionError, ConversionResult};

/// Separator between the integer and fractional parts.
pub const SEPARATOR: char = '.';

/// A numeral split into its integer and (optional) fractional parts.
///
/// Splitting only checks the shape of the text. Symbols are checked against
/// a base by [`Numeral::validate_for_base`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral<'a> {
    integer: &'a str,
    fraction: Option<&'a str>,
}

impl<'a> Numeral<'a> {
    /// Split `text` on the separator.
    ///
    /// # Errors
    /// Returns `MalformedNumeral` if the text contains more than one separator.
    pub fn split(text: &'a str) -> ConversionResult<Self> {
        match text.split_once(SEPARATOR) {
            None => Ok(Self {
                integer: text,
                fraction: None,
            }),
            Some((_, fraction)) if fraction.contains(SEPARATOR) => {
                Err(ConversionError::MalformedNumeral(text.to_string()))
            },
            Some((integer, fraction)) => Ok(Self {
                integer,
                fraction: Some(fraction),
            }),
        }
    }

    /// Symbols before the separator.
    #[inline]
    pub fn integer_part(&self) -> &'a str {
        self.integer
    }

    /// Symbols after the separator, if a separator is present.
    #[inline]
    pub fn fraction_part(&self) -> Option<&'a str> {
        self.fraction
    }

    /// Check that the numeral is non-empty and every symbol is a digit of `base`.
    pub fn validate_for_base(&self, base: u32) -> ConversionResult<()> {
        let fraction = self.fraction.unwrap_or("");
        if self.integer.is_empty() && fraction.is_empty() {
            return Err(ConversionError::MalformedNumeral(self.to_string()));
        }

        for symbol in self.integer.chars().chain(fraction.chars()) {
            if symbol_to_value(symbol)? >= base {
                return Err(ConversionError::DigitOutOfRange { symbol, base });
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for Numeral<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.fraction {
            Some(fraction) => write!(f, "{}{}{}", self.integer, SEPARATOR, fraction),
            None => write!(f, "{}", self.integer),
        }
    }
}
