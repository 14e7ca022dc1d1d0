// ============================================================================
// Symbol Mapper
// Bijection between digit values 0-35 and the symbols 0-9, a-z
// ============================================================================

use super::errors::{ConversionError, ConversionResult};

/// Canonical symbol for every digit value, indexed by value.
const SYMBOLS: [u8; 36] = *b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Marker for ASCII characters that are not symbols.
const NO_VALUE: u8 = u8::MAX;

/// Digit value for every ASCII character (both letter cases).
const VALUES: [u8; 128] = build_value_table();

/// Largest value accepted by the range check of [`value_to_symbol`].
///
/// The bound is inclusive, so 36 passes the check even though no symbol is
/// assigned to it; encoding 36 fails with `UnmappedDigitValue` instead.
pub const MAX_DIGIT_VALUE: u32 = 36;

/// Build the reverse lookup table at compile time
const fn build_value_table() -> [u8; 128] {
    let mut table = [NO_VALUE; 128];
    let mut value = 0;
    while value < SYMBOLS.len() {
        let symbol = SYMBOLS[value];
        table[symbol as usize] = value as u8;
        table[symbol.to_ascii_uppercase() as usize] = value as u8;
        value += 1;
    }
    table
}

/// Map a digit value to its canonical (lowercase) symbol.
///
/// # Errors
/// - `InvalidDigitValue` if `value` is greater than [`MAX_DIGIT_VALUE`]
/// - `UnmappedDigitValue` for 36, which passes the range check but has no symbol
///
/// # Example
/// ```
/// use radix_converter::engine::value_to_symbol;
///
/// assert_eq!(value_to_symbol(7).unwrap(), '7');
/// assert_eq!(value_to_symbol(35).unwrap(), 'z');
/// assert!(value_to_symbol(36).is_err());
/// ```
pub fn value_to_symbol(value: u32) -> ConversionResult<char> {
    if value > MAX_DIGIT_VALUE {
        return Err(ConversionError::InvalidDigitValue(value));
    }

    SYMBOLS
        .get(value as usize)
        .map(|&symbol| char::from(symbol))
        .ok_or(ConversionError::UnmappedDigitValue(value))
}

/// Map a symbol (case-insensitive) to its digit value.
///
/// # Errors
/// Returns `InvalidSymbol` for anything other than an ASCII digit or letter.
///
/// # Example
/// ```
/// use radix_converter::engine::symbol_to_value;
///
/// assert_eq!(symbol_to_value('f').unwrap(), 15);
/// assert_eq!(symbol_to_value('F').unwrap(), 15);
/// assert!(symbol_to_value('-').is_err());
/// ```
pub fn symbol_to_value(symbol: char) -> ConversionResult<u32> {
    let value = if symbol.is_ascii() {
        VALUES[symbol as usize]
    } else {
        NO_VALUE
    };

    if value == NO_VALUE {
        Err(ConversionError::InvalidSymbol(symbol))
    } else {
        Ok(u32::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_letters() {
        assert_eq!(value_to_symbol(0), Ok('0'));
        assert_eq!(value_to_symbol(9), Ok('9'));
        assert_eq!(value_to_symbol(10), Ok('a'));
        assert_eq!(value_to_symbol(35), Ok('z'));

        assert_eq!(symbol_to_value('0'), Ok(0));
        assert_eq!(symbol_to_value('a'), Ok(10));
        assert_eq!(symbol_to_value('Z'), Ok(35));
    }

    #[test]
    fn test_bijection_over_all_values() {
        for value in 0..36 {
            let symbol = value_to_symbol(value).unwrap();
            assert_eq!(symbol_to_value(symbol), Ok(value));
            assert_eq!(symbol_to_value(symbol.to_ascii_uppercase()), Ok(value));
        }
    }

    #[test]
    fn test_value_36_passes_range_check_but_has_no_symbol() {
        // Inclusive bound kept for compatibility; the lookup itself fails.
        assert_eq!(
            value_to_symbol(36),
            Err(ConversionError::UnmappedDigitValue(36))
        );
        assert_eq!(
            value_to_symbol(37),
            Err(ConversionError::InvalidDigitValue(37))
        );
        assert_eq!(
            value_to_symbol(u32::MAX),
            Err(ConversionError::InvalidDigitValue(u32::MAX))
        );
    }

    #[test]
    fn test_invalid_symbols() {
        for symbol in ['.', '-', ' ', '_', '@', '[', '`', '{', 'é', 'Ω', '٣'] {
            assert_eq!(
                symbol_to_value(symbol),
                Err(ConversionError::InvalidSymbol(symbol)),
                "symbol {:?}",
                symbol
            );
        }
    }
}
