// ============================================================================
// Base -> Decimal
// Positional weights summed exactly for the integer part and at bounded
// precision for the fractional part
// ============================================================================

use super::errors::{ConversionError, ConversionResult};
use super::symbols::symbol_to_value;
use crate::domain::{Numeral, DECIMAL_BASE};
use crate::numeric::{ExactDecimal, NumericError};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Render a numeral of `source_base` as a plain decimal string.
///
/// Base 10 returns the input unchanged. The integer part is exact. Each
/// fractional digit contributes `value × source_base^-(index + 1)`, with the
/// power rounded to `precision` significant digits; the sum is not trimmed,
/// so it keeps the scale of its finest term.
///
/// # Errors
/// - `InvalidSymbol` for characters outside `0-9` / `a-z`
/// - `MalformedNumeral` for more than one separator
/// - `UnsupportedBase` for base 0 with a non-empty fractional part
pub fn evaluate(numeral: &str, source_base: u32, precision: u32) -> ConversionResult<String> {
    if source_base == DECIMAL_BASE {
        return Ok(numeral.to_string());
    }

    let parts = Numeral::split(numeral)?;
    let radix = BigUint::from(source_base);

    let mut integer_sum = BigUint::zero();
    let mut weight = BigUint::one();
    for symbol in parts.integer_part().chars().rev() {
        let value = symbol_to_value(symbol)?;
        integer_sum += &weight * value;
        weight *= &radix;
    }

    let Some(fraction) = parts.fraction_part() else {
        return Ok(integer_sum.to_string());
    };

    let mut sum = ExactDecimal::from_integer(integer_sum);
    for (exponent, symbol) in (1u32..).zip(fraction.chars()) {
        let value = symbol_to_value(symbol)?;
        let weight = ExactDecimal::reciprocal_pow(source_base, exponent, precision).map_err(
            |err| match err {
                NumericError::DivisionByZero => ConversionError::UnsupportedBase(source_base),
                other => ConversionError::from(other),
            },
        )?;
        sum = &sum + &weight.mul_integer(&BigUint::from(value));
    }

    Ok(sum.to_string())
}
