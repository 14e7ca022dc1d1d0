// ============================================================================
// Decimal -> Base
// Repeated division for the integer part, repeated multiplication for the
// fractional part
// ============================================================================

use super::errors::{ConversionError, ConversionResult};
use super::symbols::value_to_symbol;
use crate::domain::{DECIMAL_BASE, SEPARATOR};
use crate::numeric::ExactDecimal;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Result of expanding a decimal numeral in another base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The numeral in the target base
    pub numeral: String,

    /// Fractional digits emitted after the separator
    pub fraction_digits: usize,

    /// True if the fractional expansion stopped at the cap rather than on an
    /// exact zero residue
    pub capped: bool,
}

impl Expansion {
    fn verbatim(numeral: &str) -> Self {
        Self {
            numeral: numeral.to_string(),
            fraction_digits: 0,
            capped: false,
        }
    }
}

/// Value of a digit-sized big integer.
///
/// Callers only pass values below the target base, which fit in one limb.
fn digit_value(value: &BigUint) -> u32 {
    value.to_u32_digits().first().copied().unwrap_or(0)
}

/// Expand a plain decimal numeral in `target_base`.
///
/// Base 10 returns the input unchanged. A fractional part, even an empty one,
/// always produces at least one fractional digit and at most
/// `max_fraction_digits` of them.
///
/// # Errors
/// - `UnsupportedBase` for target bases below 2
/// - `InvalidDecimal` if `decimal` is not a plain unsigned decimal number
/// - `InvalidDigitValue` / `UnmappedDigitValue` for target bases above 36
pub fn expand(
    decimal: &str,
    target_base: u32,
    max_fraction_digits: usize,
) -> ConversionResult<Expansion> {
    if target_base == DECIMAL_BASE {
        return Ok(Expansion::verbatim(decimal));
    }
    if target_base < 2 {
        return Err(ConversionError::UnsupportedBase(target_base));
    }

    let value: ExactDecimal = decimal
        .parse()
        .map_err(|_| ConversionError::InvalidDecimal(decimal.to_string()))?;
    let radix = BigUint::from(target_base);

    // Least significant digit first
    let mut integer_digits = Vec::new();
    let mut quotient = value.integer_part();
    loop {
        let (next, remainder) = quotient.div_rem(&radix);
        integer_digits.push(value_to_symbol(digit_value(&remainder))?);
        if next.is_zero() {
            break;
        }
        quotient = next;
    }

    let mut numeral: String = integer_digits.iter().rev().collect();
    let mut fraction_digits = 0;
    let mut capped = false;

    if decimal.contains(SEPARATOR) {
        numeral.push(SEPARATOR);

        let mut residue = value.fractional_part();
        loop {
            let product = residue.mul_integer(&radix);
            let digit = digit_value(&product.integer_part());
            numeral.push(value_to_symbol(digit)?);
            residue = product.fractional_part();
            fraction_digits += 1;

            tracing::trace!(digit, fraction_digits, "expanded fractional digit");

            if residue.is_zero() {
                break;
            }
            if fraction_digits >= max_fraction_digits {
                tracing::warn!(
                    target_base,
                    fraction_digits,
                    "fractional expansion reached the digit cap"
                );
                capped = true;
                break;
            }
        }
    }

    Ok(Expansion {
        numeral,
        fraction_digits,
        capped,
    })
}
