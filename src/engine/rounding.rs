// ============================================================================
// Fractional Rounding
// Fixed-width fractional display by truncation and zero padding
// ============================================================================

use crate::domain::SEPARATOR;

/// Force the fractional part of `numeral` to exactly `scale` symbols.
///
/// Longer fractions are truncated (never rounded to nearest), shorter ones are
/// right-padded with `'0'`. A numeral without a separator is returned
/// unchanged. Works for numerals of any base.
///
/// # Example
/// ```
/// use radix_converter::engine::round_fraction;
///
/// assert_eq!(round_fraction("1.239", 2), "1.23");
/// assert_eq!(round_fraction("1.2", 5), "1.20000");
/// assert_eq!(round_fraction("ff", 5), "ff");
/// ```
pub fn round_fraction(numeral: &str, scale: usize) -> String {
    let Some((integer, fraction)) = numeral.split_once(SEPARATOR) else {
        return numeral.to_string();
    };
    // A second separator ends the fraction
    let fraction = fraction.split(SEPARATOR).next().unwrap_or_default();

    let mut rounded = String::with_capacity(integer.len() + 1 + scale);
    rounded.push_str(integer);
    rounded.push(SEPARATOR);
    rounded.extend(fraction.chars().chain(std::iter::repeat('0')).take(scale));
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_never_rounds() {
        assert_eq!(round_fraction("1.239", 2), "1.23");
        assert_eq!(round_fraction("0.99999999", 5), "0.99999");
        assert_eq!(round_fraction("0.zzzzzz", 3), "0.zzz");
    }

    #[test]
    fn test_pads_with_zeros() {
        assert_eq!(round_fraction("1.2", 5), "1.20000");
        assert_eq!(round_fraction("7.", 3), "7.000");
    }

    #[test]
    fn test_exact_width_is_unchanged() {
        assert_eq!(round_fraction("a.bcdef", 5), "a.bcdef");
    }

    #[test]
    fn test_without_fraction_is_unchanged() {
        assert_eq!(round_fraction("1010", 5), "1010");
        assert_eq!(round_fraction("", 5), "");
    }

    #[test]
    fn test_second_separator_ends_fraction() {
        assert_eq!(round_fraction("1.2.3", 5), "1.20000");
        assert_eq!(round_fraction("1.2345.6", 3), "1.234");
        assert_eq!(round_fraction("1..9", 2), "1.00");
    }

    #[test]
    fn test_zero_scale_keeps_separator() {
        assert_eq!(round_fraction("3.14", 0), "3.");
    }
}
