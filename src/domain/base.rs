// ============================================================================
// Base Bounds
// Supported radix range and base-pair parsing
// ============================================================================

use crate::engine::{ConversionError, ConversionResult};

/// Smallest base accepted by the range check.
///
/// Bases 0 and 1 pass validation but positional notation only makes sense
/// from base 2 upwards; the engine rejects them where the arithmetic is
/// undefined.
pub const MIN_BASE: u32 = 0;

/// Largest base accepted by the range check (`0-9` plus `a-z`).
pub const MAX_BASE: u32 = 36;

/// Base of the pivot representation. Conversions from or to it are identity.
pub const DECIMAL_BASE: u32 = 10;

/// Check that a user-supplied base lies in `MIN_BASE..=MAX_BASE`.
pub fn validate_base(value: i64) -> ConversionResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|base| (MIN_BASE..=MAX_BASE).contains(base))
        .ok_or(ConversionError::BaseOutOfRange(value))
}

/// Parse a `{source base} {target base}` line.
///
/// # Example
/// ```
/// use radix_converter::domain::parse_base_pair;
///
/// assert_eq!(parse_base_pair("16 10").unwrap(), (16, 10));
/// assert!(parse_base_pair("16").is_err());
/// assert!(parse_base_pair("2 37").is_err());
/// ```
pub fn parse_base_pair(line: &str) -> ConversionResult<(u32, u32)> {
    let invalid = || ConversionError::InvalidBasePair(line.trim().to_string());

    let mut fields = line.split_whitespace();
    let (Some(source), Some(target), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(invalid());
    };

    let source: i64 = source.parse().map_err(|_| invalid())?;
    let target: i64 = target.parse().map_err(|_| invalid())?;

    Ok((validate_base(source)?, validate_base(target)?))
}
