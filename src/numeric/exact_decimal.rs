// ============================================================================
// Exact Decimal
// Non-negative arbitrary-precision decimal with an explicit scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Significant digits of the IEEE 754 decimal128 format.
pub const DECIMAL128_PRECISION: u32 = 34;

/// Largest precision accepted by [`ExactDecimal::reciprocal_pow`].
pub const MAX_PRECISION: u32 = 10_000;

/// Exact, non-negative decimal number.
///
/// Internally stores `value × 10^scale` as a `BigUint` mantissa. The scale is
/// part of the value's representation: `0.5` and `0.50` compare equal but
/// render differently, and arithmetic never drops trailing zeros on its own.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use radix_converter::numeric::ExactDecimal;
///
/// let half: ExactDecimal = "0.5".parse().unwrap();
/// let doubled = half.mul_integer(&BigUint::from(2u32));
/// assert_eq!(doubled.to_string(), "1.0");
/// assert_eq!(doubled.integer_part(), BigUint::from(1u32));
/// assert!(doubled.fractional_part().is_zero());
/// ```
#[derive(Clone, Default)]
pub struct ExactDecimal {
    mantissa: BigUint,
    scale: u32,
}

// ============================================================================
// Scale Helpers
// ============================================================================

/// Compute 10^n
fn pow10(n: u32) -> BigUint {
    BigUint::from(10u32).pow(n)
}

/// Number of decimal digits in `n` (zero has one digit).
fn decimal_digits(n: &BigUint) -> u32 {
    if n.is_zero() {
        1
    } else {
        n.to_str_radix(10).len() as u32
    }
}

/// Scale at which `10^scale / divisor` has `precision` significant digits.
fn quotient_scale(divisor_digits: u32, precision: u32) -> NumericResult<u32> {
    (divisor_digits - 1)
        .checked_add(precision)
        .ok_or(NumericError::ScaleOverflow)
}

impl ExactDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw mantissa and scale (`mantissa × 10^-scale`).
    #[inline]
    pub fn new(mantissa: BigUint, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    /// Create a whole number with scale 0.
    #[inline]
    pub fn from_integer(value: BigUint) -> Self {
        Self::new(value, 0)
    }

    /// Zero with scale 0.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// One with scale 0.
    #[inline]
    pub fn one() -> Self {
        Self::from_integer(BigUint::one())
    }

    /// Compute `1 / radix^exponent` rounded half-even to `precision`
    /// significant digits.
    ///
    /// Exact quotients carry no trailing zeros (`1/16` is `0.0625`); inexact
    /// ones carry exactly `precision` significant digits.
    ///
    /// # Errors
    /// - `DivisionByZero` if `radix` is 0 and `exponent` is positive
    /// - `InvalidPrecision` if `precision` is 0 or above [`MAX_PRECISION`]
    /// - `ScaleOverflow` if the quotient's scale does not fit in a `u32`
    pub fn reciprocal_pow(radix: u32, exponent: u32, precision: u32) -> NumericResult<Self> {
        if precision == 0 || precision > MAX_PRECISION {
            return Err(NumericError::InvalidPrecision);
        }
        if radix == 0 && exponent > 0 {
            return Err(NumericError::DivisionByZero);
        }

        let divisor = BigUint::from(radix).pow(exponent);
        if divisor.is_one() {
            return Ok(Self::one());
        }

        // 10^scale / divisor lies in [10^(precision-1), 10^precision]
        let scale = quotient_scale(decimal_digits(&divisor), precision)?;
        let (mut quotient, remainder) = pow10(scale).div_rem(&divisor);

        if remainder.is_zero() {
            return Ok(Self::new(quotient, scale).stripped());
        }

        match (&remainder * 2u32).cmp(&divisor) {
            Ordering::Greater => quotient += 1u32,
            Ordering::Equal if quotient.is_odd() => quotient += 1u32,
            _ => {},
        }

        Ok(Self::new(quotient, scale))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw mantissa (`value × 10^scale`).
    #[inline]
    pub fn mantissa(&self) -> &BigUint {
        &self.mantissa
    }

    /// Number of digits after the decimal point.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Check if value is zero (at any scale).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Get the integer part (truncated).
    pub fn integer_part(&self) -> BigUint {
        &self.mantissa / pow10(self.scale)
    }

    /// Get the fractional part, keeping the current scale.
    pub fn fractional_part(&self) -> Self {
        Self::new(&self.mantissa % pow10(self.scale), self.scale)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact multiplication by a whole number. The scale is unchanged.
    pub fn mul_integer(&self, factor: &BigUint) -> Self {
        Self::new(&self.mantissa * factor, self.scale)
    }

    /// Mantissa expressed at a larger (or equal) scale.
    fn mantissa_at(&self, scale: u32) -> BigUint {
        debug_assert!(scale >= self.scale);
        &self.mantissa * pow10(scale - self.scale)
    }

    /// Drop trailing fractional zeros.
    fn stripped(mut self) -> Self {
        let ten = BigUint::from(10u32);
        while self.scale > 0 {
            let (quotient, remainder) = self.mantissa.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            self.mantissa = quotient;
            self.scale -= 1;
        }
        self
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Add for &ExactDecimal {
    type Output = ExactDecimal;

    /// Exact addition; the result takes the larger of the two scales.
    fn add(self, rhs: Self) -> Self::Output {
        let scale = self.scale.max(rhs.scale);
        ExactDecimal::new(self.mantissa_at(scale) + rhs.mantissa_at(scale), scale)
    }
}

impl Add for ExactDecimal {
    type Output = ExactDecimal;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl PartialEq for ExactDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactDecimal {}

impl PartialOrd for ExactDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.mantissa_at(scale).cmp(&other.mantissa_at(scale))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactDecimal({}, scale={})", self, self.scale)
    }
}

impl fmt::Display for ExactDecimal {
    /// Plain positional notation with exactly `scale` fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.mantissa);
        }

        let scale = self.scale as usize;
        let digits = self.mantissa.to_str_radix(10);
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{}.{}", int_part, frac_part)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for ExactDecimal {
    type Err = NumericError;

    /// Parse from a plain decimal string.
    ///
    /// # Examples
    /// - "255" -> 255 (scale 0)
    /// - "0.50" -> 0.50 (scale 2)
    /// - ".5" -> 0.5 (scale 1)
    /// - "7." -> 7 (scale 0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int_str, frac_str) = s.split_once('.').unwrap_or((s, ""));
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_str) || !all_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }

        let scale = u32::try_from(frac_str.len()).map_err(|_| NumericError::InvalidInput)?;
        let digits = format!("{}{}", int_str, frac_str);
        let mantissa = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(NumericError::InvalidInput)?;

        Ok(Self::new(mantissa, scale))
    }
}

// ============================================================================
// Tests
// ============================================================================
