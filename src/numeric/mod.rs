// ============================================================================
// Numeric Module
// Exact arbitrary-precision arithmetic for base conversion
// ============================================================================
//
// This module provides:
// - ExactDecimal: non-negative decimal with a big-integer mantissa and a scale
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (no panics)
// - Scales are carried, never silently normalized

mod errors;
mod exact_decimal;

pub use errors::{NumericError, NumericResult};
pub use exact_decimal::{ExactDecimal, DECIMAL128_PRECISION, MAX_PRECISION};
