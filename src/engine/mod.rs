// ============================================================================
// Engine Module
// Symbol mapping and base conversion algorithms
// ============================================================================

mod converter;
mod errors;
mod rounding;
mod symbols;
pub mod to_base;
pub mod to_decimal;

pub use converter::{base_to_decimal, convert_base, decimal_to_base, Converter};
pub use errors::{ConversionError, ConversionResult};
pub use rounding::round_fraction;
pub use symbols::{symbol_to_value, value_to_symbol, MAX_DIGIT_VALUE};
