// ============================================================================
// Domain Models Module
// Bases, numerals and converter configuration
// ============================================================================

pub mod base;
pub mod config;
pub mod numeral;

pub use base::{parse_base_pair, validate_base, DECIMAL_BASE, MAX_BASE, MIN_BASE};
pub use config::{ConverterConfig, DEFAULT_SCALE, MAX_DIVISION_PRECISION, MAX_FRACTION_DIGITS};
pub use numeral::{Numeral, SEPARATOR};
