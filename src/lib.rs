// ============================================================================
// Radix Converter Library
// Exact number base conversion between bases 0 and 36
// ============================================================================

//! # Radix Converter
//!
//! Converts integer and fractional numbers between positional bases using the
//! symbols `0-9` and `a-z`.
//!
//! ## Features
//!
//! - **Exact integer parts** of any size via arbitrary-precision integers
//! - **Exact decimal arithmetic** for fractional expansion (no floating point)
//! - **Bounded expansion**: non-terminating fractions stop after 100 digits
//! - **Decimal pivot**: any base to any base through a decimal representation
//! - **Interactive calculator** with fixed-width fractional display
//!
//! ## Example
//!
//! ```rust
//! use radix_converter::prelude::*;
//!
//! assert_eq!(convert_base("FF", 16, 10).unwrap(), "255");
//! assert_eq!(convert_base("255", 10, 16).unwrap(), "ff");
//! assert_eq!(decimal_to_base("0.5", 2).unwrap(), "0.1");
//!
//! // 0.1 never terminates in base 3; the expansion is capped, then truncated
//! let shown = round_fraction(&decimal_to_base("0.1", 3).unwrap(), 5);
//! assert_eq!(shown, "0.00220");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod session;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConverterConfig, Numeral};
    pub use crate::engine::{
        base_to_decimal, convert_base, decimal_to_base, round_fraction, symbol_to_value,
        value_to_symbol, ConversionError, ConversionResult, Converter,
    };
    pub use crate::interfaces::{ConversionEvent, EventHandler, NoOpEventHandler};
    pub use crate::session::{convert_numeral, Session};
}
