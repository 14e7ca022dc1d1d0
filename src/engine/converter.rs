// ============================================================================
// Converter
// Base -> base orchestration through the decimal pivot
// ============================================================================

use super::errors::ConversionResult;
use super::rounding::round_fraction;
use super::{to_base, to_decimal};
use crate::domain::ConverterConfig;
use crate::interfaces::{ConversionEvent, EventHandler, NoOpEventHandler};
use std::sync::Arc;

/// Stateless base converter with configurable precision and an event sink.
///
/// Every call is independent; the converter holds no per-conversion state and
/// can be shared freely.
pub struct Converter {
    /// Precision, cap and display settings
    config: ConverterConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterConfig::default(), Arc::new(NoOpEventHandler))
    }
}

impl Converter {
    /// Create a new converter
    pub fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a plain decimal numeral to `target_base`.
    pub fn decimal_to_base(&self, decimal: &str, target_base: u32) -> ConversionResult<String> {
        let expansion = to_base::expand(decimal, target_base, self.config.max_fraction_digits)?;

        if expansion.capped {
            self.event_handler
                .on_event(ConversionEvent::FractionCapReached {
                    target_base,
                    digits: expansion.fraction_digits,
                });
        }

        Ok(expansion.numeral)
    }

    /// Convert a numeral of `source_base` to a plain decimal string.
    pub fn base_to_decimal(&self, numeral: &str, source_base: u32) -> ConversionResult<String> {
        to_decimal::evaluate(numeral, source_base, self.config.division_precision)
    }

    /// Convert a numeral from `source_base` to `target_base`.
    ///
    /// Equal bases return the input verbatim, without any normalization.
    /// Otherwise the numeral goes through its decimal representation.
    pub fn convert(
        &self,
        numeral: &str,
        source_base: u32,
        target_base: u32,
    ) -> ConversionResult<String> {
        self.event_handler.on_event(ConversionEvent::Requested {
            numeral: numeral.to_string(),
            source_base,
            target_base,
        });

        if source_base == target_base {
            self.event_handler.on_event(ConversionEvent::PassedThrough {
                numeral: numeral.to_string(),
                base: source_base,
            });
            return Ok(numeral.to_string());
        }

        let result = self
            .base_to_decimal(numeral, source_base)
            .and_then(|decimal| {
                tracing::trace!(%decimal, "decimal pivot");
                self.decimal_to_base(&decimal, target_base)
            });

        match &result {
            Ok(converted) => {
                tracing::debug!(
                    source_base,
                    target_base,
                    "converted {} to {}",
                    numeral,
                    converted
                );
                self.event_handler.on_event(ConversionEvent::Completed {
                    numeral: numeral.to_string(),
                    result: converted.clone(),
                    source_base,
                    target_base,
                });
            },
            Err(error) => {
                self.event_handler.on_event(ConversionEvent::Failed {
                    numeral: numeral.to_string(),
                    error: error.clone(),
                });
            },
        }

        result
    }

    /// Convert, then fix the fractional part to the configured scale.
    pub fn convert_for_display(
        &self,
        numeral: &str,
        source_base: u32,
        target_base: u32,
    ) -> ConversionResult<String> {
        let converted = self.convert(numeral, source_base, target_base)?;
        Ok(match self.config.scale {
            Some(scale) => round_fraction(&converted, scale),
            None => converted,
        })
    }
}

// ============================================================================
// Free Functions (default configuration)
// ============================================================================

/// Convert a plain decimal numeral to `target_base` with the default 100-digit
/// fractional cap.
///
/// # Example
/// ```
/// use radix_converter::engine::decimal_to_base;
///
/// assert_eq!(decimal_to_base("255", 16).unwrap(), "ff");
/// assert_eq!(decimal_to_base("0.5", 2).unwrap(), "0.1");
/// ```
pub fn decimal_to_base(decimal: &str, target_base: u32) -> ConversionResult<String> {
    Converter::default().decimal_to_base(decimal, target_base)
}

/// Convert a numeral of `source_base` to a plain decimal string with
/// decimal128 precision for fractional digits.
///
/// # Example
/// ```
/// use radix_converter::engine::base_to_decimal;
///
/// assert_eq!(base_to_decimal("FF", 16).unwrap(), "255");
/// assert_eq!(base_to_decimal("0.1", 2).unwrap(), "0.5");
/// ```
pub fn base_to_decimal(numeral: &str, source_base: u32) -> ConversionResult<String> {
    Converter::default().base_to_decimal(numeral, source_base)
}

/// Convert a numeral between two bases with the default configuration.
///
/// # Example
/// ```
/// use radix_converter::engine::convert_base;
///
/// assert_eq!(convert_base("A", 16, 2).unwrap(), "1010");
/// assert_eq!(convert_base("not checked", 7, 7).unwrap(), "not checked");
/// ```
pub fn convert_base(numeral: &str, source_base: u32, target_base: u32) -> ConversionResult<String> {
    Converter::default().convert(numeral, source_base, target_base)
}
