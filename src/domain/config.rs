// ============================================================================
// Converter Configuration
// Precision, iteration cap and display scale for conversions
// ============================================================================

use crate::numeric::{DECIMAL128_PRECISION, MAX_PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits shown by the interactive calculator.
pub const DEFAULT_SCALE: usize = 5;

/// Largest accepted `division_precision`.
pub const MAX_DIVISION_PRECISION: u32 = MAX_PRECISION;

/// Upper bound on fractional digits produced by decimal -> base expansion.
///
/// Non-terminating expansions (1/3 in base 10, 0.1 in base 3) stop here.
pub const MAX_FRACTION_DIGITS: usize = 100;

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for a [`Converter`](crate::engine::Converter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterConfig {
    /// Fractional digits kept (truncated or zero-padded) in displayed results.
    /// None leaves results unrounded.
    pub scale: Option<usize>,

    /// Iteration cap for fractional decimal -> base expansion
    pub max_fraction_digits: usize,

    /// Significant digits for each fractional term of base -> decimal
    pub division_precision: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            scale: Some(DEFAULT_SCALE),
            max_fraction_digits: MAX_FRACTION_DIGITS,
            division_precision: DECIMAL128_PRECISION,
        }
    }
}

impl ConverterConfig {
    /// Builder method: Set display scale
    pub fn with_scale(mut self, scale: usize) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Builder method: Show results exactly as converted
    pub fn without_rounding(mut self) -> Self {
        self.scale = None;
        self
    }

    /// Builder method: Set fractional expansion cap
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Builder method: Set base -> decimal precision
    pub fn with_division_precision(mut self, precision: u32) -> Self {
        self.division_precision = precision;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_fraction_digits == 0 {
            return Err("Maximum fraction digits must be at least 1".to_string());
        }

        if self.division_precision == 0 || self.division_precision > MAX_DIVISION_PRECISION {
            return Err(format!(
                "Division precision must be between 1 and {}",
                MAX_DIVISION_PRECISION
            ));
        }

        Ok(())
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Interactive calculator configuration
    /// - Results shown with 5 fractional digits
    /// - 100-digit expansion cap
    /// - decimal128 precision
    pub fn interactive() -> Self {
        Self::default()
    }

    /// Library configuration that returns results exactly as converted
    pub fn unrounded() -> Self {
        Self::default().without_rounding()
    }
}
