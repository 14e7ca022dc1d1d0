// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_converter::interfaces::LoggingEventHandler;
use radix_converter::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Radix Converter Example ===\n");

    // Free functions use the default configuration
    println!("Integer conversions:");
    for (numeral, from, to) in [("FF", 16, 10), ("255", 10, 16), ("1010", 2, 10), ("A", 16, 2)] {
        match convert_base(numeral, from, to) {
            Ok(result) => println!("  {} (base {}) = {} (base {})", numeral, from, result, to),
            Err(e) => println!("  {} (base {}): {}", numeral, from, e),
        }
    }

    // Fractions go through an exact decimal pivot
    println!("\nFractional conversions:");
    let half = decimal_to_base("0.5", 2).unwrap();
    println!("  0.5 (base 10) = {} (base 2)", half);

    let third = decimal_to_base("0.1", 3).unwrap();
    println!(
        "  0.1 (base 10) = {}... (base 3, {} digits before the cap)",
        &third[..12],
        third.len() - 2
    );
    println!("  shown with 5 digits: {}", round_fraction(&third, 5));

    // A configured converter reports events to a handler
    println!("\n=== Configured Converter ===");
    let config = ConverterConfig::unrounded().with_max_fraction_digits(16);
    let converter = Converter::new(config, Arc::new(LoggingEventHandler));

    let result = converter.convert("0.1", 10, 3).unwrap();
    println!("  0.1 (base 10) = {} (base 3, capped at 16 digits)", result);

    // Errors abort the conversion without a partial result
    println!("\n=== Errors ===");
    for (numeral, from) in [("12#", 16), ("1.0.1", 2)] {
        match converter.convert(numeral, from, 10) {
            Ok(result) => println!("  {} -> {}", numeral, result),
            Err(e) => println!("  {} -> error: {}", numeral, e),
        }
    }
    println!("  value 36 -> {:?}", value_to_symbol(36));
}
