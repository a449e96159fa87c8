// ============================================================================
// Basic Usage Example
// ============================================================================

use cn_numerals::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Chinese Numerals Example ===\n");

    // One-shot conversion through the shared converter
    println!("Shared converter:");
    for (text, mode) in [
        ("三千零一十五", "strict"),
        ("负三点一四", "strict"),
        ("十三万六", "normal"),
        ("五元三角", "normal"),
        ("10.1万", "smart"),
        ("3万5千", "smart"),
    ] {
        match convert(text, mode) {
            Ok(value) => println!("  {text} ({mode}) = {value}"),
            Err(e) => println!("  {text} ({mode}) failed: {e}"),
        }
    }

    // Converter with its own configuration and a logging warning handler
    let converter = match ConverterBuilder::new()
        .mode(Mode::Normal)
        .max_decimal_digits(4)
        .warning_handler(Arc::new(LoggingWarningHandler))
        .build()
    {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return;
        }
    };

    println!("\nConfigured converter ({:?}):", converter.config());
    match converter.convert_with_report("一点二三四五六", Mode::Normal) {
        Ok(report) => {
            println!("  value: {}", report.value);
            for warning in &report.warnings {
                println!("  warning: {warning:?}");
            }
        }
        Err(e) => println!("  failed: {e}"),
    }

    println!("\nRejected inputs:");
    for (text, mode) in [("两百", "strict"), ("一百五", "strict"), ("一百", "fuzzy")] {
        if let Err(e) = convert(text, mode) {
            println!("  {text} ({mode}): {e}");
        }
    }
}
