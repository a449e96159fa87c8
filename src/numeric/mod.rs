// ============================================================================
// Numeric Module
// Value computation for validated numeral text
// ============================================================================
//
// This module provides:
// - ConvertError: Error taxonomy shared by every conversion stage
// - convert_integer: unit-arithmetic folding (一万二千三百 -> 12300)
// - convert_decimal: positional fractional summation, exact via rust_decimal
// - convert_direct: positional reading of digit-only text (一二三 -> 123)
//
// All arithmetic is checked; the only fallible outcome past validation is
// Overflow.

mod decimal;
mod direct;
mod errors;
mod integer;

pub use decimal::{compose, convert_decimal, retain_precision, to_f64, DecimalPart};
pub use direct::convert_direct;
pub use errors::{ConvertError, ConvertResult};
pub use integer::{convert_integer, tokenize, Token};
