// ============================================================================
// Domain Models Module
// Glyph tables, modes, configuration and per-call value objects
// ============================================================================

pub mod config;
pub mod numeral;
pub mod tables;

pub use config::{ConverterConfig, Mode, MAX_DECIMAL_DIGITS};
pub use numeral::{Classified, Number, NumeralInput, ParseResult, Sign};
pub use tables::{Glyph, GlyphStyle, GlyphTable, Unit, CANONICAL_DIGITS};
