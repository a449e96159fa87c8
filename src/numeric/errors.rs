// ============================================================================
// Conversion Errors
// Error taxonomy for numeral validation and conversion
// ============================================================================

use crate::domain::Mode;
use std::fmt;

/// Errors that can occur while converting numeral text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Unknown mode or invalid converter settings
    Configuration(String),
    /// Input was empty, or nothing remained after suffix stripping
    EmptyInput,
    /// Glyph outside the mode's permitted set
    CharacterNotAllowed { mode: Mode, glyph: char },
    /// More than one decimal point marker
    MultipleDecimalPoints,
    /// Text failed the grammar and every applicable fallback
    Format(String),
    /// Value does not fit in an i64
    Overflow,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Configuration(reason) => write!(f, "configuration error: {reason}"),
            ConvertError::EmptyInput => write!(f, "input is empty"),
            ConvertError::CharacterNotAllowed { mode, glyph } => {
                write!(f, "character {glyph:?} is not allowed in {mode} mode")
            },
            ConvertError::MultipleDecimalPoints => {
                write!(f, "input contains more than one decimal point")
            },
            ConvertError::Format(text) => write!(f, "malformed numeral: {text}"),
            ConvertError::Overflow => write!(f, "numeral value exceeds the supported range"),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConvertError::CharacterNotAllowed {
                mode: Mode::Strict,
                glyph: '两'
            }
            .to_string(),
            "character '两' is not allowed in strict mode"
        );
        assert_eq!(
            ConvertError::Format("一百五".to_string()).to_string(),
            "malformed numeral: 一百五"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ConvertError::Overflow, ConvertError::Overflow);
        assert_ne!(ConvertError::Overflow, ConvertError::MultipleDecimalPoints);
    }
}
