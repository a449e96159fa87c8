// ============================================================================
// Converter Configuration
// Strictness modes and validated converter settings
// ============================================================================

use crate::numeric::ConvertError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Most fractional digits a conversion retains.
pub const MAX_DECIMAL_DIGITS: usize = 16;

// ============================================================================
// Mode
// ============================================================================

/// Strictness mode: decides the permitted glyph set and which grammars and
/// fallbacks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Canonical glyphs and formal elision only
    #[default]
    Strict,

    /// Adds colloquial glyph variants, all-digit and truncated spoken forms
    Normal,

    /// Normal plus embedded Arabic digits and the `10.1万` shorthand
    Smart,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Strict, Mode::Normal, Mode::Smart];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Normal => "normal",
            Mode::Smart => "smart",
        }
    }

    /// Mode whose grammar validates worded text. Smart text is validated by
    /// the normal grammar once Arabic digit runs have been spelled out.
    pub fn grammar_mode(&self) -> Mode {
        match self {
            Mode::Strict => Mode::Strict,
            Mode::Normal | Mode::Smart => Mode::Normal,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Mode::Strict),
            "normal" => Ok(Mode::Normal),
            "smart" => Ok(Mode::Smart),
            other => Err(ConvertError::Configuration(format!(
                "mode must be one of strict, normal, smart; got {other:?}"
            ))),
        }
    }
}

// ============================================================================
// Converter Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Mode used by `Converter::convert_default`
    pub default_mode: Mode,

    /// Fractional digits kept before truncation (1..=16)
    pub max_decimal_digits: usize,

    /// Strip currency completion words such as 元整 before validation
    pub strip_currency_suffix: bool,
}

impl ConverterConfig {
    pub fn new(default_mode: Mode) -> Self {
        Self {
            default_mode,
            max_decimal_digits: MAX_DECIMAL_DIGITS,
            strip_currency_suffix: true,
        }
    }

    /// Builder method: Set the default mode
    pub fn with_default_mode(mut self, mode: Mode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Builder method: Set the decimal precision cap
    pub fn with_max_decimal_digits(mut self, digits: usize) -> Self {
        self.max_decimal_digits = digits;
        self
    }

    /// Builder method: Toggle currency suffix stripping
    pub fn with_currency_suffix_stripping(mut self, enabled: bool) -> Self {
        self.strip_currency_suffix = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_decimal_digits == 0 {
            return Err("Decimal precision cap must be at least 1".to_string());
        }
        if self.max_decimal_digits > MAX_DECIMAL_DIGITS {
            return Err(format!(
                "Decimal precision cap cannot exceed {MAX_DECIMAL_DIGITS} digits"
            ));
        }
        Ok(())
    }

    /// Formal documents: strict glyphs, full precision
    pub fn strict_preset() -> Self {
        Self::new(Mode::Strict)
    }

    /// Everyday speech: colloquial variants and truncated forms
    pub fn colloquial_preset() -> Self {
        Self::new(Mode::Normal)
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::strict_preset()
    }
}
