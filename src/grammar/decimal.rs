// ============================================================================
// Decimal Grammar
// ============================================================================

use crate::domain::{GlyphTable, Mode, MAX_DECIMAL_DIGITS};

/// Full-match grammar for the digits after the decimal point.
///
/// Strict requires at least one digit and forbids a trailing zero; normal
/// accepts any run of up to sixteen digits, the empty run included.
#[derive(Debug, Clone)]
pub struct DecimalGrammar {
    mode: Mode,
}

impl DecimalGrammar {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// True when every glyph is a digit of this mode, whatever the length.
    pub fn is_digit_run(&self, text: &str) -> bool {
        let table = GlyphTable::shared();
        text.chars().all(|ch| table.digit(ch, self.mode).is_some())
    }

    pub fn matches(&self, text: &str) -> bool {
        let table = GlyphTable::shared();
        let mut count = 0;
        let mut last = None;
        for ch in text.chars() {
            match table.digit(ch, self.mode) {
                Some(value) => last = Some(value),
                None => return false,
            }
            count += 1;
        }
        if count > MAX_DECIMAL_DIGITS {
            return false;
        }
        match self.mode {
            Mode::Strict => last.is_some_and(|d| d != 0),
            Mode::Normal | Mode::Smart => true,
        }
    }
}
