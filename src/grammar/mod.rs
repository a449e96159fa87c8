// ============================================================================
// Grammar Module
// Per-mode integer and decimal grammars, built once per converter
// ============================================================================

mod decimal;
mod layers;

pub use decimal::DecimalGrammar;
pub use layers::{lex, Glyphs, IntegerGrammar, Layer};

use crate::domain::Mode;

/// Compiled integer and decimal grammar for one mode.
#[derive(Debug, Clone)]
pub struct Grammar {
    integer: IntegerGrammar,
    decimal: DecimalGrammar,
}

impl Grammar {
    pub fn build(mode: Mode) -> Self {
        let mode = mode.grammar_mode();
        Self {
            integer: IntegerGrammar::new(mode),
            decimal: DecimalGrammar::new(mode),
        }
    }

    pub fn mode(&self) -> Mode {
        self.integer.mode()
    }

    pub fn matches_integer(&self, text: &str) -> bool {
        self.integer.matches(text)
    }

    pub fn is_decimal_digit_run(&self, text: &str) -> bool {
        self.decimal.is_digit_run(text)
    }

    pub fn matches_decimal(&self, text: &str) -> bool {
        self.decimal.matches(text)
    }
}

/// Strict and normal grammars. Smart shares the normal one.
#[derive(Debug, Clone)]
pub struct GrammarSet {
    strict: Grammar,
    normal: Grammar,
}

impl GrammarSet {
    pub fn build() -> Self {
        Self {
            strict: Grammar::build(Mode::Strict),
            normal: Grammar::build(Mode::Normal),
        }
    }

    pub fn for_mode(&self, mode: Mode) -> &Grammar {
        match mode.grammar_mode() {
            Mode::Strict => &self.strict,
            _ => &self.normal,
        }
    }
}

impl Default for GrammarSet {
    fn default() -> Self {
        Self::build()
    }
}
