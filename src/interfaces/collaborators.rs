// ============================================================================
// Collaborator Interfaces
// Character normalisation and Arabic-digit spelling used by the normalizer
// ============================================================================

use crate::numeric::ConvertResult;

/// Maps traditional glyphs to simplified ones and full-width characters to
/// half-width. Invoked once per call before any other processing.
pub trait CharNormalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

/// Spells runs of Arabic digits as Chinese glyphs so that smart-mode input
/// can be validated by the worded grammar.
pub trait DigitSpeller: Send + Sync {
    /// Spell an integer run with units: `"1005"` -> `"一千零五"`
    fn spell_integer(&self, digits: &str) -> ConvertResult<String>;

    /// Spell a run digit by digit: `"05"` -> `"零五"`
    fn spell_positional(&self, digits: &str) -> String {
        digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| crate::domain::CANONICAL_DIGITS[d as usize])
            .collect()
    }
}
