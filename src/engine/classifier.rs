// ============================================================================
// Classifier
// Grammar validation with the all-digit and truncated spoken fallbacks
// ============================================================================

use super::normalizer::{Normalized, Segments};
use crate::domain::{Classified, Glyph, Mode, ParseResult, Unit};
use crate::grammar::{lex, Grammar, GrammarSet};
use crate::interfaces::ConversionWarning;
use crate::numeric::{retain_precision, ConvertError, ConvertResult};
use tracing::debug;

/// Longest digit run allowed in front of each unit of a truncated form.
const MAX_DIGITS_PER_GROUP: usize = 2;

/// Shortest truncated form: digit, unit, digit.
const MIN_TRUNCATED_LEN: usize = 3;

pub struct Classifier<'a> {
    grammars: &'a GrammarSet,
    max_decimal_digits: usize,
}

impl<'a> Classifier<'a> {
    pub fn new(grammars: &'a GrammarSet, max_decimal_digits: usize) -> Self {
        Self {
            grammars,
            max_decimal_digits,
        }
    }

    /// Validate normalized segments. `original` is quoted in format errors;
    /// precision warnings are pushed onto `warnings`.
    pub fn classify(
        &self,
        normalized: Normalized,
        mode: Mode,
        original: &str,
        warnings: &mut Vec<ConversionWarning>,
    ) -> ConvertResult<Classified> {
        let segments = match normalized {
            Normalized::Ready(number) => return Ok(Classified::Ready(number)),
            Normalized::Segments(segments) => segments,
        };
        let grammar = self.grammars.for_mode(mode);
        let format_error = || ConvertError::Format(original.to_string());

        let Segments {
            sign,
            integer,
            decimal,
        } = segments;

        let decimal = match decimal {
            Some(text) => {
                // Glyphs past the cap must still be digits
                if !grammar.is_decimal_digit_run(&text) {
                    return Err(format_error());
                }
                let kept = self.retain(&text, warnings);
                if !grammar.matches_decimal(&kept) {
                    return Err(format_error());
                }
                Some(kept)
            }
            None => None,
        };

        let (integer_text, is_all_digit_form) =
            Self::classify_integer(grammar, integer).ok_or_else(format_error)?;

        Ok(Classified::Numeral(ParseResult {
            sign,
            integer_text,
            decimal_text: decimal,
            is_all_digit_form,
        }))
    }

    fn retain(&self, text: &str, warnings: &mut Vec<ConversionWarning>) -> String {
        let (kept, truncated_from) = retain_precision(text, self.max_decimal_digits);
        if let Some(original_digits) = truncated_from {
            warnings.push(ConversionWarning::PrecisionTruncated {
                original_digits,
                retained_digits: kept.chars().count(),
            });
        }
        kept.to_string()
    }

    /// Formal grammar first; relaxed grammars then try the all-digit form and
    /// the truncated spoken form, in that order.
    fn classify_integer(grammar: &Grammar, integer: String) -> Option<(String, bool)> {
        if integer.is_empty() {
            return None;
        }
        if grammar.matches_integer(&integer) {
            return Some((integer, false));
        }
        if grammar.mode() == Mode::Strict {
            return None;
        }

        let glyphs = lex(&integer, grammar.mode())?;
        if !glyphs.is_empty() && glyphs.iter().all(|g| g.is_digit()) {
            debug!(text = %integer, "classified as all-digit form");
            return Some((integer, true));
        }

        let suffix = truncated_unit_suffix(&glyphs)?;
        let repaired = format!("{integer}{suffix}");
        if grammar.matches_integer(&repaired) {
            debug!(text = %integer, repaired = %repaired, "repaired truncated spoken form");
            return Some((repaired, false));
        }
        None
    }
}

/// For a truncated spoken form such as 一万二 (groups of at most two digits
/// plus a unit, then one bare digit), the unit spelling the bare digit
/// implies: one magnitude below the last explicit unit.
pub fn truncated_unit_suffix(glyphs: &[Glyph]) -> Option<String> {
    if glyphs.len() < MIN_TRUNCATED_LEN {
        return None;
    }

    let mut run = 0;
    let mut last_unit = None;
    for glyph in glyphs {
        match glyph {
            Glyph::Digit(_) => run += 1,
            Glyph::Unit(unit) => {
                if run > MAX_DIGITS_PER_GROUP {
                    return None;
                }
                run = 0;
                last_unit = Some(*unit);
            }
        }
    }
    if run != 1 {
        return None;
    }
    canonical_spelling(last_unit?.magnitude() / 10)
}

/// Canonical unit spelling of a power of ten: a single unit glyph, or a
/// small unit compounded with a large one (10⁷ -> 千万).
pub fn canonical_spelling(magnitude: i64) -> Option<String> {
    if let Some(unit) = Unit::from_magnitude(magnitude) {
        return Some(unit.canonical().to_string());
    }
    Unit::ALL
        .into_iter()
        .filter(|large| large.is_large() && magnitude % large.magnitude() == 0)
        .find_map(|large| {
            let small = Unit::from_magnitude(magnitude / large.magnitude())?;
            Some(format!("{}{}", small.canonical(), large.canonical()))
        })
}
