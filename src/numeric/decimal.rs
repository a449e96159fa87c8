// ============================================================================
// Decimal Converter
// Positional summation of fractional digit glyphs
// ============================================================================

use super::errors::{ConvertError, ConvertResult};
use crate::domain::{GlyphTable, Mode, MAX_DECIMAL_DIGITS};
use arrayvec::ArrayVec;
use rust_decimal::Decimal;

/// Fractional part of a numeral, summed exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalPart {
    pub value: Decimal,
    /// Digits that survived the precision cap
    pub retained: u32,
    /// Original digit count when truncation happened
    pub truncated_from: Option<usize>,
}

/// Keep at most `cap` leading glyphs of a decimal segment. Returns the kept
/// prefix and the original glyph count if anything was dropped.
pub fn retain_precision(text: &str, cap: usize) -> (&str, Option<usize>) {
    let cap = cap.min(MAX_DECIMAL_DIGITS);
    match text.char_indices().nth(cap) {
        Some((byte_index, _)) => (&text[..byte_index], Some(text.chars().count())),
        None => (text, None),
    }
}

/// Convert validated decimal glyphs: the glyph at position k contributes
/// `digit × 10^-(k+1)`. Segments beyond `cap` glyphs are truncated first.
pub fn convert_decimal(text: &str, cap: usize) -> DecimalPart {
    let table = GlyphTable::shared();
    let (kept, truncated_from) = retain_precision(text, cap);

    let digits: ArrayVec<u8, MAX_DECIMAL_DIGITS> = kept
        .chars()
        .filter_map(|ch| table.digit(ch, Mode::Normal))
        .collect();

    let value = digits
        .iter()
        .enumerate()
        .fold(Decimal::ZERO, |acc, (k, &digit)| {
            acc + Decimal::new(i64::from(digit), k as u32 + 1)
        });

    let retained = digits.len() as u32;
    DecimalPart {
        value: value.round_dp(retained),
        retained,
        truncated_from,
    }
}

/// Combine an integer part and a fractional part into a float, rounded to
/// the retained digit count.
pub fn compose(integer: i64, fraction: &DecimalPart) -> ConvertResult<f64> {
    let sum = Decimal::from(integer)
        .checked_add(fraction.value)
        .ok_or(ConvertError::Overflow)?
        .round_dp(fraction.retained);
    to_f64(sum)
}

/// Nearest f64 to an exact decimal.
pub fn to_f64(value: Decimal) -> ConvertResult<f64> {
    value
        .to_string()
        .parse::<f64>()
        .map_err(|_| ConvertError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_sum() {
        let part = convert_decimal("一四", 16);
        assert_eq!(part.value, Decimal::new(14, 2));
        assert_eq!(part.retained, 2);
        assert_eq!(part.truncated_from, None);
    }

    #[test]
    fn test_leading_zero() {
        assert_eq!(convert_decimal("零五", 16).value, Decimal::new(5, 2));
    }

    #[test]
    fn test_empty_segment() {
        let part = convert_decimal("", 16);
        assert_eq!(part.value, Decimal::ZERO);
        assert_eq!(part.retained, 0);
    }

    #[test]
    fn test_truncates_beyond_sixteen() {
        let text = "一".repeat(17);
        let part = convert_decimal(&text, 16);
        assert_eq!(part.retained, 16);
        assert_eq!(part.truncated_from, Some(17));
        assert_eq!(part.value, Decimal::new(1_111_111_111_111_111, 16));
    }

    #[test]
    fn test_configured_cap() {
        let part = convert_decimal("一二三四", 2);
        assert_eq!(part.value, Decimal::new(12, 2));
        assert_eq!(part.truncated_from, Some(4));
    }

    #[test]
    fn test_retain_precision() {
        assert_eq!(retain_precision("一二三", 16), ("一二三", None));
        assert_eq!(retain_precision("一二三", 2), ("一二", Some(3)));
    }

    #[test]
    fn test_compose_avoids_float_drift() {
        let fraction = convert_decimal("五七", 16);
        assert_eq!(compose(1, &fraction).unwrap(), 1.57);
        assert_eq!(compose(3, &convert_decimal("一四", 16)).unwrap(), 3.14);
        assert_eq!(compose(0, &convert_decimal("", 16)).unwrap(), 0.0);
    }
}
