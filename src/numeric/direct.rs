// ============================================================================
// Direct Converter
// Positional base-10 reading of digit-only numerals (一二三 -> 123)
// ============================================================================

use super::errors::{ConvertError, ConvertResult};
use crate::domain::{GlyphTable, Mode};

/// Read digit glyphs positionally: the glyph k places from the right
/// contributes `digit × 10^k`.
pub fn convert_direct(text: &str) -> ConvertResult<i64> {
    let table = GlyphTable::shared();
    let mut output: i64 = 0;
    let mut place: i64 = 1;
    let mut digits = text.chars().rev().filter_map(|ch| table.digit(ch, Mode::Normal)).peekable();

    while let Some(digit) = digits.next() {
        let contribution = i64::from(digit)
            .checked_mul(place)
            .ok_or(ConvertError::Overflow)?;
        output = output
            .checked_add(contribution)
            .ok_or(ConvertError::Overflow)?;
        if digits.peek().is_some() {
            place = place.checked_mul(10).ok_or(ConvertError::Overflow)?;
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn test_positional_reading() {
        assert_eq!(convert_direct("一二三").unwrap(), 123);
        assert_eq!(convert_direct("零零七").unwrap(), 7);
        assert_eq!(convert_direct("二〇二四").unwrap(), 2024);
        assert_eq!(convert_direct("幺两").unwrap(), 12);
    }

    #[test]
    fn test_overflow() {
        let text = "九".repeat(20);
        assert_eq!(convert_direct(&text), Err(ConvertError::Overflow));
    }

    fn spelled(value: u64) -> String {
        value
            .to_string()
            .chars()
            .map(|c| crate::domain::CANONICAL_DIGITS[c.to_digit(10).unwrap_or(0) as usize])
            .collect()
    }

    #[test]
    fn test_matches_arabic_reading() {
        fn prop(value: u64) -> TestResult {
            if value > i64::MAX as u64 {
                return TestResult::discard();
            }
            TestResult::from_bool(convert_direct(&spelled(value)) == Ok(value as i64))
        }
        quickcheck(prop as fn(u64) -> TestResult);
    }
}
