// ============================================================================
// Lowercase Digit Speller
// Spells Arabic digit runs as formal lowercase Chinese numerals
// ============================================================================

use crate::domain::{Unit, CANONICAL_DIGITS};
use crate::interfaces::DigitSpeller;
use crate::numeric::{ConvertError, ConvertResult};

/// Largest value the speller handles: sixteen digits, up to the hundred-trillions.
const MAX_SPELLED: u64 = 9_999_999_999_999_999;

const WAN: u64 = 10_000;
const YI: u64 = 100_000_000;

/// Spells integers the way the formal grammar expects them: a single 零 for
/// every skipped run of layers, and a leading 一十 shortened to 十.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowercaseSpeller;

impl LowercaseSpeller {
    pub fn new() -> Self {
        Self
    }

    /// Spell a value below 10⁴.
    fn spell_section(value: u64, out: &mut String) {
        const PLACES: [(u64, Option<Unit>); 4] = [
            (1_000, Some(Unit::Thousand)),
            (100, Some(Unit::Hundred)),
            (10, Some(Unit::Ten)),
            (1, None),
        ];

        let mut started = false;
        let mut pending_zero = false;
        for (place, unit) in PLACES {
            let digit = (value / place) % 10;
            if digit == 0 {
                pending_zero |= started;
                continue;
            }
            if pending_zero {
                out.push(CANONICAL_DIGITS[0]);
                pending_zero = false;
            }
            out.push(CANONICAL_DIGITS[digit as usize]);
            if let Some(unit) = unit {
                out.push(unit.canonical());
            }
            started = true;
        }
    }

    /// Spell a value below 10⁸ as `section 万 section`.
    fn spell_below_yi(value: u64, out: &mut String) {
        Self::spell_with_unit(value, WAN, Unit::TenThousand, 1_000, out, Self::spell_section);
    }

    /// Spell `value` as `high unit low`, inserting 零 when `low` does not
    /// reach the layer directly below the unit.
    fn spell_with_unit(
        value: u64,
        base: u64,
        unit: Unit,
        zero_threshold: u64,
        out: &mut String,
        spell_part: fn(u64, &mut String),
    ) {
        let high = value / base;
        let low = value % base;
        if high == 0 {
            spell_part(low, out);
            return;
        }
        spell_part(high, out);
        out.push(unit.canonical());
        if low == 0 {
            return;
        }
        if low < zero_threshold {
            out.push(CANONICAL_DIGITS[0]);
        }
        spell_part(low, out);
    }

    pub fn spell_value(value: u64) -> ConvertResult<String> {
        if value > MAX_SPELLED {
            return Err(ConvertError::Overflow);
        }
        if value == 0 {
            return Ok(CANONICAL_DIGITS[0].to_string());
        }

        let mut out = String::new();
        Self::spell_with_unit(value, YI, Unit::HundredMillion, 10_000_000, &mut out, Self::spell_below_yi);

        // 一十五 reads as 十五 at the head of a numeral
        if out.starts_with("一十") {
            out.remove(0);
        }
        Ok(out)
    }
}

impl DigitSpeller for LowercaseSpeller {
    fn spell_integer(&self, digits: &str) -> ConvertResult<String> {
        let significant = digits.trim_start_matches('0');
        if significant.len() > 16 {
            return Err(ConvertError::Overflow);
        }
        if significant.is_empty() {
            return Self::spell_value(0);
        }
        let value = significant
            .parse::<u64>()
            .map_err(|_| ConvertError::Format(digits.to_string()))?;
        Self::spell_value(value)
    }
}
