// ============================================================================
// Integer Converter
// Unit-arithmetic folding of validated worded integers
// ============================================================================

use super::errors::{ConvertError, ConvertResult};
use crate::domain::{Glyph, GlyphTable, Mode, Unit};
use smallvec::SmallVec;

/// Token stream produced from validated numeral text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Non-zero digit 1-9
    Digit(u8),
    /// Formal elision marker
    Zero,
    Unit(Unit),
}

pub type Tokens = SmallVec<[Token; 24]>;

/// Tokenize validated text. Any character outside the digit/unit alphabet
/// breaks the grammar invariant and is skipped.
pub fn tokenize(text: &str) -> Tokens {
    let table = GlyphTable::shared();
    text.chars()
        .filter_map(|ch| {
            let glyph = table.classify(ch, Mode::Normal);
            debug_assert!(glyph.is_some(), "unvalidated glyph {ch:?} reached the integer converter");
            glyph
        })
        .map(|glyph| match glyph {
            Glyph::Digit(0) => Token::Zero,
            Glyph::Digit(d) => Token::Digit(d),
            Glyph::Unit(unit) => Token::Unit(unit),
        })
        .collect()
}

// ============================================================================
// Folding State Machine
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing consumed yet
    SegmentStart,
    /// Inside a sub-10⁴ segment
    Accumulating,
    /// A large unit was just folded; another large unit compounds it (万亿)
    AfterLargeFold,
}

#[derive(Debug)]
struct Folder {
    state: State,
    total: i64,
    segment: i64,
    pending: Option<i64>,
    largest_fold: Option<Unit>,
}

impl Folder {
    fn new() -> Self {
        Self {
            state: State::SegmentStart,
            total: 0,
            segment: 0,
            pending: None,
            largest_fold: None,
        }
    }

    fn step(&mut self, token: Token) -> ConvertResult<()> {
        match token {
            Token::Digit(d) => {
                self.pending = Some(i64::from(d));
                self.state = State::Accumulating;
            },
            Token::Zero => {},
            Token::Unit(unit) if unit.is_large() => self.fold(unit)?,
            Token::Unit(unit) => {
                // A unit with no digit in front carries an implicit one.
                let multiplier = self.pending.take().unwrap_or(1);
                self.segment = checked_add(self.segment, checked_mul(multiplier, unit.magnitude())?)?;
                self.state = State::Accumulating;
            },
        }
        Ok(())
    }

    fn fold(&mut self, unit: Unit) -> ConvertResult<()> {
        let implicit_one = self.state == State::SegmentStart && self.pending.is_none();
        let bare = self.pending.take().unwrap_or(if implicit_one { 1 } else { 0 });
        let segment = checked_add(self.segment, bare)?;

        // A unit outranking every earlier fold scales everything so far.
        let outranks = self.largest_fold.map_or(true, |largest| unit > largest);
        self.total = if outranks {
            checked_mul(checked_add(self.total, segment)?, unit.magnitude())?
        } else {
            checked_add(self.total, checked_mul(segment, unit.magnitude())?)?
        };

        self.largest_fold = Some(self.largest_fold.map_or(unit, |largest| largest.max(unit)));
        self.segment = 0;
        self.state = State::AfterLargeFold;
        Ok(())
    }

    fn finish(self) -> ConvertResult<i64> {
        let remainder = checked_add(self.segment, self.pending.unwrap_or(0))?;
        checked_add(self.total, remainder)
    }
}

#[inline]
fn checked_add(a: i64, b: i64) -> ConvertResult<i64> {
    a.checked_add(b).ok_or(ConvertError::Overflow)
}

#[inline]
fn checked_mul(a: i64, b: i64) -> ConvertResult<i64> {
    a.checked_mul(b).ok_or(ConvertError::Overflow)
}

/// Convert grammar-valid integer text such as `一万二千三百` into its value.
pub fn convert_integer(text: &str) -> ConvertResult<i64> {
    let mut folder = Folder::new();
    for token in tokenize(text) {
        folder.step(token)?;
    }
    folder.finish()
}
