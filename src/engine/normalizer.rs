// ============================================================================
// Input Normalizer
// Suffix stripping, shorthand rewriting, sign extraction and segmentation
// ============================================================================

use crate::domain::tables::{FEN, JIAO, NEGATIVE, POINT, YUAN};
use crate::domain::{GlyphTable, Mode, Number, Sign};
use crate::interfaces::DigitSpeller;
use crate::numeric::{to_f64, ConvertError, ConvertResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Currency completion words stripped in every mode.
const COMPLETION_SUFFIXES: [&str; 4] = ["元整", "圆整", "元正", "圆正"];

/// Zero glyph followed by a unit whose leading 一 was elided.
const ELISION_REPAIRS: [(&str, &str); 4] = [
    ("零十", "零一十"),
    ("零百", "零一百"),
    ("〇十", "〇一十"),
    ("〇百", "〇一百"),
];

/// Normalized segments of a worded numeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    pub sign: Sign,
    pub integer: String,
    pub decimal: Option<String>,
}

/// Normalizer outcome. `Ready` carries the final value of an input that was
/// already numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Ready(Number),
    Segments(Segments),
}

/// Rewrites raw (character-normalised) text into validated segments.
pub struct InputNormalizer<'a> {
    speller: &'a dyn DigitSpeller,
    strip_currency_suffix: bool,
}

impl<'a> InputNormalizer<'a> {
    pub fn new(speller: &'a dyn DigitSpeller, strip_currency_suffix: bool) -> Self {
        Self {
            speller,
            strip_currency_suffix,
        }
    }

    pub fn normalize(&self, text: &str, mode: Mode) -> ConvertResult<Normalized> {
        let mut text = text.replace('廿', "二十");

        if self.strip_currency_suffix {
            text = strip_completion_suffix(text);
            if mode != Mode::Strict {
                text = strip_bare_yuan(text);
            }
        }
        text = rewrite_yuan_jiao_fen(text);
        text = repair_elision(text);

        if text.is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        let (sign, body) = match text.strip_prefix(NEGATIVE) {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, text.as_str()),
        };

        if mode != Mode::Strict {
            if let Some(number) = parse_literal(body, mode == Mode::Smart) {
                return Ok(Normalized::Ready(sign.apply(number?)?));
            }
        }

        let table = GlyphTable::shared();
        if let Some(glyph) = text.chars().find(|&ch| !table.is_permitted(ch, mode)) {
            return Err(ConvertError::CharacterNotAllowed { mode, glyph });
        }

        let mut parts = body.split(POINT);
        let integer = parts.next().unwrap_or_default().to_string();
        let decimal = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return Err(ConvertError::MultipleDecimalPoints);
        }

        let mut segments = Segments {
            sign,
            integer,
            decimal,
        };
        if mode == Mode::Smart {
            self.spell_arabic_runs(&mut segments)?;
        }
        Ok(Normalized::Segments(segments))
    }

    /// Replace every maximal run of Arabic digits with its Chinese spelling.
    fn spell_arabic_runs(&self, segments: &mut Segments) -> ConvertResult<()> {
        segments.integer = replace_digit_runs(&segments.integer, |run| {
            self.speller.spell_integer(run)
        })?;
        if let Some(decimal) = segments.decimal.as_mut() {
            *decimal = replace_digit_runs(decimal, |run| Ok(self.speller.spell_positional(run)))?;
        }
        Ok(())
    }
}

// ============================================================================
// Rewriting Steps
// ============================================================================

fn strip_completion_suffix(text: String) -> String {
    for suffix in COMPLETION_SUFFIXES {
        if let Some(stripped) = text.strip_suffix(suffix) {
            return stripped.to_string();
        }
    }
    text
}

fn strip_bare_yuan(text: String) -> String {
    match text.strip_suffix(YUAN) {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// `五元三角` -> `五点三`, `五元三角二分` -> `五点三二`
fn rewrite_yuan_jiao_fen(text: String) -> String {
    let table = GlyphTable::shared();
    let is_digit = |ch: &char| table.digit(*ch, Mode::Normal).is_some();
    let chars: Vec<char> = text.chars().collect();

    let jiao_at = match chars.as_slice() {
        [.., d1, JIAO, d2, FEN] if is_digit(d1) && is_digit(d2) => chars.len() - 3,
        [.., _, JIAO] => chars.len() - 1,
        _ => return text,
    };
    let shorthand = jiao_at >= 2
        && is_digit(&chars[jiao_at - 1])
        && YUAN.contains(&chars[jiao_at - 2]);
    if !shorthand {
        return text;
    }

    chars
        .into_iter()
        .filter(|&ch| ch != JIAO && ch != FEN)
        .map(|ch| if YUAN.contains(&ch) { POINT } else { ch })
        .collect()
}

fn repair_elision(mut text: String) -> String {
    for (elided, repaired) in ELISION_REPAIRS {
        if text.contains(elided) {
            text = text.replace(elided, repaired);
        }
    }
    text
}

fn replace_digit_runs<F>(text: &str, mut spell: F) -> ConvertResult<String>
where
    F: FnMut(&str) -> ConvertResult<String>,
{
    let mut out = String::with_capacity(text.len() * 3);
    let mut run_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_ascii_digit() {
            run_start.get_or_insert(idx);
            continue;
        }
        if let Some(start) = run_start.take() {
            out.push_str(&spell(&text[start..idx])?);
        }
        out.push(ch);
    }
    if let Some(start) = run_start {
        out.push_str(&spell(&text[start..])?);
    }
    Ok(out)
}

// ============================================================================
// Arabic Literal Fast Path
// ============================================================================

/// Parse `-?digits(.digits)?` with an optional trailing unit glyph.
/// Returns `None` when `text` is not such a literal in its entirety.
pub fn parse_literal(text: &str, allow_unit: bool) -> Option<ConvertResult<Number>> {
    let table = GlyphTable::shared();
    let (body, unit) = match text.chars().last() {
        Some(last) if allow_unit => match table.unit(last, Mode::Normal) {
            Some(unit) => (&text[..text.len() - last.len_utf8()], Some(unit)),
            None => (text, None),
        },
        _ => (text, None),
    };

    if !is_plain_decimal(body) {
        return None;
    }

    let result = body
        .parse::<Decimal>()
        .map_err(|_| ConvertError::Overflow)
        .and_then(|value| match unit {
            Some(unit) => value
                .checked_mul(Decimal::from(unit.magnitude()))
                .ok_or(ConvertError::Overflow),
            None => Ok(value),
        })
        .and_then(|value| {
            if body.contains('.') {
                to_f64(value).map(Number::Float)
            } else {
                value.to_i64().map(Number::Integer).ok_or(ConvertError::Overflow)
            }
        });
    Some(result)
}

fn is_plain_decimal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}
