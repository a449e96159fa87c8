// ============================================================================
// Numeral Value Objects
// Conversion input, conversion output and the per-call parse result
// ============================================================================

use crate::numeric::{ConvertError, ConvertResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Input
// ============================================================================

/// Anything the converter accepts. Numbers are stringified before processing.
#[derive(Debug, Clone, PartialEq)]
pub enum NumeralInput {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl NumeralInput {
    pub fn into_text(self) -> String {
        match self {
            NumeralInput::Text(text) => text,
            NumeralInput::Integer(value) => value.to_string(),
            // 2.0 must stay a float literal
            NumeralInput::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                format!("{value}.0")
            }
            NumeralInput::Float(value) => value.to_string(),
        }
    }
}

impl From<&str> for NumeralInput {
    fn from(text: &str) -> Self {
        NumeralInput::Text(text.to_string())
    }
}

impl From<String> for NumeralInput {
    fn from(text: String) -> Self {
        NumeralInput::Text(text)
    }
}

impl From<&String> for NumeralInput {
    fn from(text: &String) -> Self {
        NumeralInput::Text(text.clone())
    }
}

impl From<i64> for NumeralInput {
    fn from(value: i64) -> Self {
        NumeralInput::Integer(value)
    }
}

impl From<i32> for NumeralInput {
    fn from(value: i32) -> Self {
        NumeralInput::Integer(value.into())
    }
}

impl From<u32> for NumeralInput {
    fn from(value: u32) -> Self {
        NumeralInput::Integer(value.into())
    }
}

impl From<f64> for NumeralInput {
    fn from(value: f64) -> Self {
        NumeralInput::Float(value)
    }
}

// ============================================================================
// Output
// ============================================================================

/// Conversion result: an integer unless a fractional part was present.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    /// Integer value, or `None` for floats.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(value) => Some(value),
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{value}"),
            Number::Float(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f, "{value:.1}")
            }
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}

// ============================================================================
// Parse Result
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    /// Apply the sign; negating `i64::MIN` overflows.
    pub fn apply(self, number: Number) -> ConvertResult<Number> {
        match (self, number) {
            (Sign::Positive, n) => Ok(n),
            (Sign::Negative, Number::Integer(v)) => v
                .checked_neg()
                .map(Number::Integer)
                .ok_or(ConvertError::Overflow),
            (Sign::Negative, Number::Float(v)) => Ok(Number::Float(-v)),
        }
    }
}

/// Validated numeral segments, consumed within one conversion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub sign: Sign,
    /// Never empty
    pub integer_text: String,
    /// At most the precision cap in length
    pub decimal_text: Option<String>,
    /// Digits only, read positionally by the direct converter
    pub is_all_digit_form: bool,
}

/// Classifier outcome. `Ready` is the fast path: the input was already
/// numeric and its value is final.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Ready(Number),
    Numeral(ParseResult),
}
