// ============================================================================
// Chinese Numerals Library
// Grammar-validated conversion of Chinese numerals to numbers
// ============================================================================

//! # Chinese Numerals
//!
//! Converts Chinese numeral text such as `三千零一十五`, `负三点一四` or
//! `十三万六` into integers and floats.
//!
//! ## Features
//!
//! - **Three strictness modes**: strict (formal glyphs only), normal (colloquial
//!   glyphs and spoken shortcuts) and smart (mixed Arabic digits and units)
//! - **Layered grammars** that reject malformed numerals before any arithmetic
//! - **Exact decimal arithmetic** with a configurable precision cap
//! - **Pluggable collaborators** for character normalization and digit spelling
//!
//! ## Example
//!
//! ```rust
//! use cn_numerals::prelude::*;
//!
//! assert_eq!(convert("三千零一十五", "strict"), Ok(Number::Integer(3015)));
//! assert_eq!(convert("一万二", "normal"), Ok(Number::Integer(12000)));
//! assert_eq!(convert("10.1万", "smart"), Ok(Number::Float(101000.0)));
//!
//! // Reusable converter with its own configuration
//! let converter = ConverterBuilder::new().mode(Mode::Normal).build().unwrap();
//! assert_eq!(converter.convert_default("负五十"), Ok(Number::Integer(-50)));
//! ```

pub mod domain;
pub mod engine;
pub mod grammar;
pub mod interfaces;
pub mod numeric;
pub mod utils;

use std::sync::OnceLock;

use domain::{Mode, Number, NumeralInput};
use engine::Converter;
use numeric::ConvertResult;

/// Convert `input` with a shared default converter.
///
/// `mode` is one of `strict`, `normal` or `smart`; anything else is a
/// configuration error.
pub fn convert(input: impl Into<NumeralInput>, mode: &str) -> ConvertResult<Number> {
    static CONVERTER: OnceLock<Converter> = OnceLock::new();

    let mode: Mode = mode.parse()?;
    CONVERTER.get_or_init(Converter::default).convert(input, mode)
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::convert;
    pub use crate::domain::{ConverterConfig, Mode, Number, NumeralInput, MAX_DECIMAL_DIGITS};
    pub use crate::engine::{create_from_config, Conversion, Converter, ConverterBuilder};
    pub use crate::interfaces::{
        CharNormalizer, ConversionWarning, DigitSpeller, LoggingWarningHandler,
        NoOpWarningHandler, WarningHandler,
    };
    pub use crate::numeric::{ConvertError, ConvertResult};
    pub use crate::utils::{LowercaseSpeller, StandardCharNormalizer};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;

    fn int(value: i64) -> ConvertResult<Number> {
        Ok(Number::Integer(value))
    }

    fn float(value: f64) -> ConvertResult<Number> {
        Ok(Number::Float(value))
    }

    #[test]
    fn test_strict_formal_numerals() {
        assert_eq!(convert("三千零一十五", "strict"), int(3015));
        assert_eq!(convert("一百零八", "strict"), int(108));
        assert_eq!(convert("十一", "strict"), int(11));
        assert_eq!(convert("一万二千三百", "strict"), int(12300));
        assert_eq!(convert("贰佰零伍", "strict"), int(205));
    }

    #[test]
    fn test_implicit_leading_one() {
        assert_eq!(convert("千一", "normal"), int(1001));
        assert!(convert("千一", "strict").is_err());
    }

    #[test]
    fn test_colloquial_truncation() {
        assert_eq!(convert("一万二", "normal"), int(12000));
        assert_eq!(convert("十三万六", "normal"), int(136_000));
        assert_eq!(convert("两千三", "normal"), int(2300));
        assert_eq!(convert("三亿五", "normal"), int(350_000_000));
        assert_eq!(convert("一万二千三", "smart"), int(12300));
    }

    #[test]
    fn test_decimals_in_every_mode() {
        for mode in Mode::ALL {
            assert_eq!(convert("三点一四", mode.as_str()), float(3.14), "{mode}");
        }
        assert_eq!(convert("零点五", "strict"), float(0.5));
        assert_eq!(convert("一点五七", "strict"), float(1.57));
    }

    #[test]
    fn test_arabic_literals() {
        assert_eq!(convert("3.14", "normal"), float(3.14));
        assert_eq!(convert(42, "normal"), int(42));
        assert_eq!(convert(2.5, "smart"), float(2.5));
        assert!(matches!(
            convert("3.14", "strict"),
            Err(ConvertError::CharacterNotAllowed { glyph: '3', .. })
        ));
    }

    #[test]
    fn test_whole_float_input_stays_float() {
        assert_eq!(convert(2.0, "smart"), float(2.0));
        assert_eq!(convert(2.0, "normal"), float(2.0));
        assert_eq!(convert(-100.0, "normal"), float(-100.0));
    }

    #[test]
    fn test_currency_shorthand() {
        assert_eq!(convert("五元三角", "normal"), float(5.3));
        assert_eq!(convert("一百元整", "strict"), int(100));
    }

    #[test]
    fn test_negative_numerals() {
        assert_eq!(convert("负五十", "normal"), int(-50));
        assert_eq!(convert("负三点一四", "strict"), float(-3.14));
        assert_eq!(convert("负3万", "smart"), int(-30_000));
    }

    #[test]
    fn test_smart_mixed_forms() {
        assert_eq!(convert("10.1万", "smart"), float(101_000.0));
        assert_eq!(convert("3万5千", "smart"), int(35_000));
        assert_eq!(convert("12点05", "smart"), float(12.05));
    }

    #[test]
    fn test_precision_truncation_is_a_warning() {
        let converter = Converter::default();
        let text = format!("零点{}", "三".repeat(17));
        let report = converter.convert_with_report(text.as_str(), Mode::Strict).unwrap();

        assert_eq!(report.value, Number::Float(0.3333333333333333));
        assert_eq!(
            report.warnings,
            vec![ConversionWarning::PrecisionTruncated {
                original_digits: 17,
                retained_digits: 16
            }]
        );
    }

    #[test]
    fn test_error_taxonomy() {
        assert_eq!(
            convert("两百", "strict"),
            Err(ConvertError::CharacterNotAllowed {
                mode: Mode::Strict,
                glyph: '两'
            })
        );
        assert!(matches!(convert("一百", "fuzzy"), Err(ConvertError::Configuration(_))));
        assert_eq!(
            convert("一点二点三", "normal"),
            Err(ConvertError::MultipleDecimalPoints)
        );
        assert_eq!(
            convert("一百五", "strict"),
            Err(ConvertError::Format("一百五".to_string()))
        );
        assert_eq!(convert("", "normal"), Err(ConvertError::EmptyInput));
    }

    #[test]
    fn test_missing_integer_segment() {
        for mode in Mode::ALL {
            assert_eq!(
                convert("点五", mode.as_str()),
                Err(ConvertError::Format("点五".to_string())),
                "{mode}"
            );
            assert_eq!(
                convert("负", mode.as_str()),
                Err(ConvertError::Format("负".to_string())),
                "{mode}"
            );
        }
    }

    #[test]
    fn test_negating_minimum_overflows() {
        assert_eq!(
            convert("负-9223372036854775808", "normal"),
            Err(ConvertError::Overflow)
        );
        assert_eq!(
            convert("负-9223372036854775807", "normal"),
            int(i64::MAX)
        );
    }

    #[test]
    fn test_truncation_does_not_hide_bad_glyphs() {
        let text = format!("三点{}十", "一".repeat(16));
        assert_eq!(convert(text.as_str(), "strict"), Err(ConvertError::Format(text.clone())));
        assert!(convert(text.as_str(), "normal").is_err());
    }

    #[test]
    fn test_character_normalization() {
        assert_eq!(convert("１２．５", "normal"), float(12.5));
        assert_eq!(convert("壹萬貳仟", "strict"), int(12000));
        assert_eq!(convert("負三點五", "strict"), float(-3.5));
    }

    #[test]
    fn test_mode_parsing_is_case_insensitive() {
        assert_eq!(convert("一万二", "Normal"), int(12000));
        assert_eq!(convert("十", "STRICT"), int(10));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_serializes_to_json() {
        let converter = Converter::default();
        let report = converter
            .convert_with_report("一点二三四", Mode::Strict)
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["value"], serde_json::json!(1.234));
        assert_eq!(json["warnings"], serde_json::json!([]));

        let mode: Mode = serde_json::from_str("\"smart\"").unwrap();
        assert_eq!(mode, Mode::Smart);
    }

    proptest! {
        #[test]
        fn prop_spelled_values_convert_back(value in 0i64..1_000_000_000_000_000) {
            let spelled = LowercaseSpeller::spell_value(value as u64).unwrap();
            for mode in Mode::ALL {
                prop_assert_eq!(convert(spelled.as_str(), mode.as_str()), int(value));
            }
        }

        #[test]
        fn prop_negative_sign_negates(value in 1i64..1_000_000_000_000) {
            let spelled = LowercaseSpeller::spell_value(value as u64).unwrap();
            let negative = format!("负{spelled}");
            prop_assert_eq!(convert(negative.as_str(), "strict"), int(-value));
        }

        #[test]
        fn prop_arabic_integers_pass_through(value in any::<i32>()) {
            prop_assert_eq!(convert(value, "normal"), int(value as i64));
        }
    }
}
