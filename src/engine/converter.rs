// ============================================================================
// Converter
// Wires normalize -> classify -> convert -> combine -> sign
// ============================================================================

use super::classifier::Classifier;
use super::normalizer::InputNormalizer;
use crate::domain::{Classified, ConverterConfig, Mode, Number, NumeralInput, ParseResult};
use crate::grammar::GrammarSet;
use crate::interfaces::{
    CharNormalizer, ConversionWarning, DigitSpeller, NoOpWarningHandler, WarningHandler,
};
use crate::numeric::{
    compose, convert_decimal, convert_direct, convert_integer, ConvertError, ConvertResult,
};
use crate::utils::{LowercaseSpeller, StandardCharNormalizer};
use std::sync::Arc;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A converted value together with the warnings raised on the way.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Conversion {
    pub value: Number,
    pub warnings: Vec<ConversionWarning>,
}

/// Chinese numeral converter.
///
/// Tables and grammars are built once in `new` and only read afterwards, so a
/// converter can be shared between threads without locking.
pub struct Converter {
    config: ConverterConfig,

    /// Compiled strict and normal grammars
    grammars: GrammarSet,

    /// Traditional -> simplified, full-width -> half-width
    char_normalizer: Box<dyn CharNormalizer>,

    /// Spells Arabic digit runs in smart mode
    speller: Box<dyn DigitSpeller>,

    /// Receives non-fatal warnings
    warning_handler: Arc<dyn WarningHandler>,
}

impl Converter {
    pub fn new(
        config: ConverterConfig,
        char_normalizer: Box<dyn CharNormalizer>,
        speller: Box<dyn DigitSpeller>,
        warning_handler: Arc<dyn WarningHandler>,
    ) -> Self {
        Self {
            config,
            grammars: GrammarSet::build(),
            char_normalizer,
            speller,
            warning_handler,
        }
    }

    /// Converter with the standard collaborators and no warning handler.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self::new(
            config,
            Box::new(StandardCharNormalizer::new()),
            Box::new(LowercaseSpeller::new()),
            Arc::new(NoOpWarningHandler),
        )
    }

    /// Convert `input` under `mode`.
    pub fn convert(&self, input: impl Into<NumeralInput>, mode: Mode) -> ConvertResult<Number> {
        self.convert_with_report(input, mode).map(|c| c.value)
    }

    /// Convert `input` under the configured default mode.
    pub fn convert_default(&self, input: impl Into<NumeralInput>) -> ConvertResult<Number> {
        self.convert(input, self.config.default_mode)
    }

    /// Convert `input` and report any warnings alongside the value.
    pub fn convert_with_report(
        &self,
        input: impl Into<NumeralInput>,
        mode: Mode,
    ) -> ConvertResult<Conversion> {
        let raw = input.into().into_text();
        if raw.is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        let text = self.char_normalizer.normalize(&raw);
        let normalizer =
            InputNormalizer::new(self.speller.as_ref(), self.config.strip_currency_suffix);
        let classifier = Classifier::new(&self.grammars, self.config.max_decimal_digits);

        let mut warnings = Vec::new();
        let normalized = normalizer.normalize(&text, mode)?;
        let classified = classifier.classify(normalized, mode, &text, &mut warnings)?;

        let value = match classified {
            Classified::Ready(number) => {
                debug!(input = %raw, %mode, value = %number, "fast path");
                number
            }
            Classified::Numeral(parsed) => {
                let number = self.evaluate(&parsed)?;
                debug!(
                    input = %raw,
                    %mode,
                    integer = %parsed.integer_text,
                    value = %number,
                    "converted"
                );
                number
            }
        };

        if !warnings.is_empty() {
            self.warning_handler.on_warnings(&warnings);
        }
        Ok(Conversion { value, warnings })
    }

    fn evaluate(&self, parsed: &ParseResult) -> ConvertResult<Number> {
        let integer = if parsed.is_all_digit_form {
            convert_direct(&parsed.integer_text)?
        } else {
            convert_integer(&parsed.integer_text)?
        };

        let number = match &parsed.decimal_text {
            Some(decimal) => {
                let fraction = convert_decimal(decimal, self.config.max_decimal_digits);
                Number::Float(compose(integer, &fraction)?)
            }
            None => Number::Integer(integer),
        };
        parsed.sign.apply(number)
    }

    /// Get the converter configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::with_config(ConverterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<ConversionWarning>>);

    impl WarningHandler for Recording {
        fn on_warning(&self, warning: &ConversionWarning) {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(warning.clone());
            }
        }
    }

    #[test]
    fn test_converter_basic() {
        let converter = Converter::default();
        assert_eq!(converter.convert("一百零八", Mode::Strict), Ok(Number::Integer(108)));
        assert_eq!(converter.convert("三点一四", Mode::Strict), Ok(Number::Float(3.14)));
    }

    #[test]
    fn test_convert_default_uses_config_mode() {
        let converter = Converter::with_config(ConverterConfig::colloquial_preset());
        assert_eq!(converter.convert_default("两百"), Ok(Number::Integer(200)));

        let strict = Converter::default();
        assert!(strict.convert_default("两百").is_err());
    }

    #[test]
    fn test_empty_input_rejected() {
        let converter = Converter::default();
        assert_eq!(converter.convert("", Mode::Normal), Err(ConvertError::EmptyInput));
    }

    #[test]
    fn test_warning_reaches_handler() {
        let handler = Arc::new(Recording::default());
        let converter = Converter::new(
            ConverterConfig::default(),
            Box::new(StandardCharNormalizer::new()),
            Box::new(LowercaseSpeller::new()),
            handler.clone(),
        );

        let text = format!("零点{}", "一".repeat(17));
        let report = converter.convert_with_report(text.as_str(), Mode::Strict).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.value, Number::Float(0.1111111111111111));
        assert_eq!(handler.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_configured_precision_cap() {
        let converter = Converter::with_config(ConverterConfig::default().with_max_decimal_digits(2));
        let report = converter.convert_with_report("一点二三四", Mode::Strict).unwrap();
        assert_eq!(report.value, Number::Float(1.23));
        assert_eq!(
            report.warnings,
            vec![ConversionWarning::PrecisionTruncated {
                original_digits: 3,
                retained_digits: 2
            }]
        );
    }

    #[test]
    fn test_no_warnings_on_short_decimal() {
        let converter = Converter::default();
        let report = converter.convert_with_report("一点五", Mode::Strict).unwrap();
        assert!(report.warnings.is_empty());
    }
}
