// ============================================================================
// Converter Factory
// Creates converters with validated configuration
// ============================================================================

use crate::domain::config::{ConverterConfig, Mode};
use crate::engine::Converter;
use crate::interfaces::{CharNormalizer, DigitSpeller, NoOpWarningHandler, WarningHandler};
use crate::utils::{LowercaseSpeller, StandardCharNormalizer};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a converter with the standard collaborators from configuration
///
/// # Example
/// ```
/// use cn_numerals::prelude::*;
/// use cn_numerals::engine::factory::create_from_config;
///
/// let converter = create_from_config(ConverterConfig::colloquial_preset()).unwrap();
/// assert_eq!(converter.convert_default("两百"), Ok(Number::Integer(200)));
/// ```
pub fn create_from_config(config: ConverterConfig) -> Result<Converter, String> {
    config.validate()?;
    Ok(Converter::with_config(config))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use cn_numerals::prelude::*;
/// use cn_numerals::engine::factory::ConverterBuilder;
/// use std::sync::Arc;
///
/// let converter = ConverterBuilder::new()
///     .mode(Mode::Normal)
///     .max_decimal_digits(4)
///     .warning_handler(Arc::new(LoggingWarningHandler))
///     .build()
///     .unwrap();
///
/// assert_eq!(converter.convert_default("一万二"), Ok(Number::Integer(12000)));
/// ```
pub struct ConverterBuilder {
    config: ConverterConfig,
    char_normalizer: Box<dyn CharNormalizer>,
    speller: Box<dyn DigitSpeller>,
    warning_handler: Arc<dyn WarningHandler>,
}

impl ConverterBuilder {
    /// Create a builder with the default configuration and collaborators
    pub fn new() -> Self {
        Self::from_config(ConverterConfig::default())
    }

    /// Start from an existing configuration
    pub fn from_config(config: ConverterConfig) -> Self {
        Self {
            config,
            char_normalizer: Box::new(StandardCharNormalizer::new()),
            speller: Box::new(LowercaseSpeller::new()),
            warning_handler: Arc::new(NoOpWarningHandler),
        }
    }

    // ========================================================================
    // Conversion Settings
    // ========================================================================

    /// Mode used by `Converter::convert_default`
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.default_mode = mode;
        self
    }

    /// Decimal digits kept before truncation
    pub fn max_decimal_digits(mut self, digits: usize) -> Self {
        self.config.max_decimal_digits = digits;
        self
    }

    /// Strip currency suffixes such as 元整
    pub fn strip_currency_suffix(mut self, enabled: bool) -> Self {
        self.config.strip_currency_suffix = enabled;
        self
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    pub fn char_normalizer(mut self, normalizer: impl CharNormalizer + 'static) -> Self {
        self.char_normalizer = Box::new(normalizer);
        self
    }

    pub fn speller(mut self, speller: impl DigitSpeller + 'static) -> Self {
        self.speller = Box::new(speller);
        self
    }

    pub fn warning_handler(mut self, handler: Arc<dyn WarningHandler>) -> Self {
        self.warning_handler = handler;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self) -> Result<Converter, String> {
        self.config.validate()?;
        Ok(Converter::new(
            self.config,
            self.char_normalizer,
            self.speller,
            self.warning_handler,
        ))
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
