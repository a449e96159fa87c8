// ============================================================================
// Engine Module
// Normalization, classification and the conversion orchestrator
// ============================================================================

mod classifier;
mod converter;
mod normalizer;

pub mod factory;

pub use classifier::{canonical_spelling, truncated_unit_suffix, Classifier};
pub use converter::{Conversion, Converter};
pub use factory::{create_from_config, ConverterBuilder};
pub use normalizer::{parse_literal, InputNormalizer, Normalized, Segments};
