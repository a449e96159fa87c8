// ============================================================================
// Utilities Module
// Default implementations of the converter's collaborators
// ============================================================================

mod char_normalize;
mod speller;

pub use char_normalize::StandardCharNormalizer;
pub use speller::LowercaseSpeller;
