// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod collaborators;
mod warning_handler;

pub use collaborators::{CharNormalizer, DigitSpeller};
pub use warning_handler::{
    ConversionWarning, LoggingWarningHandler, NoOpWarningHandler, WarningHandler,
};
