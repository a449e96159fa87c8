// ============================================================================
// Warning Handler Interface
// Non-fatal conditions raised while a conversion proceeds
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Warnings emitted by the converter. None of them stop a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionWarning {
    /// Decimal segment exceeded the precision cap and was truncated
    PrecisionTruncated {
        original_digits: usize,
        retained_digits: usize,
    },
}

/// Warning handler trait for the converter's non-fatal channel.
/// Implementations can log, count, or forward warnings.
pub trait WarningHandler: Send + Sync {
    /// Handle a single warning
    fn on_warning(&self, warning: &ConversionWarning);

    /// Batch handler
    fn on_warnings(&self, warnings: &[ConversionWarning]) {
        for warning in warnings {
            self.on_warning(warning);
        }
    }
}

/// Drops every warning
pub struct NoOpWarningHandler;

impl WarningHandler for NoOpWarningHandler {
    fn on_warning(&self, _warning: &ConversionWarning) {}
}

/// Logs warnings through `tracing`
pub struct LoggingWarningHandler;

impl WarningHandler for LoggingWarningHandler {
    fn on_warning(&self, warning: &ConversionWarning) {
        match warning {
            ConversionWarning::PrecisionTruncated {
                original_digits,
                retained_digits,
            } => tracing::warn!(
                original_digits,
                retained_digits,
                "decimal part has {} digits, keeping the first {}",
                original_digits,
                retained_digits
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collecting(Mutex<Vec<ConversionWarning>>);

    impl WarningHandler for Collecting {
        fn on_warning(&self, warning: &ConversionWarning) {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(warning.clone());
            }
        }
    }

    #[test]
    fn test_noop_handler() {
        NoOpWarningHandler.on_warning(&ConversionWarning::PrecisionTruncated {
            original_digits: 17,
            retained_digits: 16,
        });
        // Should not panic
    }

    #[test]
    fn test_batch_delivery() {
        let handler = Collecting::default();
        let warning = ConversionWarning::PrecisionTruncated {
            original_digits: 20,
            retained_digits: 16,
        };
        handler.on_warnings(&[warning.clone(), warning.clone()]);
        assert_eq!(handler.0.lock().unwrap().len(), 2);
    }
}
