// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use crate::engine::ConversionError;

/// Events emitted by the converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionEvent {
    /// Conversion requested
    Requested {
        numeral: String,
        source_base: u32,
        target_base: u32,
    },

    /// Source and target bases match; the numeral is returned verbatim
    PassedThrough { numeral: String, base: u32 },

    /// Fractional expansion hit the digit cap before reaching zero
    FractionCapReached { target_base: u32, digits: usize },

    /// Conversion finished
    Completed {
        numeral: String,
        result: String,
        source_base: u32,
        target_base: u32,
    },

    /// Conversion aborted
    Failed {
        numeral: String,
        error: ConversionError,
    },
}

/// Event handler trait for processing converter events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::FractionCapReached {
                target_base,
                digits,
            } => {
                tracing::info!(
                    target_base,
                    digits,
                    "fractional expansion did not terminate; result truncated"
                );
            },
            ConversionEvent::Failed { numeral, error } => {
                tracing::info!(%numeral, %error, "conversion failed");
            },
            _ => tracing::debug!("Converter event: {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler(Mutex<Vec<ConversionEvent>>);

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: ConversionEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(ConversionEvent::PassedThrough {
            numeral: "ff".to_string(),
            base: 16,
        });
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_events(vec![
            ConversionEvent::FractionCapReached {
                target_base: 3,
                digits: 100,
            },
            ConversionEvent::Failed {
                numeral: "#".to_string(),
                error: ConversionError::InvalidSymbol('#'),
            },
        ]);
    }

    #[test]
    fn test_on_events_forwards_in_order() {
        let handler = RecordingHandler::default();
        let events = vec![
            ConversionEvent::Requested {
                numeral: "1".to_string(),
                source_base: 2,
                target_base: 10,
            },
            ConversionEvent::Completed {
                numeral: "1".to_string(),
                result: "1".to_string(),
                source_base: 2,
                target_base: 10,
            },
        ];
        handler.on_events(events.clone());
        assert_eq!(*handler.0.lock().unwrap(), events);
    }
}
