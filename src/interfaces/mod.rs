// ============================================================================
// Interfaces Module
// Trait definitions for pluggable components
// ============================================================================

mod event_handler;

pub use event_handler::{ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
