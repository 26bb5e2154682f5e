//! Observability for the spatial subsystem
//!
//! Structured JSON logging of lifecycle events. Observability is
//! read-only: it has no side effects on evaluation and never fails
//! the caller.
//!
//! ```ignore
//! use aerodb_spatial::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ConfigLoaded, &[("path", "/etc/aerodb/spatial.json")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
