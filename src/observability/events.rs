//! Observable spatial subsystem events
//!
//! Events are explicit and typed. Expression evaluation emits none;
//! its failures are returned to the caller instead.

use std::fmt;

use super::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Spatial configuration loaded from disk
    ConfigLoaded,
    /// Spatial configuration file unreadable or invalid
    ConfigRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "SPATIAL_CONFIG_LOADED",
            Event::ConfigRejected => "SPATIAL_CONFIG_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ConfigLoaded => Severity::Info,
            Event::ConfigRejected => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::ConfigLoaded.as_str(), "SPATIAL_CONFIG_LOADED");
        assert_eq!(Event::ConfigRejected.to_string(), "SPATIAL_CONFIG_REJECTED");
    }

    #[test]
    fn test_rejection_is_error() {
        assert_eq!(Event::ConfigLoaded.severity(), Severity::Info);
        assert_eq!(Event::ConfigRejected.severity(), Severity::Error);
    }
}
