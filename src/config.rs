//! Spatial configuration
//!
//! Loaded once and shared read-only through the evaluation [`Context`].
//! Unknown keys are rejected; missing keys take their defaults.
//!
//! [`Context`]: crate::sql::Context

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::RingValidation;
use crate::observability::{log_event_with_fields, Event};

/// Spatial subsystem configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpatialConfig {
    /// Ring check applied by the polygon constructor (default: "closure")
    #[serde(default = "default_ring_validation")]
    pub ring_validation: RingValidation,
}

fn default_ring_validation() -> RingValidation {
    RingValidation::Closure
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            ring_validation: default_ring_validation(),
        }
    }
}

impl SpatialConfig {
    /// Closure-only ring checks (MySQL-compatible)
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Reject self-intersecting rings
    pub fn strict() -> Self {
        Self {
            ring_validation: RingValidation::Simple,
        }
    }

    /// Parse a config from JSON text
    pub fn from_json_str(json: &str) -> SpatialResult<Self> {
        serde_json::from_str(json).map_err(|e| SpatialError::Config(e.to_string()))
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SpatialResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let parsed = fs::read_to_string(path)
            .map_err(|e| SpatialError::Config(format!("failed to read '{}': {}", path_str, e)))
            .and_then(|text| Self::from_json_str(&text));

        match &parsed {
            Ok(config) => log_event_with_fields(
                Event::ConfigLoaded,
                &[
                    ("path", path_str.as_str()),
                    ("ring_validation", config.ring_validation.as_str()),
                ],
            ),
            Err(e) => {
                let reason = e.to_string();
                log_event_with_fields(
                    Event::ConfigRejected,
                    &[("path", path_str.as_str()), ("reason", reason.as_str())],
                )
            }
        }
        parsed
    }
}
