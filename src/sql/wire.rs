//! Client wire representation of values
//!
//! A wire value is a type tag plus an opaque payload. NULL is its own
//! marker with no payload, never an empty payload.

use std::fmt;

use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{decode_geometry, Geometry};

/// Wire-level type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Null,
    Int64,
    Float64,
    Text,
    Geometry,
}

impl WireType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WireType::Null => "NULL_TYPE",
            WireType::Int64 => "INT64",
            WireType::Float64 => "FLOAT64",
            WireType::Text => "TEXT",
            WireType::Geometry => "GEOMETRY",
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An encoded value ready for the client protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireValue {
    wire_type: WireType,
    payload: Option<Vec<u8>>,
}

impl WireValue {
    /// The wire NULL marker
    pub fn null() -> Self {
        Self {
            wire_type: WireType::Null,
            payload: None,
        }
    }

    /// Wraps a payload that is already known to be valid for its type
    pub fn trusted(wire_type: WireType, payload: Vec<u8>) -> Self {
        Self {
            wire_type,
            payload: Some(payload),
        }
    }

    pub fn is_null(&self) -> bool {
        self.payload.is_none()
    }

    pub fn wire_type(&self) -> WireType {
        self.wire_type
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    /// Decodes a Geometry wire value back into its shape
    pub fn to_geometry(&self) -> SpatialResult<Geometry> {
        match (&self.wire_type, &self.payload) {
            (WireType::Geometry, Some(bytes)) => decode_geometry(bytes),
            _ => Err(SpatialError::MalformedGeometry(format!(
                "expected a GEOMETRY wire value, got {}",
                self.wire_type
            ))),
        }
    }
}
