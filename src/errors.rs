//! Spatial error types
//!
//! Error codes:
//! - AERO_INVALID_ARGUMENT_COUNT
//! - AERO_TYPE_MISMATCH
//! - AERO_INVALID_RING
//! - AERO_CONVERSION_FAILED
//! - AERO_MALFORMED_GEOMETRY
//! - AERO_UNRESOLVED_EXPRESSION
//! - AERO_FIELD_OUT_OF_RANGE
//! - AERO_CONFIG_INVALID
//!
//! Every error is returned to the caller. Nothing here is retried,
//! recovered or logged on the evaluation path.

use thiserror::Error;

use crate::geometry::RingDefect;

/// Result type for spatial operations
pub type SpatialResult<T> = Result<T, SpatialError>;

/// Spatial errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpatialError {
    #[error("function '{function}' expected {expected} arguments, got {actual}")]
    InvalidArgumentCount {
        function: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("{context} encountered a non-{expected} value ({actual})")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{context} encountered a non-linearring: {defect}")]
    InvalidRing {
        context: &'static str,
        defect: RingDefect,
    },

    #[error("can't convert {actual} to {target}")]
    Conversion {
        target: &'static str,
        actual: &'static str,
    },

    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    #[error("unresolved expression: {0}")]
    UnresolvedExpression(String),

    #[error("field index {index} out of range for row of length {len}")]
    FieldOutOfRange { index: usize, len: usize },

    #[error("invalid spatial config: {0}")]
    Config(String),
}

impl SpatialError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SpatialError::InvalidArgumentCount { .. } => "AERO_INVALID_ARGUMENT_COUNT",
            SpatialError::TypeMismatch { .. } => "AERO_TYPE_MISMATCH",
            SpatialError::InvalidRing { .. } => "AERO_INVALID_RING",
            SpatialError::Conversion { .. } => "AERO_CONVERSION_FAILED",
            SpatialError::MalformedGeometry(_) => "AERO_MALFORMED_GEOMETRY",
            SpatialError::UnresolvedExpression(_) => "AERO_UNRESOLVED_EXPRESSION",
            SpatialError::FieldOutOfRange { .. } => "AERO_FIELD_OUT_OF_RANGE",
            SpatialError::Config(_) => "AERO_CONFIG_INVALID",
        }
    }

    /// Returns true for errors raised while building expressions or loading
    /// configuration, before any row is evaluated.
    pub fn is_bind_error(&self) -> bool {
        matches!(
            self,
            SpatialError::InvalidArgumentCount { .. } | SpatialError::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = SpatialError::InvalidArgumentCount {
            function: "polygon",
            expected: "1 or more",
            actual: 0,
        };
        assert_eq!(err.code(), "AERO_INVALID_ARGUMENT_COUNT");
        assert_eq!(
            SpatialError::MalformedGeometry("x".into()).code(),
            "AERO_MALFORMED_GEOMETRY"
        );
        assert_eq!(SpatialError::Config("x".into()).code(), "AERO_CONFIG_INVALID");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = SpatialError::TypeMismatch {
            context: "polygon constructor",
            expected: "linestring",
            actual: "int64",
        };
        assert_eq!(
            err.to_string(),
            "polygon constructor encountered a non-linestring value (int64)"
        );
        assert!(!err.is_bind_error());
    }

    #[test]
    fn test_invalid_ring_message() {
        let err = SpatialError::InvalidRing {
            context: "polygon constructor",
            defect: RingDefect::NotClosed,
        };
        let display = err.to_string();
        assert!(display.contains("non-linearring"));
        assert!(display.contains("not closed"));
        assert_eq!(err.code(), "AERO_INVALID_RING");
    }

    #[test]
    fn test_bind_errors() {
        let arity = SpatialError::InvalidArgumentCount {
            function: "point",
            expected: "2",
            actual: 3,
        };
        assert!(arity.is_bind_error());
        assert!(arity.to_string().contains("expected 2 arguments, got 3"));
        assert!(!SpatialError::Conversion {
            target: "point",
            actual: "text"
        }
        .is_bind_error());
    }
}
