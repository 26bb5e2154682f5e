//! LINESTRING type descriptor

use std::cmp::Ordering;
use std::fmt;

use super::{compare_linestrings, compare_nulls, SqlType};
use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{encode_geometry, Linestring};
use crate::sql::{Value, WireType, WireValue};

/// Descriptor for the LINESTRING type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinestringType;

/// The shared LINESTRING descriptor
pub static LINESTRING_TYPE: LinestringType = LinestringType;

impl LinestringType {
    fn expect_linestring(v: &Value) -> SpatialResult<&Linestring> {
        v.as_linestring().ok_or(SpatialError::TypeMismatch {
            context: "linestring comparison",
            expected: "linestring",
            actual: v.type_name(),
        })
    }
}

impl SqlType for LinestringType {
    fn name(&self) -> &'static str {
        "LINESTRING"
    }

    fn wire_type(&self) -> WireType {
        WireType::Geometry
    }

    fn compare(&self, a: &Value, b: &Value) -> SpatialResult<Ordering> {
        if let Some(ord) = compare_nulls(a, b) {
            return Ok(ord);
        }
        let a = Self::expect_linestring(a)?;
        let b = Self::expect_linestring(b)?;
        Ok(compare_linestrings(a, b))
    }

    fn convert(&self, v: Value) -> SpatialResult<Value> {
        match v {
            Value::Linestring(_) => Ok(v),
            other => Err(SpatialError::Conversion {
                target: "linestring",
                actual: other.type_name(),
            }),
        }
    }

    fn sql(&self, v: &Value) -> SpatialResult<WireValue> {
        match v {
            Value::Null => Ok(WireValue::null()),
            Value::Linestring(l) => Ok(WireValue::trusted(WireType::Geometry, encode_geometry(l))),
            other => Err(SpatialError::Conversion {
                target: "linestring",
                actual: other.type_name(),
            }),
        }
    }
}

impl fmt::Display for LinestringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
