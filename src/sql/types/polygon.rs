//! POLYGON type descriptor

use std::cmp::Ordering;
use std::fmt;

use super::{compare_nulls, compare_polygons, SqlType};
use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{encode_geometry, Polygon};
use crate::sql::{Value, WireType, WireValue};

/// Descriptor for the POLYGON type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolygonType;

/// The shared POLYGON descriptor
pub static POLYGON_TYPE: PolygonType = PolygonType;

impl PolygonType {
    fn expect_polygon(v: &Value) -> SpatialResult<&Polygon> {
        v.as_polygon().ok_or(SpatialError::TypeMismatch {
            context: "polygon comparison",
            expected: "polygon",
            actual: v.type_name(),
        })
    }
}

impl SqlType for PolygonType {
    fn name(&self) -> &'static str {
        "POLYGON"
    }

    fn wire_type(&self) -> WireType {
        WireType::Geometry
    }

    fn compare(&self, a: &Value, b: &Value) -> SpatialResult<Ordering> {
        if let Some(ord) = compare_nulls(a, b) {
            return Ok(ord);
        }
        let a = Self::expect_polygon(a)?;
        let b = Self::expect_polygon(b)?;
        Ok(compare_polygons(a, b))
    }

    fn convert(&self, v: Value) -> SpatialResult<Value> {
        match v {
            Value::Polygon(_) => Ok(v),
            other => Err(SpatialError::Conversion {
                target: "polygon",
                actual: other.type_name(),
            }),
        }
    }

    fn sql(&self, v: &Value) -> SpatialResult<WireValue> {
        match v {
            Value::Null => Ok(WireValue::null()),
            Value::Polygon(p) => Ok(WireValue::trusted(WireType::Geometry, encode_geometry(p))),
            other => Err(SpatialError::Conversion {
                target: "polygon",
                actual: other.type_name(),
            }),
        }
    }
}

impl fmt::Display for PolygonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
